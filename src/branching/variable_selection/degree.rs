use std::cmp::Reverse;

use crate::engine::variables::VariableId;
use crate::engine::Problem;

/// Selects the unassigned variable which occurs in the most constraints that still have another
/// unassigned variable in their scope. Ties are broken in favour of the variable which was created
/// first.
pub fn degree(problem: &Problem) -> Option<VariableId> {
    problem
        .unassigned_variables()
        .min_by_key(|&variable| Reverse(problem.num_constraints_with_other_unassigned(variable)))
}
