use crate::engine::variables::VariableId;
use crate::engine::Problem;

/// Selects the first unassigned variable in the order in which the variables were created.
pub fn input_order(problem: &Problem) -> Option<VariableId> {
    problem.unassigned_variables().next()
}
