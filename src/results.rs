//! The outcomes of a search.

use crate::engine::variables::Value;
use crate::engine::variables::VariableId;
use crate::engine::Problem;

/// A full assignment which satisfies every constraint of the problem it was found for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    values: Box<[Value]>,
}

impl Solution {
    /// Record the assigned values of `problem`, which has to be fully assigned.
    pub(crate) fn from_assignment(problem: &Problem) -> Option<Solution> {
        problem
            .variables()
            .map(|variable| problem.variable(variable).assigned_value())
            .collect::<Option<Box<[Value]>>>()
            .map(|values| Solution { values })
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    pub fn get_value(&self, variable: VariableId) -> Value {
        self.values[variable.id as usize]
    }

    /// The value of an integer variable; [`None`] if the variable ranges over operations.
    pub fn get_integer_value(&self, variable: VariableId) -> Option<i32> {
        self.get_value(variable).as_int()
    }
}

/// The result of [`Solver::satisfy`](crate::engine::Solver::satisfy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// A solution was found.
    Satisfiable(Solution),
    /// There is no solution.
    Unsatisfiable,
    /// It is not known whether a solution exists, because the termination condition triggered.
    Unknown,
}

/// The result of [`Solver::enumerate`](crate::engine::Solver::enumerate). The solutions
/// themselves are handed to the callback as they are found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumerationResult {
    /// Every solution was found.
    Complete { num_solutions: usize },
    /// The search stopped after finding the requested number of solutions; there may be more.
    LimitReached { num_solutions: usize },
    /// The termination condition triggered before the search space was exhausted.
    Unknown { num_solutions: usize },
}

impl EnumerationResult {
    pub fn num_solutions(self) -> usize {
        match self {
            EnumerationResult::Complete { num_solutions }
            | EnumerationResult::LimitReached { num_solutions }
            | EnumerationResult::Unknown { num_solutions } => num_solutions,
        }
    }
}
