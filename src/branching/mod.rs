//! Contains the heuristics which decide the next variable to branch on.
//!
//! A heuristic is a pure function of the [`Problem`]: it only looks at the unassigned variables
//! and returns [`None`] once every variable is assigned.

mod variable_selection;

use clap::ValueEnum;
pub use variable_selection::*;

use crate::engine::variables::VariableId;
use crate::engine::Problem;

/// The closed set of variable ordering heuristics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum VariableOrdering {
    /// The variable with the fewest values left.
    #[default]
    #[value(name = "mrv")]
    MinimumRemainingValues,
    /// The variable which constrains the most other unassigned variables.
    #[value(name = "degree")]
    Degree,
    /// The first unassigned variable in creation order.
    #[value(name = "input-order")]
    InputOrder,
}

impl VariableOrdering {
    pub fn select(self, problem: &Problem) -> Option<VariableId> {
        match self {
            VariableOrdering::MinimumRemainingValues => minimum_remaining_values(problem),
            VariableOrdering::Degree => degree(problem),
            VariableOrdering::InputOrder => input_order(problem),
        }
    }
}

impl std::fmt::Display for VariableOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableOrdering::MinimumRemainingValues => write!(f, "mrv"),
            VariableOrdering::Degree => write!(f, "degree"),
            VariableOrdering::InputOrder => write!(f, "input-order"),
        }
    }
}
