//! Contains the propagation strategies which are run after every decision of the search.
//!
//! Every strategy receives the [`Problem`] and the most recently assigned variable (or [`None`]
//! before the first decision), prunes the values it can rule out and reports the outcome together
//! with the prunings in the order in which they were made. Prunings are reported even when the
//! branch turns out to be a dead end.

mod backtracking;
mod forward_checking;
mod generalised_arc_consistency;

use clap::ValueEnum;

use crate::basic_types::PropagationResult;
use crate::engine::variables::VariableId;
use crate::engine::Problem;

/// The closed set of propagation strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Propagator {
    /// Only check the constraints which are fully assigned; never prunes.
    #[value(name = "bt")]
    Backtracking,
    /// Prune the last unassigned variable of every constraint on the assigned variable.
    #[value(name = "fc")]
    ForwardChecking,
    /// Enforce generalised arc consistency on every constraint reachable from the assigned
    /// variable.
    #[default]
    #[value(name = "gac")]
    Gac,
}

impl Propagator {
    pub fn name(self) -> &'static str {
        match self {
            Propagator::Backtracking => "bt",
            Propagator::ForwardChecking => "fc",
            Propagator::Gac => "gac",
        }
    }

    pub fn propagate(self, problem: &mut Problem, assigned: Option<VariableId>) -> PropagationResult {
        let mut context = problem.propagation_context();

        let status = match self {
            Propagator::Backtracking => backtracking::propagate(&context, assigned),
            Propagator::ForwardChecking => forward_checking::propagate(&mut context, assigned),
            Propagator::Gac => generalised_arc_consistency::propagate(&mut context, assigned),
        };

        context.finish(status)
    }
}

impl std::fmt::Display for Propagator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Check the fully assigned constraints on `assigned`.
pub fn propagate_bt(problem: &mut Problem, assigned: Option<VariableId>) -> PropagationResult {
    Propagator::Backtracking.propagate(problem, assigned)
}

/// Forward check the constraints on `assigned` which have exactly one unassigned variable left.
pub fn propagate_fc(problem: &mut Problem, assigned: Option<VariableId>) -> PropagationResult {
    Propagator::ForwardChecking.propagate(problem, assigned)
}

/// Make the constraints on `assigned`, or all constraints when `assigned` is [`None`], generalised
/// arc consistent together with every constraint affected by the resulting prunings.
pub fn propagate_gac(problem: &mut Problem, assigned: Option<VariableId>) -> PropagationResult {
    Propagator::Gac.propagate(problem, assigned)
}
