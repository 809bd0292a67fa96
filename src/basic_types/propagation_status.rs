use crate::engine::constraint::ConstraintId;
use crate::engine::propagation::EmptyDomain;
use crate::engine::propagation::Pruning;
use crate::engine::variables::VariableId;

/// The status of invoking a propagator. Propagation either reaches a state in which no
/// inconsistency was detected, or it identifies a dead end for the current branch of search.
pub type PropagationStatus = Result<(), Inconsistency>;

/// The reason why a branch of search is a dead end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inconsistency {
    /// Pruning removed the last value of the domain of the variable.
    EmptyDomain(VariableId),
    /// The constraint is fully assigned and its tuple is not a satisfying one.
    Violated(ConstraintId),
}

impl From<EmptyDomain> for Inconsistency {
    fn from(empty_domain: EmptyDomain) -> Self {
        Inconsistency::EmptyDomain(empty_domain.variable)
    }
}

/// What a propagator call reports back to the search driver: whether the branch can be continued
/// and every (variable, value) pair which was pruned, in the order in which it was pruned.
///
/// The prunings are reported regardless of the status; the caller is responsible for restoring
/// them when the branch is abandoned.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropagationResult {
    pub status: PropagationStatus,
    pub prunings: Vec<Pruning>,
}

impl PropagationResult {
    pub fn is_consistent(&self) -> bool {
        self.status.is_ok()
    }

    pub fn is_inconsistent(&self) -> bool {
        !self.is_consistent()
    }
}
