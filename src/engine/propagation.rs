use log::trace;

use crate::basic_types::KeyedVec;
use crate::basic_types::PropagationResult;
use crate::basic_types::PropagationStatus;
use crate::engine::constraint::Constraint;
use crate::engine::constraint::ConstraintId;
use crate::engine::variables::Value;
use crate::engine::variables::Variable;
use crate::engine::variables::VariableId;

/// The removal of `value` from the current domain of `variable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pruning {
    pub variable: VariableId,
    pub value: Value,
}

impl Pruning {
    pub fn new(variable: VariableId, value: impl Into<Value>) -> Pruning {
        Pruning {
            variable,
            value: value.into(),
        }
    }
}

/// Indicates that a pruning left the domain of `variable` empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDomain {
    pub variable: VariableId,
}

/// The view of a [`Problem`](crate::engine::Problem) handed to a propagator. Constraints can be
/// read while domains are pruned, and every pruning is recorded in the order in which it happens.
#[derive(Debug)]
pub(crate) struct PropagationContext<'a> {
    variables: &'a mut KeyedVec<VariableId, Variable>,
    constraints: &'a KeyedVec<ConstraintId, Constraint>,
    constraints_by_variable: &'a KeyedVec<VariableId, Vec<ConstraintId>>,
    prunings: Vec<Pruning>,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(
        variables: &'a mut KeyedVec<VariableId, Variable>,
        constraints: &'a KeyedVec<ConstraintId, Constraint>,
        constraints_by_variable: &'a KeyedVec<VariableId, Vec<ConstraintId>>,
    ) -> Self {
        PropagationContext {
            variables,
            constraints,
            constraints_by_variable,
            prunings: Vec::new(),
        }
    }

    pub(crate) fn variables(&self) -> &KeyedVec<VariableId, Variable> {
        self.variables
    }

    pub(crate) fn variable(&self, variable: VariableId) -> &Variable {
        &self.variables[variable]
    }

    pub(crate) fn constraint(&self, constraint: ConstraintId) -> &'a Constraint {
        &self.constraints[constraint]
    }

    pub(crate) fn constraint_ids(&self) -> impl Iterator<Item = ConstraintId> {
        self.constraints.keys()
    }

    pub(crate) fn constraints_with(&self, variable: VariableId) -> &'a [ConstraintId] {
        &self.constraints_by_variable[variable]
    }

    pub(crate) fn has_support(&self, constraint: ConstraintId, position: usize, value: Value) -> bool {
        self.constraints[constraint].has_support(self.variables, position, value)
    }

    /// Remove `value` from the domain of `variable` and record the pruning. Fails when the domain
    /// becomes empty; the pruning is recorded either way.
    pub(crate) fn remove(&mut self, variable: VariableId, value: Value) -> Result<(), EmptyDomain> {
        self.variables[variable].prune(value);
        self.prunings.push(Pruning { variable, value });

        trace!("pruned {value} from {}", self.variables[variable].name());

        if self.variables[variable].domain_size() == 0 {
            Err(EmptyDomain { variable })
        } else {
            Ok(())
        }
    }

    pub(crate) fn finish(self, status: PropagationStatus) -> PropagationResult {
        PropagationResult {
            status,
            prunings: self.prunings,
        }
    }
}
