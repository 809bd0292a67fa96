#![cfg(any(test, doc))]
//! This module exposes helpers that aid testing of propagators. The [`TestProblem`] allows setting
//! up small problems over integer variables under which to test the propagation strategies.
use std::rc::Rc;

use super::ConstraintId;
use super::Problem;
use super::TupleTable;
use crate::engine::variables::Value;
use crate::engine::variables::VariableId;

/// A container for a problem over integer variables, which can be used to test propagators.
#[derive(Default, Debug)]
pub(crate) struct TestProblem {
    pub(crate) problem: Problem,
}

impl TestProblem {
    /// Create a variable with domain `lb..=ub`.
    pub(crate) fn new_variable(&mut self, lb: i32, ub: i32) -> VariableId {
        self.new_sparse_variable(&(lb..=ub).collect::<Vec<_>>())
    }

    pub(crate) fn new_sparse_variable(&mut self, values: &[i32]) -> VariableId {
        assert!(
            !values.is_empty(),
            "cannot create a variable with an empty domain"
        );

        let name = format!("x{}", self.problem.num_variables());
        self.problem
            .add_variable(name, values.iter().copied())
            .expect("test variables have unique names")
    }

    /// Add a constraint over `scope` satisfied by exactly `tuples`.
    pub(crate) fn new_constraint(&mut self, scope: &[VariableId], tuples: &[&[i32]]) -> ConstraintId {
        let tuples = tuples
            .iter()
            .map(|tuple| tuple.iter().copied().map(Value::from).collect::<Vec<_>>());
        let name = format!("c{}", self.problem.num_constraints());

        self.problem.add_constraint(
            name,
            scope.to_vec(),
            Rc::new(TupleTable::new(scope.len(), tuples)),
        )
    }

    pub(crate) fn assign(&mut self, variable: VariableId, value: i32) {
        let _ = self.problem.assign(variable, Value::from(value));
    }

    pub(crate) fn contains(&self, variable: VariableId, value: i32) -> bool {
        self.problem.variable(variable).contains(Value::from(value))
    }

    /// Assert that the current domain of `variable` is exactly `domain`, in that order.
    pub(crate) fn assert_domain(&self, variable: VariableId, domain: &[i32]) {
        let actual = self
            .problem
            .variable(variable)
            .current_domain()
            .map(|value| value.as_int().expect("test variables are integers"))
            .collect::<Vec<_>>();

        assert_eq!(
            actual, domain,
            "the domain of {} differs from the provided domain",
            self.problem.variable(variable)
        );
    }
}
