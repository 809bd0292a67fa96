use std::rc::Rc;

use crate::basic_types::KeyedVec;
use crate::basic_types::StorageKey;
use crate::cagey_assert_eq_simple;
use crate::engine::tuple_table::TupleTable;
use crate::engine::variables::Value;
use crate::engine::variables::Variable;
use crate::engine::variables::VariableId;

/// Identifies a [`Constraint`] within the [`Problem`](crate::engine::Problem) it was added to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintId {
    pub id: u32,
}

impl StorageKey for ConstraintId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConstraintId {
            id: u32::try_from(index).expect("the number of constraints should fit in a u32"),
        }
    }
}

impl std::fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.id)
    }
}

/// An extensional constraint: an ordered scope together with the tuples which satisfy it. The
/// `i`-th value of every tuple is a value for the `i`-th variable of the scope.
#[derive(Clone, Debug)]
pub struct Constraint {
    name: String,
    scope: Box<[VariableId]>,
    tuples: Rc<TupleTable>,
}

impl Constraint {
    pub(crate) fn new(name: String, scope: Box<[VariableId]>, tuples: Rc<TupleTable>) -> Self {
        cagey_assert_eq_simple!(
            scope.len(),
            tuples.arity(),
            "the tuples of constraint {name} do not match the length of its scope"
        );

        Constraint {
            name,
            scope,
            tuples,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    pub fn tuples(&self) -> &TupleTable {
        &self.tuples
    }

    /// The position of `variable` in the scope, if it is part of it.
    pub fn position_of(&self, variable: VariableId) -> Option<usize> {
        self.scope.iter().position(|&other| other == variable)
    }

    /// Whether the given full tuple satisfies the constraint.
    pub fn check_tuple(&self, values: &[Value]) -> bool {
        self.tuples.contains(values)
    }

    /// Whether `value` for the variable at `position` is supported: some satisfying tuple has
    /// `value` at `position` while every other value of that tuple lies in the current domain of
    /// the corresponding variable.
    pub(crate) fn has_support(
        &self,
        variables: &KeyedVec<VariableId, Variable>,
        position: usize,
        value: Value,
    ) -> bool {
        self.tuples.tuples_with(position, value).any(|tuple| {
            self.scope
                .iter()
                .zip(tuple)
                .enumerate()
                .all(|(other_position, (&variable, &other_value))| {
                    other_position == position || variables[variable].contains(other_value)
                })
        })
    }

    pub(crate) fn unassigned_variables<'a>(
        &'a self,
        variables: &'a KeyedVec<VariableId, Variable>,
    ) -> impl Iterator<Item = VariableId> + 'a {
        self.scope
            .iter()
            .copied()
            .filter(|&variable| !variables[variable].is_assigned())
    }

    /// The values of the scope under the current assignment, or [`None`] when some variable in the
    /// scope is unassigned.
    pub(crate) fn assigned_tuple(
        &self,
        variables: &KeyedVec<VariableId, Variable>,
    ) -> Option<Vec<Value>> {
        self.scope
            .iter()
            .map(|&variable| variables[variable].assigned_value())
            .collect()
    }
}
