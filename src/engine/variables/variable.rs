use std::fmt::Display;
use std::fmt::Formatter;

use super::domain::Domain;
use super::Value;
use crate::cagey_assert_simple;

/// A named finite-domain variable.
///
/// The current domain is always a subset of the initial domain. A variable is assigned when the
/// search driver has explicitly marked it so; at that point its current domain holds exactly one
/// value.
#[derive(Clone, Debug)]
pub struct Variable {
    name: String,
    domain: Domain,
    is_assigned: bool,
}

impl Variable {
    pub(crate) fn new(name: String, values: impl IntoIterator<Item = Value>) -> Variable {
        Variable {
            name,
            domain: Domain::new(values),
            is_assigned: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The values the variable was created with.
    pub fn initial_domain(&self) -> &[Value] {
        self.domain.initial_values()
    }

    /// The values which have not been pruned, in the order of the initial domain.
    pub fn current_domain(&self) -> impl Iterator<Item = Value> + '_ {
        self.domain.iter()
    }

    pub fn domain_size(&self) -> usize {
        self.domain.size()
    }

    pub fn contains(&self, value: Value) -> bool {
        self.domain.contains(value)
    }

    pub fn is_assigned(&self) -> bool {
        self.is_assigned
    }

    /// The value of the variable, if it has been assigned.
    pub fn assigned_value(&self) -> Option<Value> {
        if self.is_assigned {
            self.domain.iter().next()
        } else {
            None
        }
    }

    /// Remove `value` from the current domain.
    ///
    /// Pruning a value which is not in the current domain is a programming error.
    pub(crate) fn prune(&mut self, value: Value) {
        let was_present = self.domain.remove(value);
        cagey_assert_simple!(
            was_present,
            "pruned {value} from {} while it is not in its current domain",
            self.name
        );
    }

    /// Put a previously pruned `value` back into the current domain.
    ///
    /// Restoring a value which was never pruned (or is restored twice) is a programming error.
    pub(crate) fn restore(&mut self, value: Value) {
        let was_absent = self.domain.insert(value);
        cagey_assert_simple!(
            was_absent,
            "restored {value} to {} while it was not pruned",
            self.name
        );
    }

    pub(crate) fn set_assigned(&mut self, is_assigned: bool) {
        cagey_assert_simple!(
            !is_assigned || self.domain.size() == 1,
            "{} can only be marked assigned when its domain is a singleton",
            self.name
        );
        self.is_assigned = is_assigned;
    }
}

/// Variables display the way the puzzle corpus refers to them, e.g. `Var-Cell(1,1)`.
impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Var-{}", self.name)
    }
}
