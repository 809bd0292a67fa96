use std::fmt::Display;
use std::fmt::Formatter;

use crate::constraints::Operation;

/// A value in the domain of a variable.
///
/// Grid cells range over integers, while the auxiliary variable of every cage ranges over the
/// arithmetic operations. A cage tuple contains both kinds of values, hence the shared type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Int(i32),
    Operation(Operation),
}

impl Value {
    pub fn as_int(self) -> Option<i32> {
        match self {
            Value::Int(value) => Some(value),
            Value::Operation(_) => None,
        }
    }

    pub fn as_operation(self) -> Option<Operation> {
        match self {
            Value::Int(_) => None,
            Value::Operation(operation) => Some(operation),
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<Operation> for Value {
    fn from(operation: Operation) -> Self {
        Value::Operation(operation)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Operation(operation) => write!(f, "{operation}"),
        }
    }
}
