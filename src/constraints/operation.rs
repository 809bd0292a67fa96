use std::fmt::Display;
use std::fmt::Formatter;

use enumset::EnumSet;
use enumset::EnumSetType;

/// An arithmetic operation which combines the values of a cage.
///
/// The declaration order is the order in which operations appear in the domain of every cage
/// operation variable and in the generated tuples.
#[derive(Debug, Hash, PartialOrd, Ord, EnumSetType)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operation {
    pub fn all() -> EnumSet<Operation> {
        EnumSet::all()
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
            Operation::Modulo => '%',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Operation> {
        match symbol {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Subtract),
            '*' => Some(Operation::Multiply),
            '/' => Some(Operation::Divide),
            '%' => Some(Operation::Modulo),
            _ => None,
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The operation of a cage as stated by the puzzle; it may be withheld.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CageOperation {
    Known(Operation),
    Unknown,
}

impl CageOperation {
    /// The operations which a solution may use to reach the target of the cage.
    pub fn candidates(self) -> EnumSet<Operation> {
        match self {
            CageOperation::Known(operation) => EnumSet::only(operation),
            CageOperation::Unknown => Operation::all(),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            CageOperation::Known(operation) => operation.symbol(),
            CageOperation::Unknown => '?',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<CageOperation> {
        if symbol == '?' {
            Some(CageOperation::Unknown)
        } else {
            Operation::from_symbol(symbol).map(CageOperation::Known)
        }
    }
}

impl From<Operation> for CageOperation {
    fn from(operation: Operation) -> Self {
        CageOperation::Known(operation)
    }
}

impl Display for CageOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
