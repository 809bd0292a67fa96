use std::fmt::Display;
use std::fmt::Formatter;
use std::rc::Rc;

use log::debug;

use super::CageOperation;
use super::Operation;
use crate::basic_types::HashMap;
use crate::basic_types::HashSet;
use crate::basic_types::ModelError;
use crate::cagey_assert_simple;
use crate::engine::variables::Value;
use crate::engine::variables::VariableId;
use crate::engine::ConstraintId;
use crate::engine::Problem;
use crate::engine::TupleTable;

/// A grid cell, addressed by its 1-indexed row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// The position of the cell in the row-major list of grid variables, if the cell lies within a
    /// grid of the given size.
    pub fn index(self, size: usize) -> Option<usize> {
        if (1..=size).contains(&self.row) && (1..=size).contains(&self.col) {
            Some((self.row - 1) * size + (self.col - 1))
        } else {
            None
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A group of cells whose values combine to `target` under the operation of the cage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cage {
    pub target: i32,
    pub cells: Vec<Cell>,
    pub operation: CageOperation,
}

impl Cage {
    pub fn new(
        target: i32,
        cells: impl Into<Vec<Cell>>,
        operation: impl Into<CageOperation>,
    ) -> Cage {
        Cage {
            target,
            cells: cells.into(),
            operation: operation.into(),
        }
    }
}

/// Whether some ordering of `values` combines to `target` under `operation`.
///
/// A single value satisfies every operation exactly when it equals the target. For more values:
/// - addition and multiplication hold when the sum or product equals the target;
/// - subtraction holds when, for some choice of the first value, the first value minus the sum of
///   the others equals the target;
/// - division holds when, for some choice of the first value, the first value divided by the
///   product of the others is exactly the target;
/// - modulo holds when, for some choice of the first value as the modulus, the sum of the others
///   modulo it equals the target.
///
/// A zero divisor or modulus rules out the ordering. Arithmetic which overflows can never equal
/// the target.
pub fn operation_satisfies(values: &[i32], operation: Operation, target: i32) -> bool {
    cagey_assert_simple!(
        !values.is_empty(),
        "an operation has to be applied to at least one value"
    );

    if let [value] = values {
        return *value == target;
    }

    let target = i64::from(target);
    let sum = values.iter().map(|&value| i64::from(value)).sum::<i64>();

    match operation {
        Operation::Add => sum == target,
        Operation::Multiply => product(values, None) == Some(target),
        Operation::Subtract => values
            .iter()
            .map(|&first| i64::from(first))
            .any(|first| first - (sum - first) == target),
        Operation::Divide => (0..values.len()).any(|first| {
            match product(values, Some(first)) {
                Some(0) | None => false,
                Some(divisor) => target
                    .checked_mul(divisor)
                    .is_some_and(|quotient| quotient == i64::from(values[first])),
            }
        }),
        Operation::Modulo => values.iter().map(|&first| i64::from(first)).any(|modulus| {
            modulus != 0 && (sum - modulus).rem_euclid(modulus) == target
        }),
    }
}

/// The product of `values`, leaving out the value at position `skip`.
fn product(values: &[i32], skip: Option<usize>) -> Option<i64> {
    values
        .iter()
        .enumerate()
        .filter(|&(index, _)| Some(index) != skip)
        .try_fold(1_i64, |product, (_, &value)| {
            product.checked_mul(i64::from(value))
        })
}

/// Caches [`operation_satisfies`] per multiset of values and operation. The predicate does not
/// depend on the order of the values, so every permutation of a value tuple shares one entry.
#[derive(Debug)]
struct PredicateCache {
    target: i32,
    results: HashMap<(Box<[i32]>, Operation), bool>,
}

impl PredicateCache {
    fn new(target: i32) -> Self {
        PredicateCache {
            target,
            results: HashMap::default(),
        }
    }

    fn satisfies(&mut self, values: &[i32], operation: Operation) -> bool {
        let mut multiset: Box<[i32]> = values.into();
        multiset.sort_unstable();

        let target = self.target;
        *self
            .results
            .entry((multiset, operation))
            .or_insert_with(|| operation_satisfies(values, operation, target))
    }
}

/// Call `visit` for every combination of one value per domain, in lexicographic order with the
/// first domain varying slowest.
fn for_each_combination(domains: &[Vec<i32>], mut visit: impl FnMut(&[i32])) {
    if domains.iter().any(Vec::is_empty) {
        return;
    }

    let mut positions = vec![0; domains.len()];
    let mut combination = domains.iter().map(|domain| domain[0]).collect::<Vec<_>>();

    loop {
        visit(&combination);

        let mut index = domains.len();
        loop {
            if index == 0 {
                return;
            }
            index -= 1;

            positions[index] += 1;
            if positions[index] < domains[index].len() {
                combination[index] = domains[index][positions[index]];
                break;
            }

            positions[index] = 0;
            combination[index] = domains[index][0];
        }
    }
}

/// Compile `cage` into the problem: an auxiliary variable ranging over all operations and one
/// constraint over the cells of the cage followed by that variable. The satisfying tuples are the
/// combinations of the current cell domains, each followed by a candidate operation under which
/// the combination reaches the target.
///
/// `grid` holds the row-major cell variables of a grid with `size` rows; `cage_index` is only
/// used for error reporting.
pub(crate) fn post_cage(
    problem: &mut Problem,
    grid: &[VariableId],
    size: usize,
    cage_index: usize,
    cage: &Cage,
) -> Result<(VariableId, ConstraintId), ModelError> {
    if cage.cells.is_empty() {
        return Err(ModelError::EmptyCage { cage: cage_index });
    }

    let mut seen = HashSet::<Cell>::default();
    let mut cell_variables = Vec::with_capacity(cage.cells.len() + 1);
    for &cell in &cage.cells {
        let index = cell.index(size).ok_or(ModelError::CellOutOfRange {
            cage: cage_index,
            cell,
            size,
        })?;
        if !seen.insert(cell) {
            return Err(ModelError::DuplicateCell {
                cage: cage_index,
                cell,
            });
        }
        cell_variables.push(grid[index]);
    }

    let domains = cell_variables
        .iter()
        .map(|&variable| {
            problem
                .variable(variable)
                .current_domain()
                .filter_map(Value::as_int)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let candidates = cage.operation.candidates();
    let mut cache = PredicateCache::new(cage.target);
    let mut tuples = Vec::new();
    for_each_combination(&domains, |values| {
        for operation in candidates {
            if cache.satisfies(values, operation) {
                tuples.push(
                    values
                        .iter()
                        .copied()
                        .map(Value::from)
                        .chain(std::iter::once(Value::from(operation)))
                        .collect::<Box<[Value]>>(),
                );
            }
        }
    });

    let name = operation_variable_name(problem, cage, &cell_variables);
    let operation_variable = problem.add_auxiliary_variable(name, Operation::all());
    cell_variables.push(operation_variable);

    debug!(
        "cage {cage_index} with target {} and operation {} has {} satisfying tuples",
        cage.target,
        cage.operation,
        tuples.len()
    );

    let constraint = problem.add_constraint(
        constraint_name(cage),
        cell_variables,
        Rc::new(TupleTable::new(cage.cells.len() + 1, tuples)),
    );

    Ok((operation_variable, constraint))
}

/// E.g. `Cage_op(3:+:[Var-Cell(1,1), Var-Cell(2,1)])`.
fn operation_variable_name(problem: &Problem, cage: &Cage, cells: &[VariableId]) -> String {
    let cells = cells
        .iter()
        .map(|&variable| problem.variable(variable).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Cage_op({}:{}:[{cells}])", cage.target, cage.operation)
}

/// E.g. `Cage_3_[(1, 1), (2, 1)]`.
fn constraint_name(cage: &Cage) -> String {
    let cells = cage
        .cells
        .iter()
        .map(Cell::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Cage_{}_[{cells}]", cage.target)
}
