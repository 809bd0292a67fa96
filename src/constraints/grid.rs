use std::rc::Rc;

use log::debug;
use log::warn;

use super::Cell;
use crate::basic_types::ModelError;
use crate::engine::variables::Value;
use crate::engine::variables::VariableId;
use crate::engine::Problem;
use crate::engine::TupleTable;

/// From this size on, every all-different table holds at least 9! = 362880 tuples.
const LARGE_NARY_GRID: usize = 9;

/// A grid without cages in which every pair of cells sharing a row or a column is constrained to be
/// different by a binary constraint.
///
/// Returns the problem together with the cell variables in row-major order.
pub fn binary_ne_grid(size: usize) -> Result<(Problem, Vec<VariableId>), ModelError> {
    let mut problem = Problem::new(format!("{size}-Binary-Grid"));
    let cells = grid_variables(&mut problem, size)?;

    let values = grid_values(size)?;
    let not_equal = Rc::new(TupleTable::new(
        2,
        values.iter().flat_map(|&x| {
            values
                .iter()
                .filter(move |&&y| y != x)
                .map(move |&y| [x, y])
        }),
    ));

    for (kind, lines) in [("Row", rows(size)), ("Col", columns(size))] {
        for (line_index, line) in lines.into_iter().enumerate() {
            for (first, &a) in line.iter().enumerate() {
                for &b in &line[first + 1..] {
                    let a = cells[a];
                    let b = cells[b];
                    let name = format!(
                        "{kind}-{}-({},{})",
                        line_index + 1,
                        problem.variable(a).name(),
                        problem.variable(b).name()
                    );
                    let _ = problem.add_constraint(name, [a, b], Rc::clone(&not_equal));
                }
            }
        }
    }

    debug!(
        "built a binary grid of size {size} with {} constraints",
        problem.num_constraints()
    );

    Ok((problem, cells))
}

/// A grid without cages in which every row and every column is constrained by a single
/// all-different constraint, whose tuples are the permutations of `1..=size`.
///
/// Returns the problem together with the cell variables in row-major order.
pub fn nary_ad_grid(size: usize) -> Result<(Problem, Vec<VariableId>), ModelError> {
    if size >= LARGE_NARY_GRID {
        warn!("The all-different tables of a grid of size {size} contain {size}! tuples each; consider the binary encoding");
    }

    let mut problem = Problem::new(format!("{size}-Nary-Grid"));
    let cells = grid_variables(&mut problem, size)?;

    let all_different = Rc::new(TupleTable::new(size, permutations(&grid_values(size)?)));

    for (kind, lines) in [("Row", rows(size)), ("Col", columns(size))] {
        for (line_index, line) in lines.into_iter().enumerate() {
            let scope = line.into_iter().map(|index| cells[index]).collect::<Vec<_>>();
            let _ = problem.add_constraint(
                format!("{kind}-{}-AllDiff", line_index + 1),
                scope,
                Rc::clone(&all_different),
            );
        }
    }

    debug!(
        "built an n-ary grid of size {size} with {} tuples per line",
        all_different.len()
    );

    Ok((problem, cells))
}

fn grid_values(size: usize) -> Result<Vec<Value>, ModelError> {
    let size = i32::try_from(size).map_err(|_| ModelError::InvalidGridSize)?;
    Ok((1..=size).map(Value::from).collect())
}

/// Add a variable with domain `1..=size` for every cell, in row-major order.
fn grid_variables(problem: &mut Problem, size: usize) -> Result<Vec<VariableId>, ModelError> {
    if size == 0 {
        return Err(ModelError::InvalidGridSize);
    }

    let values = grid_values(size)?;
    (1..=size)
        .flat_map(|row| (1..=size).map(move |col| Cell::new(row, col)))
        .map(|cell| {
            problem.add_variable(format!("Cell({},{})", cell.row, cell.col), values.clone())
        })
        .collect()
}

/// The row-major indices of the cells of every row.
fn rows(size: usize) -> Vec<Vec<usize>> {
    (0..size)
        .map(|row| (0..size).map(|col| row * size + col).collect())
        .collect()
}

/// The row-major indices of the cells of every column.
fn columns(size: usize) -> Vec<Vec<usize>> {
    (0..size)
        .map(|col| (0..size).map(|row| row * size + col).collect())
        .collect()
}

/// All permutations of `values`, in lexicographic order when `values` is sorted.
pub(crate) fn permutations(values: &[Value]) -> Vec<Vec<Value>> {
    let mut current = values.to_vec();
    let mut permutations = vec![current.clone()];

    while next_permutation(&mut current) {
        permutations.push(current.clone());
    }

    permutations
}

/// Rearrange `values` into the next permutation in lexicographic order. Returns `false` when
/// `values` is already the last permutation.
fn next_permutation(values: &mut [Value]) -> bool {
    let Some(pivot) = (1..values.len())
        .rev()
        .find(|&index| values[index - 1] < values[index])
        .map(|index| index - 1)
    else {
        return false;
    };

    let successor = (pivot + 1..values.len())
        .rev()
        .find(|&index| values[index] > values[pivot])
        .unwrap_or(pivot + 1);

    values.swap(pivot, successor);
    values[pivot + 1..].reverse();

    true
}
