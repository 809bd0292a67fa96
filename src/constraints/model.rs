use clap::ValueEnum;
use log::info;

use super::cage::post_cage;
use super::binary_ne_grid;
use super::nary_ad_grid;
use crate::basic_types::ModelError;
use crate::engine::variables::VariableId;
use crate::engine::Problem;
use crate::puzzle::Board;

/// How the rows and columns of the grid are constrained to contain distinct values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum GridEncoding {
    /// One all-different constraint per row and per column.
    #[default]
    Nary,
    /// One not-equal constraint per pair of cells sharing a row or a column.
    Binary,
}

impl std::fmt::Display for GridEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridEncoding::Nary => write!(f, "nary"),
            GridEncoding::Binary => write!(f, "binary"),
        }
    }
}

/// The complete model of a board: the grid built with `encoding`, followed by one constraint and
/// one operation variable per cage, in the order in which the cages are declared.
///
/// The returned variables are the row-major grid cells followed by the cage operation variables.
pub fn cagey_csp_model(
    board: &Board,
    encoding: GridEncoding,
) -> Result<(Problem, Vec<VariableId>), ModelError> {
    let (mut problem, mut variables) = match encoding {
        GridEncoding::Nary => nary_ad_grid(board.size)?,
        GridEncoding::Binary => binary_ne_grid(board.size)?,
    };

    let grid = variables.clone();
    for (index, cage) in board.cages.iter().enumerate() {
        let (operation_variable, _) = post_cage(&mut problem, &grid, board.size, index, cage)?;
        variables.push(operation_variable);
    }

    info!(
        "built the model of a {0}x{0} board with {1} cages: {2} variables and {3} constraints",
        board.size,
        board.cages.len(),
        problem.num_variables(),
        problem.num_constraints()
    );

    Ok((problem, variables))
}
