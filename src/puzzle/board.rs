use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use super::parser::parse_board;
use super::BoardParseError;
use crate::constraints::Cage;

/// A Cagey puzzle: an `size` by `size` grid together with its cages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub size: usize,
    pub cages: Vec<Cage>,
}

impl Board {
    pub fn new(size: usize, cages: impl Into<Vec<Cage>>) -> Board {
        Board {
            size,
            cages: cages.into(),
        }
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        parse_board(source)
    }
}

/// Boards are printed in the canonical form `(n, [(t, [(r, c), ...], "op"), ...])`, which parses
/// back into the same board.
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, [", self.size)?;
        for (index, cage) in self.cages.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "({}, [", cage.target)?;
            for (index, cell) in cage.cells.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{cell}")?;
            }
            write!(f, "], \"{}\")", cage.operation)?;
        }
        write!(f, "])")
    }
}

/// Render a solved grid as `size` lines of space-separated values, given the values of the cells
/// in row-major order.
pub fn render_grid(values: &[i32], size: usize) -> String {
    values
        .chunks(size.max(1))
        .map(|row| {
            row.iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::CageOperation;
    use crate::constraints::Cell;
    use crate::constraints::Operation;

    #[test]
    fn board_is_printed_canonically() {
        let board = Board::new(
            2,
            [
                Cage::new(3, [Cell::new(1, 1), Cell::new(1, 2)], Operation::Add),
                Cage::new(1, [Cell::new(2, 1)], CageOperation::Unknown),
            ],
        );

        assert_eq!(
            board.to_string(),
            r#"(2, [(3, [(1, 1), (1, 2)], "+"), (1, [(2, 1)], "?")])"#
        );
    }

    #[test]
    fn grid_is_rendered_by_row() {
        assert_eq!(
            render_grid(&[1, 2, 3, 2, 3, 1, 3, 1, 2], 3),
            "1 2 3\n2 3 1\n3 1 2"
        );
    }
}
