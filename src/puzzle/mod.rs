//! The textual board format of Cagey puzzles, e.g.
//!
//! ```text
//! (3, [(3, [(1, 1), (2, 1)], "+"), (1, [(1, 2)], '?'), (6, [(1, 3), (2, 3)], None)])
//! ```
//!
//! A board is the grid size followed by the cages; each cage is its target, its cells as 1-indexed
//! `(row, col)` pairs and its operation. The operation is a quoted symbol out of `+ - * / % ?` or
//! `None` when it is unknown.

mod board;
mod parser;

pub use board::*;
pub use parser::BoardParseError;
