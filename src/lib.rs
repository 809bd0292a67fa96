//! A constraint satisfaction engine for Cagey puzzles: `n` by `n` grids in which every row and
//! column holds the values `1..=n` exactly once, and groups of cells (cages) have to combine to a
//! target value under an arithmetic operation which may itself be unknown.
//!
//! A [`Board`](puzzle::Board) is compiled into a [`Problem`](engine::Problem) of extensional
//! constraints by [`cagey_csp_model`](constraints::cagey_csp_model), after which the
//! [`Solver`](engine::Solver) searches it with one of the [`Propagator`](propagators::Propagator)s
//! and one of the [`VariableOrdering`](branching::VariableOrdering)s.
pub mod asserts;
pub mod basic_types;
pub mod branching;
pub mod constraints;
pub mod engine;
pub mod propagators;
pub mod puzzle;
pub mod results;
pub mod runner;
pub mod statistics;

#[cfg(test)]
mod tests;

pub use constraints::cagey_csp_model;
pub use engine::Problem;
pub use engine::Solver;
pub use engine::SolverOptions;
pub use puzzle::Board;
