//! The constraints of a Cagey puzzle: the row and column constraints of the grid and the cage
//! constraints, all expressed as extensional constraints of a [`Problem`](crate::engine::Problem).

mod cage;
mod grid;
mod model;
mod operation;

pub use cage::operation_satisfies;
pub use cage::Cage;
pub use cage::Cell;
pub use grid::binary_ne_grid;
pub use grid::nary_ad_grid;
pub use model::cagey_csp_model;
pub use model::GridEncoding;
pub use operation::CageOperation;
pub use operation::Operation;
