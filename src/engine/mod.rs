pub(crate) mod constraint;
pub(crate) mod problem;
pub(crate) mod propagation;
pub(crate) mod solver;
pub mod termination;
pub(crate) mod tuple_table;
pub(crate) mod test_helper;
pub mod variables;

mod variable_names;

pub use constraint::Constraint;
pub use constraint::ConstraintId;
pub use problem::Problem;
pub use propagation::EmptyDomain;
pub use propagation::Pruning;
pub use solver::Solver;
pub use solver::SolverOptions;
pub use tuple_table::TupleTable;
pub(crate) use variable_names::VariableNames;
