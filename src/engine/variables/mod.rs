mod domain;
mod value;
mod variable;
mod variable_id;

pub use value::Value;
pub use variable::Variable;
pub use variable_id::VariableId;
