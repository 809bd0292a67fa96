mod degree;
mod input_order;
mod minimum_remaining_values;

pub use degree::degree;
pub use input_order::input_order;
pub use minimum_remaining_values::minimum_remaining_values;
