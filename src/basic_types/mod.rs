mod hash_structures;
mod keyed_vec;
mod model_error;
mod propagation_status;
mod trail;

pub use hash_structures::*;
pub use keyed_vec::KeyedVec;
pub use keyed_vec::StorageKey;
pub use model_error::ModelError;
pub use propagation_status::*;
pub(crate) use trail::Trail;
