mod message_set;
mod params;
mod value;

pub use message_set::MessageSet;
pub use params::{Params, ParamsIter};
pub use value::Value;
