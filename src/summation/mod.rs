mod errors;
mod summer;

pub use errors::SummationError;
pub use summer::{RangeSummer, is_invalid};
