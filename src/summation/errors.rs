use thiserror::Error;

use crate::divisors::DivisorError;
use crate::ranges::RangeError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummationError {
    #[error("Divisor error: {0}")]
    DivisorError(#[from] DivisorError),
    #[error("Range error: {0}")]
    RangeError(#[from] RangeError),
}
