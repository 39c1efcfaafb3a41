use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DivisorError {
    #[error("Digit count must be at least 1")]
    ZeroDigitCount,
    #[error("Divisor for {num_groups} groups of {group_size} digit(s) does not fit in 64 bits")]
    Overflow { num_groups: u32, group_size: u32 },
}
