//! Inclusive ID ranges and the parser for the comma-separated input line

mod digits;
mod errors;
mod parse;
mod range;

pub use digits::digit_count;
pub use errors::RangeError;
pub use parse::parse_ranges;
pub use range::IdRange;

#[cfg(test)]
mod tests;
