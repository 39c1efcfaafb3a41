//! Repeated-group divisors and their memoization cache

mod cache;
mod errors;
mod generator;
mod rule;

pub use cache::DivisorCache;
pub use errors::DivisorError;
pub use generator::divisors;
pub use rule::RuleVariant;
