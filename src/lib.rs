//! Idsweep - A library for finding product IDs built from a repeated digit group
//!
//! An ID is invalid when its decimal digits split into two or more identical
//! contiguous groups, e.g. `123123` or `1111111`. Part one only counts IDs made
//! of exactly two groups; part two counts any number of groups. Detection is
//! arithmetic: such an ID is a multiple of a divisor like `1001` or `1010101`.

pub mod divisors;
pub mod ranges;
pub mod summation;

// Re-export the main public API
pub use divisors::{DivisorCache, DivisorError, RuleVariant, divisors};
pub use ranges::{IdRange, RangeError, digit_count, parse_ranges};
pub use summation::{RangeSummer, SummationError, is_invalid};

/// Sum the invalid IDs across every range in a comma-separated `from-to` list
///
/// This is a convenience function that parses the input and runs a fresh
/// [`RangeSummer`] over it.
///
/// # Arguments
///
/// * `input` - Range tokens such as `"11-22,95-115"`
/// * `variant` - The rule deciding which group counts make an ID invalid
///
/// # Errors
///
/// This function will return an error if:
/// * The input holds no ranges
/// * A token is not two unsigned integers joined by a single `-`
/// * A divisor set cannot be built for some digit count
///
/// # Examples
///
/// ```
/// use idsweep::{RuleVariant, sum_invalid_ids};
///
/// assert_eq!(sum_invalid_ids("11-22,95-115", RuleVariant::PartOne), Ok(132));
/// assert_eq!(sum_invalid_ids("11-22,95-115", RuleVariant::PartTwo), Ok(243));
/// ```
pub fn sum_invalid_ids(input: &str, variant: RuleVariant) -> Result<u128, SummationError> {
    let ranges = parse_ranges(input)?;

    let summer = RangeSummer::new();
    summer.sum_all(&ranges, variant)
}
