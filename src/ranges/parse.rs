use log::{debug, warn};

use crate::ranges::errors::RangeError;
use crate::ranges::range::IdRange;

/// Parse a comma-separated list of `from-to` tokens.
///
/// Whitespace around the whole input and around each token is ignored.
///
/// # Errors
///
/// Fails on the first token that is not two unsigned integers joined by a
/// single `-`, or when the input holds no tokens at all.
pub fn parse_ranges(input: &str) -> Result<Vec<IdRange>, RangeError> {
    let input = input.trim();
    if input.is_empty() {
        warn!("Input is empty");
        return Err(RangeError::EmptyInput);
    }

    let ranges = input
        .split(',')
        .map(|token| {
            token.parse::<IdRange>().inspect_err(|err| {
                warn!("Rejecting range token '{}': {}", token.trim(), err);
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed {} range(s)", ranges.len());
    Ok(ranges)
}
