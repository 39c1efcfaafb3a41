use log::debug;

use crate::divisors::errors::DivisorError;
use crate::divisors::rule::RuleVariant;

/// Divisors that expose a repeated-group structure in IDs of `digit_count` digits.
///
/// An ID made of `num_groups` copies of a `group_size`-digit block is the
/// block times `1 + 10^group_size + 10^(2 * group_size) + ...`, so it is
/// invalid exactly when one of these values divides it. Examples:
/// `123123 = 123 * 1001`, `156156156 = 156 * 1001001`.
///
/// The result is ordered by increasing group count.
///
/// # Errors
///
/// Returns an error if `digit_count` is zero or a divisor would not fit in a
/// `u64` (impossible for digit counts of 20 or fewer).
pub fn divisors(digit_count: u32, variant: RuleVariant) -> Result<Vec<u64>, DivisorError> {
    if digit_count == 0 {
        return Err(DivisorError::ZeroDigitCount);
    }

    let mut result = Vec::new();
    for num_groups in variant.group_counts(digit_count) {
        if digit_count % num_groups != 0 {
            continue;
        }
        let group_size = digit_count / num_groups;
        result.push(repeated_group_divisor(num_groups, group_size)?);
    }

    debug!(
        "Divisors for {} digit(s), {}: {:?}",
        digit_count, variant, result
    );
    Ok(result)
}

/// Sum of `10^(group_size * g)` for `g` in `0..num_groups`.
fn repeated_group_divisor(num_groups: u32, group_size: u32) -> Result<u64, DivisorError> {
    let overflow = DivisorError::Overflow {
        num_groups,
        group_size,
    };
    let step = 10_u64.checked_pow(group_size).ok_or_else(|| overflow.clone())?;

    let mut divisor: u64 = 0;
    let mut place: u64 = 1;
    for group in 0..num_groups {
        divisor = divisor.checked_add(place).ok_or_else(|| overflow.clone())?;
        if group + 1 < num_groups {
            place = place.checked_mul(step).ok_or_else(|| overflow.clone())?;
        }
    }
    Ok(divisor)
}
