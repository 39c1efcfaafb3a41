/// Number of decimal digits in `n`, counting zero as a single digit.
///
/// Integer logarithm keeps this exact at powers of ten, where a float
/// `log10` can land on the wrong side of the boundary.
#[inline]
pub fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}
