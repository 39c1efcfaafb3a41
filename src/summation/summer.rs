use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;

use crate::divisors::{DivisorCache, RuleVariant};
use crate::ranges::IdRange;
use crate::summation::errors::SummationError;

/// Whether `pid` is a multiple of any of the given repeated-group divisors.
///
/// Stops at the first match, so an ID with several group structures is
/// still reported once.
#[inline]
pub fn is_invalid(pid: u64, divisors: &[u64]) -> bool {
    divisors.iter().any(|&divisor| pid % divisor == 0)
}

/// Sums invalid product IDs over ranges, sharing one divisor cache
pub struct RangeSummer {
    cache: Arc<DivisorCache>,
}

impl RangeSummer {
    pub fn new() -> Self {
        Self::with_cache(Arc::new(DivisorCache::new()))
    }

    /// Build a summer on top of an existing cache, e.g. one shared by several summers.
    pub fn with_cache(cache: Arc<DivisorCache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &DivisorCache {
        &self.cache
    }

    /// Sum of the invalid IDs in `range`, both ends included.
    ///
    /// # Errors
    ///
    /// Returns an error if a divisor set cannot be built for one of the
    /// digit counts in the range.
    pub fn sum_invalids(
        &self,
        range: &IdRange,
        variant: RuleVariant,
    ) -> Result<u128, SummationError> {
        debug!("Summing {} for {}", range, variant);

        // Each segment has a single digit count, so its divisors are fetched once.
        range
            .split_by_digit_count()
            .into_par_iter()
            .map(|(digit_count, segment)| self.sum_segment(digit_count, &segment, variant))
            .try_reduce(|| 0, |left, right| Ok(left + right))
    }

    /// Sum of [`RangeSummer::sum_invalids`] over every range.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any range.
    pub fn sum_all(
        &self,
        ranges: &[IdRange],
        variant: RuleVariant,
    ) -> Result<u128, SummationError> {
        info!("Summing {} range(s) for {}", ranges.len(), variant);

        let total = ranges
            .par_iter()
            .map(|range| self.sum_invalids(range, variant))
            .try_reduce(|| 0, |left, right| Ok(left + right))?;

        info!("{} total: {}", variant, total);
        Ok(total)
    }

    fn sum_segment(
        &self,
        digit_count: u32,
        segment: &IdRange,
        variant: RuleVariant,
    ) -> Result<u128, SummationError> {
        let divisors = self.cache.get(digit_count, variant)?;
        if divisors.is_empty() {
            return Ok(0);
        }

        let total = (segment.start()..=segment.end())
            .into_par_iter()
            .filter(|&pid| is_invalid(pid, &divisors))
            .map(u128::from)
            .sum();
        Ok(total)
    }
}

impl Default for RangeSummer {
    fn default() -> Self {
        Self::new()
    }
}
