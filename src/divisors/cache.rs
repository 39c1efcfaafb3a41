use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use crate::divisors::generator::divisors;
use crate::divisors::errors::DivisorError;
use crate::divisors::rule::RuleVariant;

type CacheKey = (u32, RuleVariant);

/// Lazily filled table of divisor sets keyed by digit count and rule variant.
///
/// Entries are shared as `Arc<[u64]>`, so callers get a read-only view and
/// concurrent lookups never copy the sets.
#[derive(Debug, Default)]
pub struct DivisorCache {
    entries: RwLock<HashMap<CacheKey, Arc<[u64]>>>,
}

impl DivisorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the divisor set for `(digit_count, variant)`, computing it on first use.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`divisors`]; failed lookups are not cached.
    pub fn get(
        &self,
        digit_count: u32,
        variant: RuleVariant,
    ) -> Result<Arc<[u64]>, DivisorError> {
        let key = (digit_count, variant);

        // A poisoned lock still holds a consistent map: entries are only
        // ever inserted whole.
        if let Some(found) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(Arc::clone(found));
        }

        let computed: Arc<[u64]> = divisors(digit_count, variant)?.into();
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let entry = entries.entry(key).or_insert_with(|| {
            debug!("Caching divisors for {} digit(s), {}", digit_count, variant);
            computed
        });
        Ok(Arc::clone(entry))
    }

    /// Number of cached `(digit_count, variant)` entries.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
