//! Memoization of oracle results
//!
//! The oracle is pure, so a height measured once for (markup, width, font)
//! holds for every later conversion. Failures are never cached.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::error::MeasureError;
use crate::hash::StableHasher;

use super::{FontSpec, Measure};

/// Entries kept by [`MeasureCache::new`]
pub const DEFAULT_CAPACITY: usize = 16_384;

/// Thread-safe cache of measured heights
///
/// Holds at most `capacity` entries. Inserting into a full cache drops
/// every entry first; heights never depend on what is cached.
#[derive(Debug)]
pub struct MeasureCache {
    entries: Mutex<FxHashMap<u64, f32>>,
    capacity: usize,
}

impl Default for MeasureCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl MeasureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache bounded to `capacity` entries (0 disables caching)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(FxHashMap::default()),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of cached measurements
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drop every cached measurement
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Measure through the cache, consulting `oracle` on a miss
    pub fn measure<M: Measure + ?Sized>(
        &self,
        oracle: &M,
        markup: &str,
        width: f32,
        font: &FontSpec,
    ) -> Result<f32, MeasureError> {
        let key = Self::key(markup, width, font);
        if let Some(&height) = self.entries.lock().get(&key) {
            return Ok(height);
        }

        // The lock is not held across the oracle call
        let height = oracle.measure_height(markup, width, font)?;
        if self.capacity > 0 {
            let mut entries = self.entries.lock();
            if entries.len() >= self.capacity {
                entries.clear();
            }
            entries.insert(key, height);
        }
        Ok(height)
    }

    fn key(markup: &str, width: f32, font: &FontSpec) -> u64 {
        StableHasher::new()
            .update_str(markup)
            .update_f32(width)
            .update_f32(font.size)
            .update_f32(font.line_height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const FONT: FontSpec = FontSpec::new(10.0, 2.0);

    #[test]
    fn test_hits_skip_the_oracle() {
        let calls = Cell::new(0);
        let oracle = |_: &str, w: f32, _: &FontSpec| {
            calls.set(calls.get() + 1);
            Ok::<_, MeasureError>(w / 10.0)
        };
        let cache = MeasureCache::new();

        assert_eq!(cache.measure(&oracle, "<p>a</p>", 100.0, &FONT), Ok(10.0));
        assert_eq!(cache.measure(&oracle, "<p>a</p>", 100.0, &FONT), Ok(10.0));
        assert_eq!(calls.get(), 1);

        // Different width is a different key
        assert_eq!(cache.measure(&oracle, "<p>a</p>", 200.0, &FONT), Ok(20.0));
        assert_eq!(calls.get(), 2);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_capacity_bounds_entries() {
        let oracle = |m: &str, _: f32, _: &FontSpec| Ok::<_, MeasureError>(m.len() as f32);
        let cache = MeasureCache::with_capacity(2);

        assert_eq!(cache.measure(&oracle, "a", 1.0, &FONT), Ok(1.0));
        assert_eq!(cache.measure(&oracle, "bb", 1.0, &FONT), Ok(2.0));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.measure(&oracle, "ccc", 1.0, &FONT), Ok(3.0));
        assert_eq!(cache.len(), 1);

        let disabled = MeasureCache::with_capacity(0);
        assert_eq!(disabled.measure(&oracle, "a", 1.0, &FONT), Ok(1.0));
        assert!(disabled.is_empty());
        assert_eq!(MeasureCache::new().capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_failures_not_cached() {
        let oracle = |_: &str, _: f32, _: &FontSpec| Err::<f32, _>(MeasureError::new("boom"));
        let cache = MeasureCache::new();

        assert!(cache.measure(&oracle, "x", 1.0, &FONT).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_is_send_sync() {
        static_assertions::assert_impl_all!(MeasureCache: Send, Sync);
    }
}
