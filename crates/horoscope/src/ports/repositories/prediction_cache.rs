//! Prediction Cache Port
//!
//! Short-lived store of validated AI predictions, keyed by [`CacheKey`].

use std::time::Duration;

use crate::domain::entities::{CacheKey, PredictionSet};

/// Cache of AI-generated predictions
///
/// Expiry is lazy: an expired entry is dropped by the `get` that finds it.
/// Concurrent misses on the same key may both generate; the last `put` wins.
pub trait PredictionCache: Send + Sync {
    /// Fetch an unexpired entry
    fn get(&self, key: &CacheKey) -> Option<PredictionSet>;

    /// Store (or overwrite) an entry living for `ttl`
    fn put(&self, key: CacheKey, value: PredictionSet, ttl: Duration);

    /// Drop every entry
    fn clear(&self);

    /// Number of stored entries, expired or not
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
