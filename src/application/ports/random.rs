// src/application/ports/random.rs

/// Source of random ids for the recommendation query. Behind a port so tests
/// can pin the drawn ids.
pub trait RandomSource: Send + Sync {
    /// Up to `count` distinct ids drawn uniformly from `min..=max`. Returns
    /// fewer when the range itself holds fewer than `count` ids, and an
    /// empty vec when the range is empty.
    fn distinct_ids_in_range(&self, min: i64, max: i64, count: usize) -> Vec<i64>;
}
