use crate::application::ports::random::RandomSource;
use rand::Rng;
use std::collections::HashSet;

#[derive(Default, Clone)]
pub struct ThreadRngRandomSource;

impl RandomSource for ThreadRngRandomSource {
    fn distinct_ids_in_range(&self, min: i64, max: i64, count: usize) -> Vec<i64> {
        if max < min || count == 0 {
            return Vec::new();
        }

        let span = (max - min + 1) as u64;
        let count = count.min(usize::try_from(span).unwrap_or(usize::MAX));

        let mut rng = rand::thread_rng();
        let mut seen = HashSet::with_capacity(count);
        let mut ids = Vec::with_capacity(count);
        while ids.len() < count {
            let id = rng.gen_range(min..=max);
            if seen.insert(id) {
                ids.push(id);
            }
        }
        ids
    }
}
