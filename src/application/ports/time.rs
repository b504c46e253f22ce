// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Wall-clock source. Avatar upload timestamps come from here, so tests
/// swap in a fixed clock to keep them deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
