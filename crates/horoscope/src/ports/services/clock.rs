//! Clock Port
//!
//! Source of "now" for cache keys and TTL checks, swappable in tests.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
