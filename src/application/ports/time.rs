// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for timestamps, session expiry and feed build dates.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
