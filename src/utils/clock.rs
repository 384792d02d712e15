//! Wall-clock helpers for response timestamps.

use chrono::Utc;

/// Current time as fractional seconds since the Unix epoch.
pub fn unix_timestamp() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
