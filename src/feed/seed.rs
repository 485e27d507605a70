//! Hour-seed derivation
//!
//! Every request within the same wall-clock hour draws from an identically
//! seeded generator, so sampled news and weather only change once per hour.

use chrono::{Datelike, NaiveDateTime, Timelike};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seed for the given instant: `YYYYMMDDHH` read as an integer.
///
/// `2024-06-01T14:23:00` gives `2024060114`.
pub fn hour_seed(now: &NaiveDateTime) -> u64 {
    u64::from(now.year().unsigned_abs()) * 1_000_000
        + u64::from(now.month()) * 10_000
        + u64::from(now.day()) * 100
        + u64::from(now.hour())
}

/// Fresh generator for the hour containing `now`
pub fn hourly_rng(now: &NaiveDateTime) -> StdRng {
    StdRng::seed_from_u64(hour_seed(now))
}
