//! Time sources for default seeding
//!
//! A freshly constructed generator seeds itself from "milliseconds since the
//! Unix epoch". The clock is a collaborator so tests and reproducible runs
//! can pin it instead of depending on real time.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "milliseconds since the Unix epoch"
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by [`SystemTime`]
///
/// Times before the epoch are reported as negative milliseconds; callers
/// reduce them into the generator's state range like any other seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            Err(err) => i64::try_from(err.duration().as_millis())
                .map(|ms| -ms)
                .unwrap_or(i64::MIN),
        }
    }
}

/// Clock frozen at a fixed instant
///
/// # Example
/// ```
/// use lehmer_rng_core_rs::{Clock, FixedClock};
///
/// let clock = FixedClock::new(1_700_000_000_000);
/// assert_eq!(clock.now_millis(), 1_700_000_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedClock {
    millis: i64,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self { millis }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}
