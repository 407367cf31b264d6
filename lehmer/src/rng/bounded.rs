//! Bounded-precision Lehmer generator
//!
//! All arithmetic stays below 2^53, the largest integer an `f64` represents
//! exactly. That ceiling is what limits the modulus to 2^35 - 31.

use super::{Lehmer, SeedState};
use crate::core::clock::{Clock, SystemClock};
use crate::error::RngError;
use log::debug;
use serde::{Deserialize, Serialize};

const M: u64 = (1 << 35) - 31;
const A: u64 = 185_852;

// a * (m - 1) must fit an f64 mantissa.
const _: () = assert!(A * (M - 1) < 1 << 53);

/// Lehmer generator with `m = 2^35 - 31`, `a = 185852`
///
/// # Example
/// ```
/// use lehmer_rng_core_rs::{BoundedLehmer, Lehmer};
///
/// let mut rng = BoundedLehmer::from_seed(12345);
/// let fraction = rng.next_f64(); // (0, 1)
/// let die = rng.next_int(6); // [0, 6)
/// assert!(fraction > 0.0 && fraction < 1.0);
/// assert!((0..6).contains(&die));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeedState")]
pub struct BoundedLehmer {
    /// Internal state, always in `[0, M)`
    seed: u64,
}

impl BoundedLehmer {
    pub const MODULUS: u64 = M;
    pub const MULTIPLIER: u64 = A;

    /// Create a generator seeded from the wall clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create a generator seeded from `clock.now_millis() mod m`
    ///
    /// # Example
    /// ```
    /// use lehmer_rng_core_rs::{BoundedLehmer, FixedClock, Lehmer};
    ///
    /// let rng = BoundedLehmer::with_clock(FixedClock::new(1_000));
    /// assert_eq!(rng.get_state(), 1_000);
    /// ```
    pub fn with_clock(clock: impl Clock) -> Self {
        Self::from_seed(clock.now_millis())
    }

    /// Create a generator with state `s mod m`
    pub fn from_seed(s: i64) -> Self {
        let seed = reduce(s);
        debug!("bounded lehmer seeded: s={} state={}", s, seed);
        Self { seed }
    }

    fn advance(&mut self) -> u64 {
        self.seed = self.seed * A % M;
        self.seed
    }
}

impl Default for BoundedLehmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lehmer for BoundedLehmer {
    fn modulus(&self) -> u64 {
        M
    }

    fn multiplier(&self) -> u64 {
        A
    }

    fn reseed(&mut self, s: i64) {
        self.seed = reduce(s);
        debug!("bounded lehmer reseeded: s={} state={}", s, self.seed);
    }

    fn next_f64(&mut self) -> f64 {
        self.advance() as f64 / M as f64
    }

    /// Returns a value in `[0, k)`
    ///
    /// This is the advanced state reduced modulo `k`, so it carries a small
    /// bias whenever `k` does not divide `m`. Rejection sampling would change
    /// the sequence, so the bias stays.
    fn next_int(&mut self, k: i64) -> i64 {
        assert!(k > 0, "k must be positive");
        (self.advance() % k as u64) as i64
    }

    fn get_state(&self) -> u64 {
        self.seed
    }
}

impl TryFrom<SeedState> for BoundedLehmer {
    type Error = RngError;

    fn try_from(state: SeedState) -> Result<Self, Self::Error> {
        Ok(Self {
            seed: state.validate(M)?,
        })
    }
}

fn reduce(s: i64) -> u64 {
    // M < 2^35, so both casts are lossless.
    s.rem_euclid(M as i64) as u64
}
