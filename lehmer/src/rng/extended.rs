//! Extended-precision Lehmer generator
//!
//! The modulus sits just under 2^53 so the state narrows to `f64` without
//! loss, but `a * seed` can reach ~2^106. The product is formed and reduced
//! in `u128`; narrowing happens only after the reduction.

use super::{Lehmer, SeedState};
use crate::core::clock::{Clock, SystemClock};
use crate::error::RngError;
use log::debug;
use serde::{Deserialize, Serialize};

const M: u64 = (1 << 53) - 111;
const A: u64 = 5_667_072_534_355_537;

/// Lehmer generator with `m = 2^53 - 111`, `a = 5667072534355537`
///
/// # Example
/// ```
/// use lehmer_rng_core_rs::{ExtendedLehmer, Lehmer};
///
/// let mut rng = ExtendedLehmer::from_seed(12345);
/// let fraction = rng.next_f64(); // (0, 1)
/// let roll = rng.next_int(6); // (0, 6]
/// assert!(fraction > 0.0 && fraction < 1.0);
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeedState")]
pub struct ExtendedLehmer {
    /// Internal state, always in `[0, M)`
    seed: u64,
}

impl ExtendedLehmer {
    pub const MODULUS: u64 = M;
    pub const MULTIPLIER: u64 = A;

    /// Create a generator seeded from the wall clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create a generator seeded from `clock.now_millis() mod m`
    pub fn with_clock(clock: impl Clock) -> Self {
        Self::from_seed(clock.now_millis())
    }

    /// Create a generator with state `s mod m`
    ///
    /// # Example
    /// ```
    /// use lehmer_rng_core_rs::{ExtendedLehmer, Lehmer};
    ///
    /// let rng = ExtendedLehmer::from_seed(-1);
    /// assert_eq!(rng.get_state(), ExtendedLehmer::MODULUS - 1);
    /// ```
    pub fn from_seed(s: i64) -> Self {
        let seed = reduce(s);
        debug!("extended lehmer seeded: s={} state={}", s, seed);
        Self { seed }
    }

    fn advance(&mut self) -> u64 {
        let next = u128::from(self.seed) * u128::from(A) % u128::from(M);
        // next < M < 2^53
        self.seed = next as u64;
        self.seed
    }
}

impl Default for ExtendedLehmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lehmer for ExtendedLehmer {
    fn modulus(&self) -> u64 {
        M
    }

    fn multiplier(&self) -> u64 {
        A
    }

    fn reseed(&mut self, s: i64) {
        self.seed = reduce(s);
        debug!("extended lehmer reseeded: s={} state={}", s, self.seed);
    }

    fn next_f64(&mut self) -> f64 {
        self.advance() as f64 / M as f64
    }

    /// Returns a value in `(0, k]`
    ///
    /// The advanced state is reduced modulo `k`; a zero residue is reported
    /// as `k` itself. Non-zero residues are returned unchanged, so outputs
    /// stay congruent to `seed mod k`. Note the range differs from
    /// [`BoundedLehmer`](super::BoundedLehmer)'s `[0, k)`.
    fn next_int(&mut self, k: i64) -> i64 {
        assert!(k > 0, "k must be positive");
        match (self.advance() % k as u64) as i64 {
            0 => k,
            r => r,
        }
    }

    fn get_state(&self) -> u64 {
        self.seed
    }
}

impl TryFrom<SeedState> for ExtendedLehmer {
    type Error = RngError;

    fn try_from(state: SeedState) -> Result<Self, Self::Error> {
        Ok(Self {
            seed: state.validate(M)?,
        })
    }
}

fn reduce(s: i64) -> u64 {
    i128::from(s).rem_euclid(i128::from(M)) as u64
}
