//! Lehmer (multiplicative congruential) random number generation
//!
//! Both generators run the recurrence `seed = seed * a mod m` with parameters
//! taken from Pierre l'Ecuyer's tables of spectral-test-validated MLCG
//! multipliers ("Tables of linear congruential generators of different sizes
//! and good lattice structure", Math. Comp. 68 (1999), 249-260).
//!
//! - [`BoundedLehmer`]: `m = 2^35 - 31`, `a = 185852`. Chosen so that
//!   `a * (m - 1) < 2^53`, which keeps every product exactly representable
//!   in an `f64` mantissa. The multiply fits comfortably in `u64`.
//! - [`ExtendedLehmer`]: `m = 2^53 - 111`, `a = 5667072534355537`. The state
//!   still converts exactly to `f64`, but the product needs ~106 bits, so the
//!   multiply-then-reduce runs in `u128`.
//!
//! # Determinism
//!
//! Same seed → same sequence. There is no hidden global generator; every
//! instance owns its state and two instances only agree when seeded alike.
//!
//! # Not for cryptography
//!
//! The full state is recoverable from a single `next_f64` output.

mod bounded;
mod extended;

pub use bounded::BoundedLehmer;
pub use extended::ExtendedLehmer;

use crate::error::RngError;
use serde::Deserialize;

/// Common interface of the two precision variants
///
/// `Lehmer` is object safe, so `&mut dyn Lehmer` can stand in for either
/// generator.
pub trait Lehmer {
    /// Modulus `m`; the state always lies in `[0, m)`
    fn modulus(&self) -> u64;

    /// Multiplier `a`
    fn multiplier(&self) -> u64;

    /// Replace the state with `s mod m` (Euclidean, so never negative)
    ///
    /// A seed that is a multiple of `m` puts the generator on the fixed
    /// point `0`, which it never leaves.
    fn reseed(&mut self, s: i64);

    /// Advance and return `seed / m`, strictly inside `(0, 1)` unless the
    /// state is the zero fixed point
    fn next_f64(&mut self) -> f64;

    /// Advance and reduce the new state modulo `k`
    ///
    /// The exact output range is variant specific; see the implementors.
    ///
    /// # Panics
    /// Panics if `k <= 0`
    fn next_int(&mut self, k: i64) -> i64;

    /// Current state (for checkpointing/replay)
    fn get_state(&self) -> u64;

    /// Like [`Lehmer::next_int`], but rejects `k <= 0` with
    /// [`RngError::InvalidArgument`] and leaves the state untouched
    fn try_next_int(&mut self, k: i64) -> Result<i64, RngError> {
        check_bound(k)?;
        Ok(self.next_int(k))
    }
}

pub(crate) fn check_bound(k: i64) -> Result<(), RngError> {
    if k <= 0 {
        return Err(RngError::invalid_argument(
            "k",
            format!("bound must be positive, got {}", k),
        ));
    }
    Ok(())
}

/// Serialized form of a generator, validated on the way back in
#[derive(Debug, Deserialize)]
pub(crate) struct SeedState {
    pub(crate) seed: u64,
}

impl SeedState {
    pub(crate) fn validate(self, modulus: u64) -> Result<u64, RngError> {
        if self.seed >= modulus {
            return Err(RngError::invalid_argument(
                "seed",
                format!("state {} is outside [0, {})", self.seed, modulus),
            ));
        }
        Ok(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bound_rejects_non_positive() {
        assert!(check_bound(0).is_err());
        assert!(check_bound(-5).is_err());
        assert!(check_bound(1).is_ok());
    }

    #[test]
    fn test_dyn_dispatch_over_both_variants() {
        let mut generators: Vec<Box<dyn Lehmer>> = vec![
            Box::new(BoundedLehmer::from_seed(1)),
            Box::new(ExtendedLehmer::from_seed(1)),
        ];

        for rng in generators.iter_mut() {
            let value = rng.next_f64();
            assert!(value > 0.0 && value < 1.0);
            assert!(rng.get_state() < rng.modulus());
        }
    }

    #[test]
    fn test_try_next_int_leaves_state_on_error() {
        let mut rng = BoundedLehmer::from_seed(99);
        let before = rng.get_state();

        let err = rng.try_next_int(0).unwrap_err();
        assert!(matches!(err, RngError::InvalidArgument { name: "k", .. }));
        assert_eq!(rng.get_state(), before);
    }
}
