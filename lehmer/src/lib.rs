//! Lehmer RNG Core - Rust Engine
//!
//! Deterministic multiplicative linear congruential generators (MLCG) in two
//! precision variants.
//!
//! # Architecture
//!
//! - **core**: Injectable clock used for default seeding
//! - **rng**: The `Lehmer` trait and both generators
//! - **config**: Variant and seed selection, runtime dispatch
//! - **error**: Boundary errors
//!
//! # Critical Invariants
//!
//! 1. Generator state always lies in `[0, m)`
//! 2. Same seed produces the same sequence
//! 3. Seed `0 mod m` is a fixed point and is never remapped

// Module declarations
pub mod config;
pub mod core;
pub mod error;
pub mod rng;

// Re-exports for convenience
pub use config::{Generator, GeneratorKind, RngConfig, SeedSource};
pub use crate::core::clock::{Clock, FixedClock, SystemClock};
pub use error::RngError;
pub use rng::{BoundedLehmer, ExtendedLehmer, Lehmer};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn lehmer_rng_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyBoundedLehmer>()?;
    m.add_class::<ffi::generator::PyExtendedLehmer>()?;
    Ok(())
}
