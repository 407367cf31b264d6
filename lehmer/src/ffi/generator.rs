//! PyO3 wrappers for the Lehmer generators
//!
//! # Example (from Python)
//!
//! ```python
//! from lehmer_rng_core_rs import BoundedLehmer, ExtendedLehmer
//!
//! rng = BoundedLehmer(1)
//! rng.random()         # 185852 / (2**35 - 31)
//! rng.random_int(6)    # [0, 6)
//!
//! wide = ExtendedLehmer()  # seeded from the clock
//! wide.srandom(42)
//! wide.random_int(6)   # (0, 6]
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::RngError;
use crate::rng::{
    BoundedLehmer as RustBoundedLehmer, ExtendedLehmer as RustExtendedLehmer, Lehmer,
};

fn to_py_err(err: RngError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for the bounded-precision generator
#[pyclass(name = "BoundedLehmer")]
pub struct PyBoundedLehmer {
    inner: RustBoundedLehmer,
}

#[pymethods]
impl PyBoundedLehmer {
    /// Create a generator; without a seed it reads the wall clock
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<i64>) -> Self {
        let inner = match seed {
            Some(s) => RustBoundedLehmer::from_seed(s),
            None => RustBoundedLehmer::new(),
        };
        PyBoundedLehmer { inner }
    }

    /// Reset the sequence with `s mod m`
    fn srandom(&mut self, s: i64) {
        self.inner.reseed(s);
    }

    /// Random float `0 < x < 1`
    fn random(&mut self) -> f64 {
        self.inner.next_f64()
    }

    /// Random integer `0 <= x < k`
    ///
    /// Raises ValueError if `k <= 0`
    fn random_int(&mut self, k: i64) -> PyResult<i64> {
        self.inner.try_next_int(k).map_err(to_py_err)
    }

    fn get_state(&self) -> u64 {
        self.inner.get_state()
    }
}

/// Python wrapper for the extended-precision generator
#[pyclass(name = "ExtendedLehmer")]
pub struct PyExtendedLehmer {
    inner: RustExtendedLehmer,
}

#[pymethods]
impl PyExtendedLehmer {
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<i64>) -> Self {
        let inner = match seed {
            Some(s) => RustExtendedLehmer::from_seed(s),
            None => RustExtendedLehmer::new(),
        };
        PyExtendedLehmer { inner }
    }

    fn srandom(&mut self, s: i64) {
        self.inner.reseed(s);
    }

    fn random(&mut self) -> f64 {
        self.inner.next_f64()
    }

    /// Random integer `0 < x <= k`
    ///
    /// Raises ValueError if `k <= 0`
    fn random_int(&mut self, k: i64) -> PyResult<i64> {
        self.inner.try_next_int(k).map_err(to_py_err)
    }

    fn get_state(&self) -> u64 {
        self.inner.get_state()
    }
}
