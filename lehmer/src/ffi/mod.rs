//! PyO3 bindings
//!
//! Exposes both generators to Python under the names they carry in the
//! library. `RngError` surfaces as `ValueError`.

pub mod generator;
