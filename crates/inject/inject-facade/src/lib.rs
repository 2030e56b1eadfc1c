//! Anomaly Injection Facade
//!
//! Unified re-exports for the anomaly injection module.
//!
//! This facade provides a single entry point to all injection functionality:
//! - `SeriesInjector` trait, errors, and frame/report models from SPI
//! - Configuration and parameter schema from API
//! - `ExtremeAnomalyInjector` and its support functions from Core

// Re-export everything from SPI
pub use inject_spi::*;

// Re-export everything from API
pub use inject_api::*;

// Re-export everything from Core
pub use inject_core::*;
