//! Contract definitions for anomaly injection.
//!
//! This module contains trait definitions that providers must implement.

mod series_injector;

pub use series_injector::SeriesInjector;
