//! Anomaly Injection Core
//!
//! Implementation of extreme anomaly injection over time series frames.

mod injector;
mod segment;
mod stats;

pub use injector::ExtremeAnomalyInjector;
pub use segment::segment_bounds;
pub use stats::{sample_std, window_std};
