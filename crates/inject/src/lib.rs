//! # spikeful-inject
//!
//! Synthetic extreme anomaly injection for spikeful-ts.
//! Stratified-random placement across equal segments, sized by local
//! standard deviation, for benchmarking anomaly-detection pipelines.

pub use inject_facade::*;
