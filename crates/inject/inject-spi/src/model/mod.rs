//! Data models for anomaly injection.
//!
//! This module contains data structures used throughout the injection system.

mod frame;
mod report;

pub use frame::{IndexLabel, SeriesFrame};
pub use report::{AnomalyEvent, InjectionReport};
