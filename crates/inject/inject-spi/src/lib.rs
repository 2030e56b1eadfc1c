//! Anomaly Injection Service Provider Interface
//!
//! Defines traits and types for synthetic anomaly injection.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::SeriesInjector;
pub use error::{InjectError, Result};
pub use model::{AnomalyEvent, IndexLabel, InjectionReport, SeriesFrame};
