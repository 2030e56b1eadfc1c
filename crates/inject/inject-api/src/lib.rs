//! Anomaly Injection API
//!
//! Configuration types and the declarative parameter schema for anomaly
//! injection.

mod config;
mod schema;

// Re-export SPI types
pub use inject_spi::{
    AnomalyEvent, IndexLabel, InjectError, InjectionReport, Result, SeriesFrame, SeriesInjector,
};

pub use config::ExtremeAnomalyConfig;
pub use schema::{param_schema, ParamKind, ParamRole, ParamSpec};
