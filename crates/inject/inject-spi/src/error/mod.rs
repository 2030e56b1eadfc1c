//! Error types for anomaly injection.
//!
//! This module contains error types and the Result alias.

mod inject_error;

pub use inject_error::{InjectError, Result};
