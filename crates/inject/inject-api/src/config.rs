//! Extreme anomaly injector configuration.

use inject_spi::{InjectError, Result};
use serde::{Deserialize, Serialize};

/// Extreme anomaly injector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtremeAnomalyConfig {
    /// Column to base anomalies on.
    pub input_item: String,
    /// Number of anomalies to create; also the number of segments the
    /// series is partitioned into.
    pub factor: u32,
    /// Magnitude multiplier on local variability. e.g. 10.0 creates
    /// anomalies 10x the size of the normal local variance.
    pub size: f64,
    /// Name of the generated column.
    pub output_item: String,
}

impl ExtremeAnomalyConfig {
    /// Create a new configuration.
    pub fn new(input_item: &str, factor: u32, size: f64, output_item: &str) -> Self {
        Self {
            input_item: input_item.to_string(),
            factor,
            size,
            output_item: output_item.to_string(),
        }
    }

    /// Validate parameter invariants.
    ///
    /// `factor` must be at least 1, `size` must be a finite positive
    /// number, column names must be non-empty and distinct (the input
    /// column is guaranteed untouched in the output, so it cannot also
    /// be the output column).
    pub fn validate(&self) -> Result<()> {
        if self.input_item.is_empty() {
            return Err(invalid("input_item", "must not be empty"));
        }
        if self.output_item.is_empty() {
            return Err(invalid("output_item", "must not be empty"));
        }
        if self.output_item == self.input_item {
            return Err(invalid("output_item", "must differ from input_item"));
        }
        if self.factor < 1 {
            return Err(invalid("factor", "must be at least 1"));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(invalid("size", "must be a finite positive number"));
        }
        Ok(())
    }
}

fn invalid(name: &str, reason: &str) -> InjectError {
    InjectError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
