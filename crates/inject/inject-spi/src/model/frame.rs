//! Columnar time series frame.

use serde::{Deserialize, Serialize};

use crate::error::{InjectError, Result};

/// Composite row label: zero or more entity keys plus a Unix timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexLabel {
    /// Identifying keys (device id, site, ...). May be empty.
    pub keys: Vec<String>,
    /// Unix timestamp
    pub timestamp: i64,
}

impl IndexLabel {
    /// Create a label with entity keys and a timestamp.
    pub fn new(keys: Vec<String>, timestamp: i64) -> Self {
        Self { keys, timestamp }
    }

    /// Create a label with a timestamp only.
    pub fn from_timestamp(timestamp: i64) -> Self {
        Self {
            keys: Vec::new(),
            timestamp,
        }
    }
}

/// An ordered, columnar time series table.
///
/// Rows share a composite index; columns are named `f64` series in
/// insertion order. Row order is significant: neighborhoods are defined
/// by position, not by timestamp distance. Missing observations are
/// represented as `f64::NAN`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesFrame {
    index: Vec<IndexLabel>,
    columns: Vec<(String, Vec<f64>)>,
}

impl SeriesFrame {
    /// Create an empty frame over the given index.
    pub fn new(index: Vec<IndexLabel>) -> Self {
        Self {
            index,
            columns: Vec::new(),
        }
    }

    /// Create a single-column frame with a default positional index
    /// (timestamps 0, 1, 2, ...).
    pub fn from_values(name: &str, values: Vec<f64>) -> Self {
        let index = (0..values.len() as i64)
            .map(IndexLabel::from_timestamp)
            .collect();
        Self {
            index,
            columns: vec![(name.to_string(), values)],
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Row labels, in order.
    pub fn index(&self) -> &[IndexLabel] {
        &self.index
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Look up a column by name, or fail with `MissingColumn`.
    pub fn require_column(&self, name: &str) -> Result<&[f64]> {
        self.column(name).ok_or_else(|| InjectError::MissingColumn {
            name: name.to_string(),
        })
    }

    /// Whether a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Column names, in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Add a column, replacing any existing column of the same name.
    ///
    /// Fails with `ColumnLengthMismatch` if the values do not match the
    /// index length.
    pub fn insert_column(&mut self, name: &str, values: Vec<f64>) -> Result<()> {
        if values.len() != self.index.len() {
            return Err(InjectError::ColumnLengthMismatch {
                column: name.to_string(),
                expected: self.index.len(),
                got: values.len(),
            });
        }
        if let Some(slot) = self.columns.iter_mut().find(|(n, _)| n == name) {
            slot.1 = values;
        } else {
            self.columns.push((name.to_string(), values));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_builds_positional_index() {
        let frame = SeriesFrame::from_values("temp", vec![1.0, 2.0, 3.0]);
        assert_eq!(frame.len(), 3);
        assert_eq!(frame.index()[0], IndexLabel::from_timestamp(0));
        assert_eq!(frame.index()[2], IndexLabel::from_timestamp(2));
        assert_eq!(frame.column("temp"), Some([1.0, 2.0, 3.0].as_slice()));
    }

    #[test]
    fn test_insert_column_length_mismatch() {
        let mut frame = SeriesFrame::from_values("temp", vec![1.0, 2.0, 3.0]);
        let err = frame
            .insert_column("pressure", vec![1.0, 2.0])
            .unwrap_err();
        assert!(matches!(
            err,
            InjectError::ColumnLengthMismatch {
                expected: 3,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_insert_column_replaces_existing() {
        let mut frame = SeriesFrame::from_values("temp", vec![1.0, 2.0]);
        frame.insert_column("temp", vec![5.0, 6.0]).unwrap();
        assert_eq!(frame.column("temp"), Some([5.0, 6.0].as_slice()));
        assert_eq!(frame.column_names(), vec!["temp"]);
    }

    #[test]
    fn test_require_column_missing() {
        let frame = SeriesFrame::from_values("temp", vec![1.0]);
        let err = frame.require_column("humidity").unwrap_err();
        assert!(matches!(err, InjectError::MissingColumn { name } if name == "humidity"));
    }

    #[test]
    fn test_composite_index_preserved() {
        let index = vec![
            IndexLabel::new(vec!["pump-1".to_string()], 1000),
            IndexLabel::new(vec!["pump-1".to_string()], 2000),
        ];
        let mut frame = SeriesFrame::new(index.clone());
        frame.insert_column("flow", vec![3.5, 3.6]).unwrap();
        assert_eq!(frame.index(), index.as_slice());
    }

    #[test]
    fn test_empty_frame() {
        let frame = SeriesFrame::new(Vec::new());
        assert!(frame.is_empty());
        assert_eq!(frame.len(), 0);
        assert!(!frame.has_column("temp"));
    }
}
