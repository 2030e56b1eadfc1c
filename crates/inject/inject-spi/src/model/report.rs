//! Injection result types.

use serde::{Deserialize, Serialize};

/// A single injected anomaly: where it landed and what was added.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyEvent {
    /// Row position in the frame.
    pub position: usize,
    /// Signed additive perturbation.
    pub delta: f64,
}

/// Summary of one injection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjectionReport {
    /// Injected anomalies, in segment order.
    pub events: Vec<AnomalyEvent>,
    /// Number of segments the series was partitioned into.
    pub segments: usize,
}

impl InjectionReport {
    /// Create a new injection report.
    pub fn new(events: Vec<AnomalyEvent>, segments: usize) -> Self {
        Self { events, segments }
    }

    /// Positions that received an anomaly, in segment order.
    pub fn positions(&self) -> Vec<usize> {
        self.events.iter().map(|e| e.position).collect()
    }

    /// Count of injected anomalies (at most one per segment; empty
    /// segments contribute none).
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Count of anomalies with a non-zero perturbation. Degenerate
    /// windows (fewer than two valid values) produce zero deltas.
    pub fn nonzero_count(&self) -> usize {
        self.events.iter().filter(|e| e.delta != 0.0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_in_segment_order() {
        let report = InjectionReport::new(
            vec![
                AnomalyEvent {
                    position: 3,
                    delta: 1.5,
                },
                AnomalyEvent {
                    position: 12,
                    delta: -2.0,
                },
            ],
            2,
        );
        assert_eq!(report.positions(), vec![3, 12]);
        assert_eq!(report.event_count(), 2);
    }

    #[test]
    fn test_nonzero_count_skips_degenerate_deltas() {
        let report = InjectionReport::new(
            vec![
                AnomalyEvent {
                    position: 0,
                    delta: 0.0,
                },
                AnomalyEvent {
                    position: 7,
                    delta: 4.2,
                },
            ],
            2,
        );
        assert_eq!(report.nonzero_count(), 1);
    }

    #[test]
    fn test_empty_report() {
        let report = InjectionReport::new(Vec::new(), 5);
        assert_eq!(report.event_count(), 0);
        assert_eq!(report.nonzero_count(), 0);
        assert_eq!(report.segments, 5);
    }
}
