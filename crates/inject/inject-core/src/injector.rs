//! Extreme anomaly injector.

use inject_api::ExtremeAnomalyConfig;
use inject_spi::{AnomalyEvent, InjectionReport, Result, SeriesFrame, SeriesInjector};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::segment::segment_bounds;
use crate::stats::window_std;

/// Rows on each side of a sampled position used for the local
/// variability estimate.
const WINDOW_RADIUS: usize = 10;

/// Injects large-magnitude anomalies into a time series column.
///
/// The series is partitioned into `factor` contiguous segments of
/// equal-as-possible length; one position is drawn uniformly from each
/// non-empty segment, and a signed perturbation of
/// `size * local standard deviation` is added there. All remaining rows
/// are carried through unchanged into the `output_item` column.
///
/// Each call is an independent, single-pass transform: no state is
/// carried across invocations, and the caller's frame is never mutated.
#[derive(Debug, Clone)]
pub struct ExtremeAnomalyInjector {
    config: ExtremeAnomalyConfig,
}

impl ExtremeAnomalyInjector {
    /// Create a new injector, validating parameters before any data is
    /// touched.
    pub fn new(config: ExtremeAnomalyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The injector's configuration.
    pub fn config(&self) -> &ExtremeAnomalyConfig {
        &self.config
    }

    /// Inject anomalies using the given randomness source.
    pub fn inject_with<R: Rng + ?Sized>(
        &self,
        frame: &SeriesFrame,
        rng: &mut R,
    ) -> Result<SeriesFrame> {
        self.inject_with_report(frame, rng).map(|(frame, _)| frame)
    }

    /// Inject anomalies reproducibly from a seed.
    pub fn inject_seeded(&self, frame: &SeriesFrame, seed: u64) -> Result<SeriesFrame> {
        self.inject_with(frame, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Inject anomalies and also return where they landed.
    pub fn inject_with_report<R: Rng + ?Sized>(
        &self,
        frame: &SeriesFrame,
        rng: &mut R,
    ) -> Result<(SeriesFrame, InjectionReport)> {
        let values = frame.require_column(&self.config.input_item)?;
        let n = values.len();
        debug!(
            rows = n,
            factor = self.config.factor,
            size = self.config.size,
            input_item = %self.config.input_item,
            "starting extreme anomaly injection"
        );

        // One anomaly per non-empty segment. Segments are disjoint, so
        // sampled positions cannot collide.
        let bounds = segment_bounds(n, self.config.factor as usize);
        let positions: Vec<usize> = bounds
            .iter()
            .filter(|(start, end)| end > start)
            .map(|&(start, end)| rng.gen_range(start..end))
            .collect();
        debug!(?positions, "sampled anomaly positions");

        let mut additional = vec![0.0; n];
        let mut events = Vec::with_capacity(positions.len());
        for &position in &positions {
            let local_std = window_std(values, position, WINDOW_RADIUS);
            if local_std == 0.0 {
                debug!(position, "degenerate window, delta is zero");
            }
            let sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
            let delta = sign * self.config.size * local_std;
            additional[position] += delta;
            events.push(AnomalyEvent { position, delta });
        }

        let output: Vec<f64> = values
            .iter()
            .zip(&additional)
            .map(|(value, delta)| value + delta)
            .collect();

        let mut result = frame.clone();
        result.insert_column(&self.config.output_item, output)?;

        debug!(events = events.len(), "finished extreme anomaly injection");
        Ok((result, InjectionReport::new(events, bounds.len())))
    }
}

impl SeriesInjector for ExtremeAnomalyInjector {
    fn inject(&self, frame: &SeriesFrame, rng: &mut dyn RngCore) -> Result<SeriesFrame> {
        self.inject_with(frame, rng)
    }

    fn name(&self) -> &str {
        "extreme_anomaly"
    }
}
