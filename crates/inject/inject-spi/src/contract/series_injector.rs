//! Series injector trait definition.

use rand::RngCore;

use crate::error::Result;
use crate::model::SeriesFrame;

/// Series injector trait.
///
/// Implementations add a synthetic-anomaly column to a time series frame.
/// The randomness source is passed explicitly: seeding it makes a run
/// reproducible, and independent frames can be processed concurrently as
/// long as each call owns its generator.
pub trait SeriesInjector: Send + Sync {
    /// Inject anomalies, returning a new frame with one added column.
    ///
    /// The input frame is never mutated; its index and existing columns
    /// are carried into the output unchanged.
    fn inject(&self, frame: &SeriesFrame, rng: &mut dyn RngCore) -> Result<SeriesFrame>;

    /// Name of this injector.
    fn name(&self) -> &str;
}
