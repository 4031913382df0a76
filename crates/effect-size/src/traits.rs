//! Core traits for effect size estimation

use crate::types::Estimate;
use effect_core::{MetricKind, Result};

/// Base trait for effect size estimators
///
/// Each estimator consumes the sample shape its metric needs (a contingency
/// table, grouped observations or paired observations) and returns the raw
/// value together with its auxiliary statistics. Magnitude labels and the
/// significance annotation are attached later by the engine.
pub trait EffectSizeEstimator {
    /// Sample shape the estimator consumes
    type Input: ?Sized;

    /// Metric this estimator computes
    fn metric(&self) -> MetricKind;

    /// Compute the effect size
    fn estimate(&self, input: &Self::Input) -> Result<Estimate>;
}
