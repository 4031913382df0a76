//! Cohen's d standardized mean difference
//!
//! Cohen's d expresses the difference between two group means in units of
//! their pooled standard deviation. The first group is the category seen
//! first in the data, so the sign is deterministic for a given row order.

use crate::samples::GroupedSample;
use crate::types::{Auxiliary, Estimate, GroupSummary};
use crate::EffectSizeEstimator;
use effect_core::{Error, MetricKind, Result};
use tracing::debug;

/// Cohen's d effect size estimator
///
/// d = (mean₁ - mean₂) / s_pooled
///
/// s_pooled = sqrt(((n₁ - 1)s₁² + (n₂ - 1)s₂²) / (n₁ + n₂ - 2))
///
/// The pooled SD is formed relative to the larger group SD, so it stays
/// finite whenever the group SDs are.
#[derive(Debug, Clone, Copy, Default)]
pub struct CohenD;

impl CohenD {
    pub fn new() -> Self {
        Self
    }

    /// Compute d from two groups of the `measured` column
    pub fn compute(
        &self,
        measured: &str,
        first: &GroupSummary,
        second: &GroupSummary,
    ) -> Result<Estimate> {
        for group in [first, second] {
            if group.n < 2 {
                return Err(Error::insufficient(
                    format!("Cohen's d group '{}'", group.label),
                    2,
                    group.n,
                ));
            }
        }

        // Both groups have n >= 2, so both SDs are defined
        let sd1 = first.std_dev.unwrap_or(0.0);
        let sd2 = second.std_dev.unwrap_or(0.0);
        let scale = sd1.max(sd2);
        if !(scale > 0.0) {
            return Err(Error::degenerate(
                measured,
                format!(
                    "pooled standard deviation of groups '{}' and '{}' is zero",
                    first.label, second.label
                ),
            ));
        }

        let dof = first.n + second.n - 2;
        let (r1, r2) = (sd1 / scale, sd2 / scale);
        let pooled_sd = scale
            * (((first.n - 1) as f64 * r1 * r1 + (second.n - 1) as f64 * r2 * r2) / dof as f64)
                .sqrt();

        let d = (first.mean - second.mean) / pooled_sd;
        debug!(
            first = %first.label,
            second = %second.label,
            pooled_sd,
            d,
            "computed Cohen's d"
        );

        Ok(Estimate {
            value: d,
            sample_size: first.n + second.n,
            auxiliary: Auxiliary::CohensD {
                first: first.clone(),
                second: second.clone(),
                pooled_sd,
                dof,
            },
        })
    }
}

impl EffectSizeEstimator for CohenD {
    type Input = GroupedSample;

    fn metric(&self) -> MetricKind {
        MetricKind::CohensD
    }

    fn estimate(&self, sample: &GroupedSample) -> Result<Estimate> {
        if sample.group_count() != 2 {
            return Err(Error::UnsupportedPairing(format!(
                "Cohen's d needs exactly 2 groups, got {}",
                sample.group_count()
            )));
        }
        let mut summaries = sample
            .iter()
            .map(|(label, values)| GroupSummary::from_values(label, values));
        let (Some(first), Some(second)) = (summaries.next(), summaries.next()) else {
            return Err(Error::insufficient("Cohen's d groups", 2, sample.group_count()));
        };
        self.compute(sample.measured_name(), &first, &second)
    }
}
