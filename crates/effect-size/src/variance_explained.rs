//! Variance explained effect size (eta-squared)

use crate::samples::GroupedSample;
use crate::types::{scale_of, Auxiliary, Estimate, GroupSummary};
use crate::EffectSizeEstimator;
use effect_core::{Error, MetricKind, Result};
use tracing::debug;

/// Eta-squared (η²) effect size estimator
///
/// Eta-squared represents the proportion of total variance that is explained
/// by group membership in a one-way ANOVA. It ranges from 0 to 1, where 0
/// indicates no effect and 1 indicates that group membership explains all
/// variance.
///
/// η² = SS_between / SS_total
#[derive(Debug, Clone, Copy, Default)]
pub struct EtaSquared;

impl EtaSquared {
    pub fn new() -> Self {
        Self
    }
}

impl EffectSizeEstimator for EtaSquared {
    type Input = GroupedSample;

    fn metric(&self) -> MetricKind {
        MetricKind::EtaSquared
    }

    fn estimate(&self, sample: &GroupedSample) -> Result<Estimate> {
        let k = sample.group_count();
        if k < 2 {
            return Err(Error::insufficient("eta squared groups", 2, k));
        }
        if let Some((label, _)) = sample.iter().find(|(_, values)| values.is_empty()) {
            return Err(Error::insufficient(
                format!("eta squared group '{label}'"),
                1,
                0,
            ));
        }

        let groups: Vec<GroupSummary> = sample
            .iter()
            .map(|(label, values)| GroupSummary::from_values(label, values))
            .collect();

        let n_total = sample.total();
        let scale = scale_of(sample.groups().iter().flatten());

        // Sums of squares in units of `scale`; the ratios below are unaffected
        let scaled_means: Vec<f64> = groups.iter().map(|g| g.mean / scale).collect();
        let grand_mean = groups
            .iter()
            .zip(&scaled_means)
            .map(|(g, m)| m * g.n as f64)
            .sum::<f64>()
            / n_total as f64;

        let ss_between_scaled: f64 = groups
            .iter()
            .zip(&scaled_means)
            .map(|(g, m)| g.n as f64 * (m - grand_mean).powi(2))
            .sum();

        let ss_within_scaled: f64 = groups
            .iter()
            .zip(&scaled_means)
            .map(|(g, m)| g.values.iter().map(|x| (x / scale - m).powi(2)).sum::<f64>())
            .sum();

        let ss_total_scaled = ss_between_scaled + ss_within_scaled;
        if !(ss_total_scaled > 0.0) {
            return Err(Error::degenerate(
                sample.measured_name(),
                "total sum of squares is zero",
            ));
        }

        let eta_squared = (ss_between_scaled / ss_total_scaled).clamp(0.0, 1.0);

        let df_between = k - 1;
        let df_within = n_total - k;
        let f_statistic = (df_within > 0 && ss_within_scaled > 0.0).then(|| {
            (ss_between_scaled / df_between as f64) / (ss_within_scaled / df_within as f64)
        });

        // Reported in the data's units
        let (ss_between, ss_within, ss_total) = (
            ss_between_scaled * scale * scale,
            ss_within_scaled * scale * scale,
            ss_total_scaled * scale * scale,
        );

        debug!(groups = k, n_total, ss_between, ss_within, eta_squared, "computed eta squared");

        Ok(Estimate {
            value: eta_squared,
            sample_size: n_total,
            auxiliary: Auxiliary::EtaSquared {
                groups,
                ss_between,
                ss_within,
                ss_total,
                df_between,
                df_within,
                f_statistic,
            },
        })
    }
}
