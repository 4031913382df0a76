//! Types for effect size representation

use crate::contingency::ContingencyTable;
use effect_core::MetricKind;
use serde::Serialize;
use statrs::statistics::Statistics;
use std::collections::BTreeMap;
use std::fmt;

/// Qualitative magnitude of an effect, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Magnitude {
    /// Below the smallest conventional cutoff
    Negligible,
    Small,
    Medium,
    Large,
}

impl Magnitude {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ascending (small, medium, large) cutoffs for a metric
pub fn thresholds(metric: MetricKind) -> [f64; 3] {
    match metric {
        // Cohen's conventions for d
        MetricKind::CohensD => [0.2, 0.5, 0.8],
        // Cohen's conventions for correlations and association
        MetricKind::CramersV | MetricKind::PearsonR => [0.1, 0.3, 0.5],
        MetricKind::EtaSquared => [0.01, 0.06, 0.14],
    }
}

/// Map an effect size value to its magnitude label
///
/// The absolute value is compared against the metric's cutoffs, so the
/// sign of Cohen's d or Pearson's r never affects the label.
pub fn interpret(metric: MetricKind, value: f64) -> Magnitude {
    let [small, medium, large] = thresholds(metric);
    let abs_value = value.abs();

    if abs_value >= large {
        Magnitude::Large
    } else if abs_value >= medium {
        Magnitude::Medium
    } else if abs_value >= small {
        Magnitude::Small
    } else {
        Magnitude::Negligible
    }
}

/// Largest absolute value in `values`, or 1 when there is none
///
/// Deviations are divided by this before squaring so sums of squares stay
/// finite for any finite input. Every metric here is scale-free.
pub(crate) fn scale_of<'a>(values: impl IntoIterator<Item = &'a f64>) -> f64 {
    let max = values.into_iter().fold(0.0_f64, |m, x| m.max(x.abs()));
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// Summary of one group of the measured variable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    /// Category label defining the group
    pub label: String,
    /// Number of observations
    pub n: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); `None` for a single observation
    pub std_dev: Option<f64>,
    /// Observations in row order
    pub values: Vec<f64>,
}

impl GroupSummary {
    /// Summarize one group's observations
    pub fn from_values(label: impl Into<String>, values: &[f64]) -> Self {
        let scale = scale_of(values);
        let std_dev =
            (values.len() >= 2).then(|| scale * values.iter().map(|x| x / scale).std_dev());
        Self {
            label: label.into(),
            n: values.len(),
            mean: values.iter().mean(),
            std_dev,
            values: values.to_vec(),
        }
    }
}

/// Metric-specific auxiliary statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum Auxiliary {
    CramersV {
        table: ContingencyTable,
        expected: Vec<Vec<f64>>,
        chi_square: f64,
        dof: usize,
        continuity_corrected: bool,
    },
    CohensD {
        first: GroupSummary,
        second: GroupSummary,
        pooled_sd: f64,
        dof: usize,
    },
    EtaSquared {
        groups: Vec<GroupSummary>,
        ss_between: f64,
        ss_within: f64,
        ss_total: f64,
        df_between: usize,
        df_within: usize,
        /// Undefined without residual degrees of freedom or residual variance
        f_statistic: Option<f64>,
    },
    PearsonR {
        pairs: Vec<(f64, f64)>,
        mean_x: f64,
        mean_y: f64,
        /// Least-squares fit of y on x
        slope: f64,
        intercept: f64,
        dof: usize,
    },
}

impl Auxiliary {
    pub fn metric(&self) -> MetricKind {
        match self {
            Self::CramersV { .. } => MetricKind::CramersV,
            Self::CohensD { .. } => MetricKind::CohensD,
            Self::EtaSquared { .. } => MetricKind::EtaSquared,
            Self::PearsonR { .. } => MetricKind::PearsonR,
        }
    }

    /// Group labels in the order used for computation
    pub fn group_labels(&self) -> Vec<&str> {
        match self {
            Self::CohensD { first, second, .. } => {
                vec![first.label.as_str(), second.label.as_str()]
            }
            Self::EtaSquared { groups, .. } => groups.iter().map(|g| g.label.as_str()).collect(),
            Self::CramersV { .. } | Self::PearsonR { .. } => Vec::new(),
        }
    }

    fn scalar_stats(&self, stats: &mut BTreeMap<&'static str, f64>) {
        match self {
            Self::CramersV {
                table,
                chi_square,
                dof,
                ..
            } => {
                stats.insert("chi_square", *chi_square);
                stats.insert("dof", *dof as f64);
                stats.insert("rows", table.row_labels().len() as f64);
                stats.insert("columns", table.column_labels().len() as f64);
            }
            Self::CohensD {
                first,
                second,
                pooled_sd,
                dof,
            } => {
                stats.insert("mean_first", first.mean);
                stats.insert("mean_second", second.mean);
                stats.insert("n_first", first.n as f64);
                stats.insert("n_second", second.n as f64);
                stats.insert("pooled_sd", *pooled_sd);
                stats.insert("dof", *dof as f64);
            }
            Self::EtaSquared {
                groups,
                ss_between,
                ss_within,
                ss_total,
                df_between,
                df_within,
                f_statistic,
            } => {
                stats.insert("groups", groups.len() as f64);
                stats.insert("ss_between", *ss_between);
                stats.insert("ss_within", *ss_within);
                stats.insert("ss_total", *ss_total);
                stats.insert("df_between", *df_between as f64);
                stats.insert("df_within", *df_within as f64);
                if let Some(f) = f_statistic {
                    stats.insert("f_statistic", *f);
                }
            }
            Self::PearsonR {
                mean_x,
                mean_y,
                slope,
                intercept,
                dof,
                ..
            } => {
                stats.insert("mean_x", *mean_x);
                stats.insert("mean_y", *mean_y);
                stats.insert("slope", *slope);
                stats.insert("intercept", *intercept);
                stats.insert("dof", *dof as f64);
            }
        }
    }
}

/// Raw output of a single metric estimator
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub value: f64,
    /// Observations used after pairwise-complete filtering
    pub sample_size: usize,
    pub auxiliary: Auxiliary,
}

/// Result of one effect size calculation
///
/// Created once per calculation and never mutated; the next calculation
/// produces a new result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectSizeResult {
    pub metric: MetricKind,
    pub value: f64,
    pub magnitude: Magnitude,
    /// Significance threshold the user supplied, reported as-is
    pub alpha: f64,
    /// Name of the first selected column
    pub column_a: String,
    /// Name of the second selected column
    pub column_b: String,
    pub sample_size: usize,
    pub auxiliary: Auxiliary,
}

impl EffectSizeResult {
    pub fn new(
        estimate: Estimate,
        alpha: f64,
        column_a: impl Into<String>,
        column_b: impl Into<String>,
    ) -> Self {
        let metric = estimate.auxiliary.metric();
        Self {
            metric,
            value: estimate.value,
            magnitude: interpret(metric, estimate.value),
            alpha,
            column_a: column_a.into(),
            column_b: column_b.into(),
            sample_size: estimate.sample_size,
            auxiliary: estimate.auxiliary,
        }
    }

    pub fn abs_value(&self) -> f64 {
        self.value.abs()
    }

    /// Scalar statistics keyed by name, including the sample size `n`
    pub fn stats(&self) -> BTreeMap<&'static str, f64> {
        let mut stats = BTreeMap::new();
        stats.insert("n", self.sample_size as f64);
        stats.insert("value", self.value);
        self.auxiliary.scalar_stats(&mut stats);
        stats
    }
}

impl fmt::Display for EffectSizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = match self.metric {
            MetricKind::PearsonR => "correlation",
            _ => "effect size",
        };
        write!(
            f,
            "{}: {:.3} ({} {}, alpha = {})",
            self.metric.display_name(),
            self.value,
            self.magnitude,
            noun,
            self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cohens_d_interpretation() {
        assert_eq!(interpret(MetricKind::CohensD, 0.1), Magnitude::Negligible);
        assert_eq!(interpret(MetricKind::CohensD, 0.3), Magnitude::Small);
        assert_eq!(interpret(MetricKind::CohensD, 0.6), Magnitude::Medium);
        assert_eq!(interpret(MetricKind::CohensD, 1.0), Magnitude::Large);
        assert_eq!(interpret(MetricKind::CohensD, -1.0), Magnitude::Large);
    }

    #[test]
    fn test_eta_squared_interpretation() {
        assert_eq!(interpret(MetricKind::EtaSquared, 0.005), Magnitude::Negligible);
        assert_eq!(interpret(MetricKind::EtaSquared, 0.01), Magnitude::Small);
        assert_eq!(interpret(MetricKind::EtaSquared, 0.1), Magnitude::Medium);
        assert_eq!(interpret(MetricKind::EtaSquared, 0.14), Magnitude::Large);
    }

    #[test]
    fn test_association_interpretation() {
        for metric in [MetricKind::CramersV, MetricKind::PearsonR] {
            assert_eq!(interpret(metric, 0.0), Magnitude::Negligible);
            assert_eq!(interpret(metric, 0.1), Magnitude::Small);
            assert_eq!(interpret(metric, -0.35), Magnitude::Medium);
            assert_eq!(interpret(metric, 0.5), Magnitude::Large);
        }
    }

    #[test]
    fn test_group_summary() {
        let summary = GroupSummary::from_values("G1", &[1.0, 2.0, 3.0]);
        assert_eq!(summary.n, 3);
        assert!((summary.mean - 2.0).abs() < 1e-12);
        assert!((summary.std_dev.unwrap() - 1.0).abs() < 1e-12);

        let single = GroupSummary::from_values("G2", &[4.0]);
        assert_eq!(single.std_dev, None);
    }

    #[test]
    fn test_group_summary_large_values() {
        let summary = GroupSummary::from_values("G1", &[1e200, 2e200, 3e200]);
        let std_dev = summary.std_dev.unwrap();
        assert!(std_dev.is_finite());
        assert!((std_dev / 1e200 - 1.0).abs() < 1e-12);
        assert!((summary.mean / 2e200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_magnitude_order() {
        assert!(Magnitude::Negligible < Magnitude::Small);
        assert!(Magnitude::Small < Magnitude::Medium);
        assert!(Magnitude::Medium < Magnitude::Large);
    }

    fn pearson_estimate(value: f64) -> Estimate {
        Estimate {
            value,
            sample_size: 5,
            auxiliary: Auxiliary::PearsonR {
                pairs: vec![],
                mean_x: 3.0,
                mean_y: 6.0,
                slope: 2.0,
                intercept: 0.0,
                dof: 3,
            },
        }
    }

    #[test]
    fn test_result_display() {
        let result = EffectSizeResult::new(pearson_estimate(0.6), 0.05, "x", "y");
        let display = result.to_string();
        assert_eq!(display, "Pearson's r: 0.600 (large correlation, alpha = 0.05)");
    }

    #[test]
    fn test_result_stats() {
        let result = EffectSizeResult::new(pearson_estimate(0.2), 0.01, "x", "y");
        let stats = result.stats();
        assert_eq!(stats["n"], 5.0);
        assert_eq!(stats["slope"], 2.0);
        assert_eq!(stats["dof"], 3.0);
        assert_eq!(result.magnitude, Magnitude::Small);
        assert_eq!(result.metric, MetricKind::PearsonR);
    }
}
