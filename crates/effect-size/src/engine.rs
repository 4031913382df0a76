//! Effect size computation for a classified column pair

use crate::cohen_d::CohenD;
use crate::correlation::PearsonR;
use crate::cramers_v::CramersV;
use crate::samples::{crosstab, GroupedSample, PairedSample};
use crate::selector::is_compatible;
use crate::types::{EffectSizeResult, Estimate};
use crate::variance_explained::EtaSquared;
use crate::EffectSizeEstimator;
use effect_core::{AnalysisConfig, Column, Error, MetricKind, Result, VariableKind};
use tracing::{debug, instrument};

/// Dispatches a metric to its estimator and assembles the result
///
/// The engine holds only configuration; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct EffectSizeEngine {
    config: AnalysisConfig,
}

impl EffectSizeEngine {
    /// Create an engine after validating the configuration
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Compute `metric` for columns `a` and `b` of the given kinds
    ///
    /// Rows missing a usable value in either column are dropped from both.
    /// For grouped metrics the categorical column defines the groups
    /// regardless of which side it was selected on.
    #[instrument(skip(self, a, b), fields(column_a = a.name(), column_b = b.name()))]
    pub fn compute(
        &self,
        a: &Column,
        b: &Column,
        kind_a: VariableKind,
        kind_b: VariableKind,
        metric: MetricKind,
    ) -> Result<EffectSizeResult> {
        if a.len() != b.len() {
            return Err(Error::length_mismatch(a.len(), b.len()));
        }
        if !is_compatible(metric, kind_a, kind_b) {
            return Err(Error::UnsupportedPairing(format!(
                "{} is not defined for {kind_a} and {kind_b} columns",
                metric.display_name()
            )));
        }

        let estimate = self.estimate(a, b, kind_a, metric)?;
        debug!(value = estimate.value, n = estimate.sample_size, "effect size computed");

        Ok(EffectSizeResult::new(
            estimate,
            self.config.alpha,
            a.name(),
            b.name(),
        ))
    }

    fn estimate(
        &self,
        a: &Column,
        b: &Column,
        kind_a: VariableKind,
        metric: MetricKind,
    ) -> Result<Estimate> {
        match metric {
            MetricKind::CramersV => {
                let table = crosstab(a, b)?;
                CramersV::new()
                    .with_continuity_correction(self.config.continuity_correction)
                    .estimate(&table)
            }
            MetricKind::CohensD | MetricKind::EtaSquared => {
                let (categories, measured) = match kind_a {
                    VariableKind::Categorical => (a, b),
                    VariableKind::Numerical => (b, a),
                };
                let sample = GroupedSample::from_columns(categories, measured)?;
                if metric == MetricKind::CohensD {
                    CohenD::new().estimate(&sample)
                } else {
                    EtaSquared::new().estimate(&sample)
                }
            }
            MetricKind::PearsonR => {
                let sample = PairedSample::from_columns(a, b)?;
                PearsonR::new().estimate(&sample)
            }
        }
    }
}

/// Compute with the default configuration
pub fn compute(
    a: &Column,
    b: &Column,
    kind_a: VariableKind,
    kind_b: VariableKind,
    metric: MetricKind,
) -> Result<EffectSizeResult> {
    EffectSizeEngine::default().compute(a, b, kind_a, kind_b, metric)
}
