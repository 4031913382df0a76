//! End-to-end analysis of two raw columns

use crate::classifier::{profile, ColumnProfile};
use crate::engine::EffectSizeEngine;
use crate::selector::select_metric;
use crate::types::EffectSizeResult;
use effect_core::{AnalysisConfig, Column, Error, Result, VariableKind};
use serde::Serialize;
use std::collections::HashSet;
use tracing::info;

/// Classification and result of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub profiles: (ColumnProfile, ColumnProfile),
    pub result: EffectSizeResult,
}

impl Analysis {
    pub fn kinds(&self) -> (VariableKind, VariableKind) {
        (self.profiles.0.kind, self.profiles.1.kind)
    }
}

/// Distinct categories among rows where the measured value is also usable
fn paired_category_count(categories: &Column, measured: &Column) -> usize {
    categories
        .values()
        .iter()
        .zip(measured.values())
        .filter(|(_, value)| value.as_number().is_some())
        .filter_map(|(category, _)| category.category_label())
        .collect::<HashSet<_>>()
        .len()
}

/// Classify both columns, select the metric and compute it
///
/// This is the whole pipeline from raw columns to an interpreted result.
/// The configuration is validated first.
pub fn analyze(a: &Column, b: &Column, config: &AnalysisConfig) -> Result<Analysis> {
    let engine = EffectSizeEngine::new(config.clone())?;
    if a.len() != b.len() {
        return Err(Error::length_mismatch(a.len(), b.len()));
    }

    let profile_a = profile(a)?;
    let profile_b = profile(b)?;

    let category_count = match (profile_a.kind, profile_b.kind) {
        (VariableKind::Categorical, VariableKind::Numerical) => Some(paired_category_count(a, b)),
        (VariableKind::Numerical, VariableKind::Categorical) => Some(paired_category_count(b, a)),
        _ => None,
    };
    if let Some(count) = category_count {
        if count < 2 {
            return Err(Error::insufficient(
                "categories among complete rows",
                2,
                count,
            ));
        }
    }

    let metric = select_metric(profile_a.kind, profile_b.kind, category_count)?;
    let result = engine.compute(a, b, profile_a.kind, profile_b.kind, metric)?;

    info!(
        column_a = a.name(),
        column_b = b.name(),
        %metric,
        value = result.value,
        magnitude = %result.magnitude,
        "analysis complete"
    );

    Ok(Analysis {
        profiles: (profile_a, profile_b),
        result,
    })
}
