//! Analysis configuration

use crate::{Error, PlotStyle, Result};
use serde::{Deserialize, Serialize};

/// Default significance threshold reported alongside results
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Options recognized by an analysis run
///
/// `alpha` only annotates results; nothing in this workspace computes a
/// p-value against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Significance threshold
    pub alpha: f64,
    /// Requested plot style, validated against the metric when a plot is built
    pub plot_style: Option<PlotStyle>,
    /// Overlay a regression line on scatter plots
    pub regression_line: bool,
    /// Stack bars instead of grouping them (bar plots only)
    pub stacked_bars: bool,
    /// Apply Yates' continuity correction to 2x2 contingency tables
    pub continuity_correction: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            plot_style: None,
            regression_line: false,
            stacked_bars: false,
            continuity_correction: false,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and validate a JSON configuration; absent fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_plot_style(mut self, style: PlotStyle) -> Self {
        self.plot_style = Some(style);
        self
    }

    pub fn with_regression_line(mut self, enabled: bool) -> Self {
        self.regression_line = enabled;
        self
    }

    pub fn with_stacked_bars(mut self, enabled: bool) -> Self {
        self.stacked_bars = enabled;
        self
    }

    pub fn with_continuity_correction(mut self, enabled: bool) -> Self {
        self.continuity_correction = enabled;
        self
    }

    /// Check that alpha lies strictly between 0 and 1
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "Significance (alpha) must be in (0, 1), got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}
