//! Variable kinds, effect size metrics and plot styles

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of variable a column holds, assigned once per analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableKind {
    Categorical,
    Numerical,
}

impl VariableKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Categorical => "categorical",
            Self::Numerical => "numerical",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The effect size metrics this workspace computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Association between two categorical variables
    CramersV,
    /// Standardized mean difference between two groups
    CohensD,
    /// Proportion of variance explained by group membership
    EtaSquared,
    /// Linear correlation between two numerical variables
    PearsonR,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        Self::CramersV,
        Self::CohensD,
        Self::EtaSquared,
        Self::PearsonR,
    ];

    /// Human-readable name used in result summaries
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CramersV => "Cramér's V",
            Self::CohensD => "Cohen's d",
            Self::EtaSquared => "Eta squared (η²)",
            Self::PearsonR => "Pearson's r",
        }
    }

    pub fn family(&self) -> AnalysisFamily {
        match self {
            Self::CramersV => AnalysisFamily::CategoricalOnCategorical,
            Self::CohensD | Self::EtaSquared => AnalysisFamily::CategoricalOnNumerical,
            Self::PearsonR => AnalysisFamily::NumericalCorrelation,
        }
    }

    /// Plot styles that can visualize this metric
    pub fn plot_styles(&self) -> &'static [PlotStyle] {
        self.family().plot_styles()
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Analysis family, determined by the pair of variable kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisFamily {
    CategoricalOnCategorical,
    CategoricalOnNumerical,
    NumericalCorrelation,
}

impl AnalysisFamily {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CategoricalOnCategorical => "Categorical on Categorical",
            Self::CategoricalOnNumerical => "Categorical on Numerical",
            Self::NumericalCorrelation => "Numerical Correlation",
        }
    }

    pub fn plot_styles(&self) -> &'static [PlotStyle] {
        match self {
            Self::CategoricalOnCategorical => &[PlotStyle::Heatmap, PlotStyle::Bar],
            Self::CategoricalOnNumerical => &[PlotStyle::Box, PlotStyle::Violin, PlotStyle::Strip],
            Self::NumericalCorrelation => {
                &[PlotStyle::Scatter, PlotStyle::Regression, PlotStyle::Hexbin]
            }
        }
    }
}

impl fmt::Display for AnalysisFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Plot styles offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotStyle {
    Heatmap,
    Bar,
    Box,
    Violin,
    Strip,
    Scatter,
    Regression,
    Hexbin,
}

impl PlotStyle {
    pub const ALL: [PlotStyle; 8] = [
        Self::Heatmap,
        Self::Bar,
        Self::Box,
        Self::Violin,
        Self::Strip,
        Self::Scatter,
        Self::Regression,
        Self::Hexbin,
    ];

    /// Short machine name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heatmap => "heatmap",
            Self::Bar => "bar",
            Self::Box => "box",
            Self::Violin => "violin",
            Self::Strip => "strip",
            Self::Scatter => "scatter",
            Self::Regression => "regression",
            Self::Hexbin => "hexbin",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Heatmap => "Heatmap",
            Self::Bar => "Bar Chart",
            Self::Box => "Box Plot",
            Self::Violin => "Violin Plot",
            Self::Strip => "Strip Plot",
            Self::Scatter => "Scatter Plot",
            Self::Regression => "Regression Plot",
            Self::Hexbin => "Hexbin Plot",
        }
    }

    /// Whether `label` names the stacked bar variant ("Stacked Bar Chart")
    pub fn is_stacked_label(label: &str) -> bool {
        label.trim().to_ascii_lowercase().starts_with("stacked")
    }
}

impl fmt::Display for PlotStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlotStyle {
    type Err = Error;

    /// Accepts short names ("hexbin") and menu labels ("Hexbin Plot",
    /// "Stacked Bar Chart", "Grouped Bar Chart")
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let stem = normalized
            .strip_suffix(" plot")
            .or_else(|| normalized.strip_suffix(" chart"))
            .unwrap_or(&normalized);
        let stem = stem
            .strip_prefix("stacked ")
            .or_else(|| stem.strip_prefix("grouped "))
            .unwrap_or(stem);

        Self::ALL
            .iter()
            .copied()
            .find(|style| style.as_str() == stem)
            .ok_or_else(|| Error::InvalidPlotStyle {
                style: s.to_string(),
                reason: "unknown plot style".to_string(),
            })
    }
}
