//! Plot specification records handed to rendering collaborators

use effect_core::{MetricKind, PlotStyle, VariableKind};
use effect_size::ContingencyTable;
use serde::Serialize;
use std::fmt;

/// Grid size used for hexbin plots
pub const HEXBIN_GRID_SIZE: u32 = 20;

/// A selected column together with its classified kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRef {
    pub name: String,
    pub kind: VariableKind,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>, kind: VariableKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn categorical(name: impl Into<String>) -> Self {
        Self::new(name, VariableKind::Categorical)
    }

    pub fn numerical(name: impl Into<String>) -> Self {
        Self::new(name, VariableKind::Numerical)
    }
}

/// Concrete chart to draw
///
/// Same as [`PlotStyle`] except that bar charts come in stacked and
/// grouped variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Heatmap,
    StackedBar,
    GroupedBar,
    Box,
    Violin,
    Strip,
    Scatter,
    Regression,
    Hexbin,
}

impl ChartKind {
    pub fn from_style(style: PlotStyle, stacked: bool) -> Self {
        match style {
            PlotStyle::Heatmap => Self::Heatmap,
            PlotStyle::Bar if stacked => Self::StackedBar,
            PlotStyle::Bar => Self::GroupedBar,
            PlotStyle::Box => Self::Box,
            PlotStyle::Violin => Self::Violin,
            PlotStyle::Strip => Self::Strip,
            PlotStyle::Scatter => Self::Scatter,
            PlotStyle::Regression => Self::Regression,
            PlotStyle::Hexbin => Self::Hexbin,
        }
    }

    pub fn style(&self) -> PlotStyle {
        match self {
            Self::Heatmap => PlotStyle::Heatmap,
            Self::StackedBar | Self::GroupedBar => PlotStyle::Bar,
            Self::Box => PlotStyle::Box,
            Self::Violin => PlotStyle::Violin,
            Self::Strip => PlotStyle::Strip,
            Self::Scatter => PlotStyle::Scatter,
            Self::Regression => PlotStyle::Regression,
            Self::Hexbin => PlotStyle::Hexbin,
        }
    }

    /// Menu label, e.g. "Stacked Bar Chart"
    pub fn label(&self) -> &'static str {
        match self {
            Self::StackedBar => "Stacked Bar Chart",
            Self::GroupedBar => "Grouped Bar Chart",
            other => other.style().label(),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One plot axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Axis {
    pub label: String,
    /// Column plotted along this axis; `None` for derived quantities such as counts
    pub column: Option<String>,
}

impl Axis {
    pub fn column(name: &str) -> Self {
        Self {
            label: name.to_string(),
            column: Some(name.to_string()),
        }
    }

    pub fn derived(label: &str) -> Self {
        Self {
            label: label.to_string(),
            column: None,
        }
    }
}

/// Drawing options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlotOptions {
    /// Overlay a least-squares line
    pub regression_line: bool,
    /// Stack bars instead of grouping them
    pub stacked: bool,
    /// Write counts into heatmap cells
    pub annotate: bool,
    pub hexbin_grid_size: Option<u32>,
}

/// Least-squares line of y on x
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Data a renderer needs, selected from a computed result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlotData {
    Contingency(ContingencyTable),
    Groups {
        labels: Vec<String>,
        values: Vec<Vec<f64>>,
    },
    Pairs {
        pairs: Vec<(f64, f64)>,
        /// Correlation coefficient for annotation
        r: f64,
        fit: Option<LineFit>,
    },
}

/// Everything a renderer needs to draw one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSpec {
    pub metric: MetricKind,
    pub chart: ChartKind,
    pub title: String,
    pub x: Axis,
    pub y: Axis,
    pub options: PlotOptions,
    pub data: Option<PlotData>,
}

impl PlotSpec {
    pub fn style(&self) -> PlotStyle {
        self.chart.style()
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }
}
