//! Plot specification builder
//!
//! The builder validates a plot style against the metric, lays out titles
//! and axes, and picks the parts of a computed result a renderer needs. It
//! never computes anything itself.

use crate::spec::{
    Axis, ChartKind, ColumnRef, LineFit, PlotData, PlotOptions, PlotSpec, HEXBIN_GRID_SIZE,
};
use effect_core::{AnalysisConfig, Error, MetricKind, PlotStyle, Result, VariableKind};
use effect_size::{is_compatible, Auxiliary, EffectSizeResult};
use tracing::debug;

/// Check that `style` is offered for `metric`
pub fn validate_style(metric: MetricKind, style: PlotStyle) -> Result<()> {
    if metric.plot_styles().contains(&style) {
        return Ok(());
    }
    let allowed = metric
        .plot_styles()
        .iter()
        .map(PlotStyle::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Err(Error::InvalidPlotStyle {
        style: style.to_string(),
        reason: format!(
            "not available for {} (expected one of: {allowed})",
            metric.display_name()
        ),
    })
}

/// Builder for [`PlotSpec`]
///
/// # Example
///
/// ```rust
/// use effect_core::{MetricKind, PlotStyle};
/// use effect_plot::{ChartKind, ColumnRef, PlotSpecBuilder};
///
/// let spec = PlotSpecBuilder::new(
///     MetricKind::CramersV,
///     PlotStyle::Bar,
///     ColumnRef::categorical("smoker"),
///     ColumnRef::categorical("region"),
/// )
/// .stacked(true)
/// .build()
/// .unwrap();
///
/// assert_eq!(spec.chart, ChartKind::StackedBar);
/// assert_eq!(spec.title, "smoker vs region");
/// assert_eq!(spec.y.label, "Count");
/// ```
#[derive(Debug, Clone)]
pub struct PlotSpecBuilder {
    metric: MetricKind,
    style: PlotStyle,
    column_a: ColumnRef,
    column_b: ColumnRef,
    stacked: bool,
    regression_line: bool,
    data: Option<PlotData>,
}

impl PlotSpecBuilder {
    pub fn new(
        metric: MetricKind,
        style: PlotStyle,
        column_a: ColumnRef,
        column_b: ColumnRef,
    ) -> Self {
        Self {
            metric,
            style,
            column_a,
            column_b,
            stacked: false,
            regression_line: false,
            data: None,
        }
    }

    /// Start from a menu label such as "Stacked Bar Chart" or "Hexbin Plot"
    pub fn from_label(
        metric: MetricKind,
        label: &str,
        column_a: ColumnRef,
        column_b: ColumnRef,
    ) -> Result<Self> {
        let style: PlotStyle = label.parse()?;
        let stacked = PlotStyle::is_stacked_label(label);
        Ok(Self::new(metric, style, column_a, column_b).stacked(stacked))
    }

    /// Stack bars (bar charts only)
    pub fn stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Overlay a regression line (scatter plots only)
    pub fn regression_line(mut self, enabled: bool) -> Self {
        self.regression_line = enabled;
        self
    }

    /// Take the bar and regression options from an analysis configuration
    pub fn with_config(self, config: &AnalysisConfig) -> Self {
        self.stacked(config.stacked_bars)
            .regression_line(config.regression_line)
    }

    /// Attach the data a renderer needs from a computed result
    ///
    /// The result must have been computed for the same metric and columns.
    pub fn with_result(mut self, result: &EffectSizeResult) -> Result<Self> {
        if result.metric != self.metric {
            return Err(Error::InvalidInput(format!(
                "Result holds {} but the plot was requested for {}",
                result.metric.display_name(),
                self.metric.display_name()
            )));
        }
        if result.column_a != self.column_a.name || result.column_b != self.column_b.name {
            return Err(Error::InvalidInput(format!(
                "Result was computed for '{}' and '{}', not '{}' and '{}'",
                result.column_a, result.column_b, self.column_a.name, self.column_b.name
            )));
        }
        self.data = Some(self.select_data(result));
        Ok(self)
    }

    fn wants_fit(&self) -> bool {
        match self.style {
            PlotStyle::Regression => true,
            PlotStyle::Scatter => self.regression_line,
            _ => false,
        }
    }

    fn select_data(&self, result: &EffectSizeResult) -> PlotData {
        match &result.auxiliary {
            Auxiliary::CramersV { table, .. } => PlotData::Contingency(table.clone()),
            Auxiliary::CohensD { first, second, .. } => PlotData::Groups {
                labels: vec![first.label.clone(), second.label.clone()],
                values: vec![first.values.clone(), second.values.clone()],
            },
            Auxiliary::EtaSquared { groups, .. } => PlotData::Groups {
                labels: groups.iter().map(|g| g.label.clone()).collect(),
                values: groups.iter().map(|g| g.values.clone()).collect(),
            },
            Auxiliary::PearsonR {
                pairs,
                slope,
                intercept,
                ..
            } => PlotData::Pairs {
                pairs: pairs.clone(),
                r: result.value,
                fit: self.wants_fit().then_some(LineFit {
                    slope: *slope,
                    intercept: *intercept,
                }),
            },
        }
    }

    /// Validate and lay out the plot
    pub fn build(self) -> Result<PlotSpec> {
        validate_style(self.metric, self.style)?;
        if !is_compatible(self.metric, self.column_a.kind, self.column_b.kind) {
            return Err(Error::UnsupportedPairing(format!(
                "{} cannot be plotted for {} and {} columns",
                self.metric.display_name(),
                self.column_a.kind,
                self.column_b.kind
            )));
        }

        let chart = ChartKind::from_style(self.style, self.stacked);
        let (a, b) = (self.column_a.name.as_str(), self.column_b.name.as_str());

        let (title, x, y) = match self.metric {
            MetricKind::CramersV => {
                let y = match chart {
                    ChartKind::Heatmap => Axis::column(b),
                    _ => Axis::derived("Count"),
                };
                (format!("{a} vs {b}"), Axis::column(a), y)
            }
            MetricKind::CohensD | MetricKind::EtaSquared => {
                let (category, measured) = match self.column_a.kind {
                    VariableKind::Categorical => (a, b),
                    VariableKind::Numerical => (b, a),
                };
                (
                    format!("{} of {measured} by {category}", chart.label()),
                    Axis::column(category),
                    Axis::column(measured),
                )
            }
            MetricKind::PearsonR => (
                format!("{} of {a} vs {b}", chart.label()),
                Axis::column(a),
                Axis::column(b),
            ),
        };

        let options = PlotOptions {
            regression_line: self.metric == MetricKind::PearsonR && self.wants_fit(),
            stacked: chart == ChartKind::StackedBar,
            annotate: chart == ChartKind::Heatmap,
            hexbin_grid_size: (chart == ChartKind::Hexbin).then_some(HEXBIN_GRID_SIZE),
        };

        debug!(metric = %self.metric, %chart, has_data = self.data.is_some(), "built plot spec");

        Ok(PlotSpec {
            metric: self.metric,
            chart,
            title,
            x,
            y,
            options,
            data: self.data,
        })
    }
}

/// Build a plot specification without data
pub fn build_plot_spec(
    metric: MetricKind,
    style: PlotStyle,
    column_a: ColumnRef,
    column_b: ColumnRef,
) -> Result<PlotSpec> {
    PlotSpecBuilder::new(metric, style, column_a, column_b).build()
}
