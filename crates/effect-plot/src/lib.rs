//! Plot specifications for effect size results
//!
//! Each metric offers a small family of plot styles. This crate validates a
//! requested style, lays out titles and axes, and selects the data a
//! renderer needs from an [`effect_size::EffectSizeResult`]. Rendering and
//! export are left to implementations of [`PlotRenderer`].
//!
//! | Metric | Styles |
//! |---|---|
//! | Cramér's V | heatmap, bar (stacked or grouped) |
//! | Cohen's d, eta squared | box, violin, strip |
//! | Pearson's r | scatter, regression, hexbin |

mod builder;
mod render;
mod spec;

pub use builder::{build_plot_spec, validate_style, PlotSpecBuilder};
pub use render::{ExportFormat, NullPlotRenderer, PlotRenderer};
pub use spec::{
    Axis, ChartKind, ColumnRef, LineFit, PlotData, PlotOptions, PlotSpec, HEXBIN_GRID_SIZE,
};
