//! Effect size analysis for pairs of dataset columns
//!
//! This crate re-exports the workspace crates and adds the pieces an
//! interactive front end needs around them: a named column table with a
//! preview, and an explicit session state machine.
//!
//! # Crates
//!
//! - [`effect_core`]: errors, the cell/column model, metric and plot-style enums, configuration
//! - [`effect_size`]: classification, metric selection, the four estimators, interpretation
//! - [`effect_plot`]: plot specifications and the renderer interface
//!
//! # Example
//!
//! ```rust
//! use effect_stats::{analyze, AnalysisConfig, Column, Magnitude, MetricKind};
//!
//! let x = Column::new("x", vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! let y = Column::new("y", vec![2.0, 4.0, 6.0, 8.0, 10.0]);
//!
//! let analysis = analyze(&x, &y, &AnalysisConfig::default()).unwrap();
//! assert_eq!(analysis.result.metric, MetricKind::PearsonR);
//! assert_eq!(analysis.result.magnitude, Magnitude::Large);
//! ```

pub mod dataset;
pub mod session;

pub use dataset::{Dataset, Preview, DEFAULT_PREVIEW_ROWS};
pub use session::{Selection, Session, SessionState};

// Re-export workspace crates
pub use effect_core;
pub use effect_plot;
pub use effect_size;

pub use effect_core::{
    AnalysisConfig, AnalysisFamily, Column, Error, MetricKind, PlotStyle, Result, Value,
    VariableKind,
};
pub use effect_plot::{
    build_plot_spec, ChartKind, ColumnRef, ExportFormat, NullPlotRenderer, PlotData,
    PlotRenderer, PlotSpec, PlotSpecBuilder,
};
pub use effect_size::{
    analyze, classify, compute, interpret, profile, select_metric, Analysis, Auxiliary,
    ColumnProfile, EffectSizeEngine, EffectSizeResult, Magnitude,
};
