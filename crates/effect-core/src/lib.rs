//! Core types for effect size analysis
//!
//! This crate holds what every other effect-stats crate shares: the error
//! taxonomy, the tagged cell/column model handed over by data loaders, the
//! variable/metric/plot-style enumerations and the analysis configuration.
//!
//! # Example
//!
//! ```rust
//! use effect_core::{Column, MetricKind, PlotStyle, Value};
//!
//! let column = Column::from_raw("score", ["1.5", "NA", "2"]);
//! assert_eq!(column.values()[1], Value::Missing);
//!
//! let style: PlotStyle = "Hexbin Plot".parse().unwrap();
//! assert!(MetricKind::PearsonR.plot_styles().contains(&style));
//! ```

pub mod config;
pub mod error;
pub mod types;
pub mod value;

pub use config::{AnalysisConfig, DEFAULT_ALPHA};
pub use error::{Error, Result};
pub use types::{AnalysisFamily, MetricKind, PlotStyle, VariableKind};
pub use value::{Column, Value, MISSING_MARKERS};
