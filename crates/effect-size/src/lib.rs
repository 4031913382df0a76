//! Effect size computation for pairs of dataset columns
//!
//! This crate turns two raw columns into a standardized effect size. It
//! classifies each column as categorical or numerical, picks the one metric
//! that fits the pairing, computes it and labels its magnitude.
//!
//! # Supported Effect Sizes
//!
//! | Columns | Metric | Range |
//! |---|---|---|
//! | categorical × categorical | **Cramér's V** | [0, 1] |
//! | categorical (2 groups) × numerical | **Cohen's d** | (−∞, ∞) |
//! | categorical (3+ groups) × numerical | **Eta squared (η²)** | [0, 1] |
//! | numerical × numerical | **Pearson's r** | [−1, 1] |
//!
//! Every metric uses pairwise-complete rows: a row missing a usable value in
//! either column is dropped from both.
//!
//! # Examples
//!
//! ## Full pipeline
//!
//! ```rust
//! use effect_core::{AnalysisConfig, Column, MetricKind};
//! use effect_size::{analyze, Magnitude};
//!
//! let groups = Column::new("group", vec!["G1", "G1", "G1", "G2", "G2", "G2"]);
//! let scores = Column::new("score", vec![1.0, 2.0, 3.0, 7.0, 8.0, 9.0]);
//!
//! let analysis = analyze(&groups, &scores, &AnalysisConfig::default()).unwrap();
//! assert_eq!(analysis.result.metric, MetricKind::CohensD);
//! assert_eq!(analysis.result.magnitude, Magnitude::Large);
//! println!("{}", analysis.result);
//! ```
//!
//! ## A single estimator
//!
//! ```rust
//! use effect_size::{EffectSizeEstimator, PairedSample, PearsonR};
//!
//! let sample = PairedSample::new(vec![1.0, 2.0, 3.0, 4.0], vec![2.0, 4.0, 6.0, 8.0]).unwrap();
//! let estimate = PearsonR::new().estimate(&sample).unwrap();
//! assert!((estimate.value - 1.0).abs() < 1e-10);
//! ```

mod analysis;
mod classifier;
mod cohen_d;
mod contingency;
mod correlation;
mod cramers_v;
mod engine;
mod samples;
mod selector;
mod traits;
mod types;
mod variance_explained;

// Re-exports
pub use analysis::{analyze, Analysis};
pub use classifier::{classify, profile, ColumnProfile};
pub use cohen_d::CohenD;
pub use contingency::ContingencyTable;
pub use correlation::PearsonR;
pub use cramers_v::CramersV;
pub use engine::{compute, EffectSizeEngine};
pub use samples::{crosstab, GroupedSample, PairedSample};
pub use selector::{is_compatible, select_metric, ETA_SQUARED_MIN_CATEGORIES};
pub use traits::EffectSizeEstimator;
pub use types::{
    interpret, thresholds, Auxiliary, EffectSizeResult, Estimate, GroupSummary, Magnitude,
};
pub use variance_explained::EtaSquared;

pub use effect_core::{Error, Result};
