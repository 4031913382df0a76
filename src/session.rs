//! Explicit state machine for an interactive analysis session
//!
//! A presentation layer drives one [`Session`] per window: load a dataset,
//! preview it, pick two columns, calculate, then plot. Each step is only
//! accepted in the states listed on [`SessionState`]; the computation
//! itself stays stateless in `effect-size`.

use crate::dataset::{Dataset, Preview};
use effect_core::{AnalysisConfig, Error, PlotStyle, Result};
use effect_plot::{ColumnRef, ExportFormat, PlotRenderer, PlotSpec, PlotSpecBuilder};
use effect_size::{analyze, Analysis, EffectSizeResult};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Where a session is in the load → preview → configure → compute flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SessionState {
    NoFile,
    Loaded,
    Previewed,
    Configured,
    Computed,
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoFile => "no file",
            Self::Loaded => "loaded",
            Self::Previewed => "previewed",
            Self::Configured => "configured",
            Self::Computed => "computed",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two columns picked for analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub column_a: String,
    pub column_b: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    dataset: Option<Dataset>,
    selection: Option<Selection>,
    config: AnalysisConfig,
    analysis: Option<Analysis>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::NoFile,
            dataset: None,
            selection: None,
            config: AnalysisConfig::default(),
            analysis: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    pub fn result(&self) -> Option<&EffectSizeResult> {
        self.analysis.as_ref().map(|a| &a.result)
    }

    fn require(&self, minimum: SessionState, action: &str) -> Result<()> {
        if self.state < minimum {
            return Err(Error::InvalidState(format!(
                "Cannot {action} while the session is {}",
                self.state
            )));
        }
        Ok(())
    }

    fn transition(&mut self, next: SessionState) {
        debug!(from = %self.state, to = %next, "session transition");
        self.state = next;
    }

    /// Replace the dataset; any earlier selection and result are discarded
    pub fn load(&mut self, dataset: Dataset) {
        info!(
            columns = dataset.column_count(),
            rows = dataset.row_count(),
            "dataset loaded"
        );
        self.dataset = Some(dataset);
        self.selection = None;
        self.analysis = None;
        self.transition(SessionState::Loaded);
    }

    /// Show the first `rows` rows of the loaded dataset
    pub fn preview(&mut self, rows: usize) -> Result<Preview> {
        self.require(SessionState::Loaded, "preview")?;
        let dataset = self
            .dataset
            .as_ref()
            .ok_or_else(|| Error::InvalidState("No file loaded".to_string()))?;
        let preview = dataset.preview(rows);
        if self.state == SessionState::Loaded {
            self.transition(SessionState::Previewed);
        }
        Ok(preview)
    }

    /// Select two distinct columns and the analysis options
    pub fn configure(
        &mut self,
        column_a: &str,
        column_b: &str,
        config: AnalysisConfig,
    ) -> Result<()> {
        self.require(SessionState::Previewed, "select columns")?;
        if column_a == column_b {
            return Err(Error::InvalidInput(
                "Please select two different columns".to_string(),
            ));
        }
        let dataset = self
            .dataset
            .as_ref()
            .ok_or_else(|| Error::InvalidState("No file loaded".to_string()))?;
        dataset.column(column_a)?;
        dataset.column(column_b)?;
        config.validate()?;

        self.selection = Some(Selection {
            column_a: column_a.to_string(),
            column_b: column_b.to_string(),
        });
        self.config = config;
        self.analysis = None;
        self.transition(SessionState::Configured);
        Ok(())
    }

    /// Run the analysis for the current selection
    ///
    /// A failed calculation leaves the session configured so the user can
    /// change the selection and retry.
    pub fn calculate(&mut self) -> Result<&EffectSizeResult> {
        self.require(SessionState::Configured, "calculate")?;
        let (Some(dataset), Some(selection)) = (&self.dataset, &self.selection) else {
            return Err(Error::InvalidState("No columns selected".to_string()));
        };

        let a = dataset.column(&selection.column_a)?;
        let b = dataset.column(&selection.column_b)?;
        let analysis = match analyze(a, b, &self.config) {
            Ok(analysis) => analysis,
            Err(err) => {
                self.analysis = None;
                self.transition(SessionState::Configured);
                return Err(err);
            }
        };

        self.transition(SessionState::Computed);
        Ok(&self.analysis.insert(analysis).result)
    }

    /// Plot specification for the current result
    ///
    /// Uses `style` if given, then the configured style, then the first
    /// style offered for the metric.
    pub fn plot_spec(&self, style: Option<PlotStyle>) -> Result<PlotSpec> {
        self.require(SessionState::Computed, "plot")?;
        let analysis = self
            .analysis
            .as_ref()
            .ok_or_else(|| Error::InvalidState("Nothing has been calculated".to_string()))?;

        let result = &analysis.result;
        let style = match style.or(self.config.plot_style) {
            Some(style) => style,
            None => result
                .metric
                .plot_styles()
                .first()
                .copied()
                .ok_or_else(|| Error::InvalidState("No plot styles available".to_string()))?,
        };
        let (kind_a, kind_b) = analysis.kinds();

        PlotSpecBuilder::new(
            result.metric,
            style,
            ColumnRef::new(result.column_a.clone(), kind_a),
            ColumnRef::new(result.column_b.clone(), kind_b),
        )
        .with_config(&self.config)
        .with_result(result)?
        .build()
    }

    /// Build the plot and hand it to a renderer for preview
    pub fn render_plot<R: PlotRenderer>(
        &self,
        renderer: &R,
        style: Option<PlotStyle>,
    ) -> Result<PlotSpec> {
        let spec = self.plot_spec(style)?;
        renderer.render(&spec)?;
        Ok(spec)
    }

    /// Build the plot and export it, the format following the file extension
    pub fn save_plot<R: PlotRenderer>(
        &self,
        renderer: &R,
        style: Option<PlotStyle>,
        path: &Path,
    ) -> Result<ExportFormat> {
        let format = ExportFormat::from_path(path)?;
        let spec = self.plot_spec(style)?;
        renderer.export(&spec, path, format)?;
        info!(path = %path.display(), %format, "plot exported");
        Ok(format)
    }
}
