//! Rendering interface
//!
//! This module defines the interface that renderers must implement to
//! draw and export plot specifications. Drawing itself lives outside this
//! workspace.

use crate::spec::PlotSpec;
use effect_core::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Image formats a plot can be exported to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Jpg,
    Pdf,
}

impl ExportFormat {
    /// Derive the format from a file extension (case-insensitive)
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "Cannot determine export format of '{}': no file extension",
                    path.display()
                ))
            })?;

        match extension.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "pdf" => Ok(Self::Pdf),
            other => Err(Error::InvalidInput(format!(
                "Unsupported export format '.{other}' (expected png, jpg or pdf)"
            ))),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Trait for drawing plot specifications
pub trait PlotRenderer {
    /// Draw the plot for on-screen preview
    fn render(&self, spec: &PlotSpec) -> Result<()>;

    /// Write the plot to `path` in the given format
    fn export(&self, spec: &PlotSpec, path: &Path, format: ExportFormat) -> Result<()>;

    /// Export with the format taken from the path's extension
    fn save(&self, spec: &PlotSpec, path: &Path) -> Result<ExportFormat> {
        let format = ExportFormat::from_path(path)?;
        self.export(spec, path, format)?;
        Ok(format)
    }
}

/// Null renderer that does nothing (for headless use)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPlotRenderer;

impl PlotRenderer for NullPlotRenderer {
    fn render(&self, _spec: &PlotSpec) -> Result<()> {
        Ok(())
    }

    fn export(&self, _spec: &PlotSpec, _path: &Path, _format: ExportFormat) -> Result<()> {
        Ok(())
    }
}
