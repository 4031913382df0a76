//! Cramér's V association between two categorical variables

use crate::contingency::ContingencyTable;
use crate::types::{Auxiliary, Estimate};
use crate::EffectSizeEstimator;
use effect_core::{Error, MetricKind, Result};
use tracing::debug;

/// Cramér's V effect size estimator
///
/// V = sqrt(χ² / (n · min(r - 1, c - 1)))
///
/// where χ² is Pearson's chi-square statistic of the r x c contingency
/// table and n its total count.
#[derive(Debug, Clone, Copy, Default)]
pub struct CramersV {
    /// Apply Yates' continuity correction when the table has one degree of freedom
    continuity_correction: bool,
}

impl CramersV {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_continuity_correction(mut self, enabled: bool) -> Self {
        self.continuity_correction = enabled;
        self
    }

    /// Pearson's chi-square statistic and the expected counts
    pub fn chi_square(&self, table: &ContingencyTable) -> Result<(f64, Vec<Vec<f64>>, bool)> {
        let expected = table.expected()?;
        let (rows, columns) = table.shape();
        let corrected = self.continuity_correction && rows == 2 && columns == 2;

        let chi_square: f64 = table
            .counts()
            .iter()
            .flatten()
            .zip(expected.iter().flatten())
            .map(|(&observed, &e)| {
                let mut diff = (observed as f64 - e).abs();
                if corrected {
                    diff = (diff - 0.5).max(0.0);
                }
                diff * diff / e
            })
            .sum();

        Ok((chi_square, expected, corrected))
    }
}

impl EffectSizeEstimator for CramersV {
    type Input = ContingencyTable;

    fn metric(&self) -> MetricKind {
        MetricKind::CramersV
    }

    fn estimate(&self, table: &ContingencyTable) -> Result<Estimate> {
        let n = table.total();
        if n == 0 {
            return Err(Error::insufficient("Cramér's V", 1, 0));
        }

        let (rows, columns) = table.shape();
        let (row_variable, column_variable) = table.variables();
        if rows < 2 {
            return Err(Error::degenerate(
                row_variable,
                "only one category remains after removing missing values",
            ));
        }
        if columns < 2 {
            return Err(Error::degenerate(
                column_variable,
                "only one category remains after removing missing values",
            ));
        }

        let (chi_square, expected, corrected) = self.chi_square(table)?;
        let min_dim = (rows - 1).min(columns - 1);
        let v = (chi_square / (n as f64 * min_dim as f64)).sqrt().clamp(0.0, 1.0);

        debug!(rows, columns, n, chi_square, v, "computed Cramér's V");

        Ok(Estimate {
            value: v,
            sample_size: n as usize,
            auxiliary: Auxiliary::CramersV {
                table: table.clone(),
                expected,
                chi_square,
                dof: (rows - 1) * (columns - 1),
                continuity_corrected: corrected,
            },
        })
    }
}
