//! Contingency tables of category co-occurrence counts

use effect_core::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Cross-tabulated counts of two categorical variables
///
/// Rows and columns follow the order in which each category is first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContingencyTable {
    /// Column whose categories form the rows
    row_variable: String,
    /// Column whose categories form the columns
    column_variable: String,
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    counts: Vec<Vec<u64>>,
}

impl ContingencyTable {
    /// Cross-tabulate (row category, column category) observations
    pub fn from_pairs<I, R, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (R, C)>,
        R: AsRef<str>,
        C: AsRef<str>,
    {
        let mut row_index: HashMap<String, usize> = HashMap::new();
        let mut column_index: HashMap<String, usize> = HashMap::new();
        let mut row_labels = Vec::new();
        let mut column_labels = Vec::new();
        let mut counts: Vec<Vec<u64>> = Vec::new();

        for (row, column) in pairs {
            let r = *row_index.entry(row.as_ref().to_string()).or_insert_with(|| {
                row_labels.push(row.as_ref().to_string());
                counts.push(vec![0; column_labels.len()]);
                row_labels.len() - 1
            });
            let c = *column_index
                .entry(column.as_ref().to_string())
                .or_insert_with(|| {
                    column_labels.push(column.as_ref().to_string());
                    for row_counts in counts.iter_mut() {
                        row_counts.push(0);
                    }
                    column_labels.len() - 1
                });
            counts[r][c] += 1;
        }

        Self {
            row_variable: "rows".to_string(),
            column_variable: "columns".to_string(),
            row_labels,
            column_labels,
            counts,
        }
    }

    /// Build a table from explicit labels and counts
    pub fn from_counts(
        row_labels: Vec<String>,
        column_labels: Vec<String>,
        counts: Vec<Vec<u64>>,
    ) -> Result<Self> {
        if counts.len() != row_labels.len()
            || counts.iter().any(|row| row.len() != column_labels.len())
        {
            return Err(Error::InvalidInput(format!(
                "Contingency counts must be {}x{}",
                row_labels.len(),
                column_labels.len()
            )));
        }
        Ok(Self {
            row_variable: "rows".to_string(),
            column_variable: "columns".to_string(),
            row_labels,
            column_labels,
            counts,
        })
    }

    /// Name the variables behind the rows and columns
    pub fn with_variables(mut self, rows: impl Into<String>, columns: impl Into<String>) -> Self {
        self.row_variable = rows.into();
        self.column_variable = columns.into();
        self
    }

    /// (row variable, column variable)
    pub fn variables(&self) -> (&str, &str) {
        (&self.row_variable, &self.column_variable)
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    pub fn counts(&self) -> &[Vec<u64>] {
        &self.counts
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.row_labels.len(), self.column_labels.len())
    }

    pub fn row_totals(&self) -> Vec<u64> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    pub fn column_totals(&self) -> Vec<u64> {
        (0..self.column_labels.len())
            .map(|c| self.counts.iter().map(|row| row[c]).sum())
            .collect()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Counts expected under independence: row total * column total / n
    ///
    /// Fails with `ZeroVariance` if any marginal total is zero.
    pub fn expected(&self) -> Result<Vec<Vec<f64>>> {
        let row_totals = self.row_totals();
        let column_totals = self.column_totals();

        if let Some(r) = row_totals.iter().position(|&t| t == 0) {
            return Err(Error::ZeroVariance(format!(
                "row '{}' of the contingency table has a zero total",
                self.row_labels[r]
            )));
        }
        if let Some(c) = column_totals.iter().position(|&t| t == 0) {
            return Err(Error::ZeroVariance(format!(
                "column '{}' of the contingency table has a zero total",
                self.column_labels[c]
            )));
        }

        let n = self.total() as f64;
        Ok(row_totals
            .iter()
            .map(|&rt| {
                column_totals
                    .iter()
                    .map(|&ct| rt as f64 * ct as f64 / n)
                    .collect()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_encountered_order() {
        let table = ContingencyTable::from_pairs([("B", "Y"), ("A", "X"), ("B", "X"), ("A", "X")]);
        assert_eq!(table.row_labels(), &["B".to_string(), "A".to_string()]);
        assert_eq!(table.column_labels(), &["Y".to_string(), "X".to_string()]);
        assert_eq!(table.counts(), &[vec![1, 1], vec![0, 2]]);
        assert_eq!(table.shape(), (2, 2));
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_marginals_and_expected() {
        let table = ContingencyTable::from_pairs([("A", "X"), ("A", "Y"), ("B", "X"), ("B", "Y")]);
        assert_eq!(table.row_totals(), vec![2, 2]);
        assert_eq!(table.column_totals(), vec![2, 2]);
        assert_eq!(table.expected().unwrap(), vec![vec![1.0, 1.0], vec![1.0, 1.0]]);
    }

    #[test]
    fn test_zero_marginal_is_rejected() {
        let table = ContingencyTable::from_counts(
            vec!["A".into(), "B".into()],
            vec!["X".into(), "Y".into()],
            vec![vec![3, 0], vec![2, 0]],
        )
        .unwrap();
        let err = table.expected().unwrap_err();
        assert!(matches!(err, Error::ZeroVariance(_)));
        assert!(err.to_string().contains("'Y'"));
    }

    #[test]
    fn test_from_counts_checks_shape() {
        let err = ContingencyTable::from_counts(
            vec!["A".into()],
            vec!["X".into(), "Y".into()],
            vec![vec![1]],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
