//! Named column tables handed over by data loaders

use effect_core::{Column, Error, Result};
use serde::Serialize;
use std::collections::HashSet;

/// Rows shown by a default preview
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// First rows of a dataset, stringified for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Rows in the full dataset
    pub total_rows: usize,
}

impl Preview {
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.total_rows
    }
}

/// A table of equally long, uniquely named columns
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map_or(0, Column::len);

        let mut seen = HashSet::new();
        for column in &columns {
            if column.len() != row_count {
                return Err(Error::InvalidInput(format!(
                    "Column '{}' has {} rows, expected {row_count}",
                    column.name(),
                    column.len()
                )));
            }
            if !seen.insert(column.name()) {
                return Err(Error::InvalidInput(format!(
                    "Duplicate column name '{}'",
                    column.name()
                )));
            }
        }

        Ok(Self { columns, row_count })
    }

    /// Build from a header row and raw text records
    ///
    /// Cells go through [`effect_core::Value::from_raw`], so missing markers
    /// and numbers are normalized.
    pub fn from_records<H, R>(headers: H, records: R) -> Result<Self>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: AsRef<str>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

        for (line, record) in records.into_iter().enumerate() {
            let record: Vec<String> = record
                .into_iter()
                .map(|cell| cell.as_ref().to_string())
                .collect();
            if record.len() != headers.len() {
                return Err(Error::InvalidInput(format!(
                    "Record {} has {} fields, expected {}",
                    line + 1,
                    record.len(),
                    headers.len()
                )));
            }
            for (column, cell) in cells.iter_mut().zip(record) {
                column.push(cell);
            }
        }

        let columns = headers
            .into_iter()
            .zip(&cells)
            .map(|(name, column)| Column::from_raw(name, column.iter().map(String::as_str)))
            .collect();
        Self::new(columns)
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown column '{name}'")))
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The first `rows` rows; missing cells show as "NA"
    pub fn preview(&self, rows: usize) -> Preview {
        let shown = rows.min(self.row_count);
        Preview {
            headers: self.column_names().into_iter().map(str::to_string).collect(),
            rows: (0..shown)
                .map(|i| self.columns.iter().map(|c| c.values()[i].to_string()).collect())
                .collect(),
            total_rows: self.row_count,
        }
    }
}
