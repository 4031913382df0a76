//! Pairwise-complete samples extracted from two columns
//!
//! Every metric works on rows where both columns hold a usable value; a row
//! missing on either side is dropped from both.

use crate::contingency::ContingencyTable;
use effect_core::{Column, Error, Result};
use std::collections::HashMap;

fn ensure_aligned(a: &Column, b: &Column) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::length_mismatch(a.len(), b.len()));
    }
    Ok(())
}

/// Cross-tabulate two categorical columns over pairwise-complete rows
pub fn crosstab(rows: &Column, columns: &Column) -> Result<ContingencyTable> {
    ensure_aligned(rows, columns)?;
    let pairs = rows
        .values()
        .iter()
        .zip(columns.values())
        .filter_map(|(r, c)| Some((r.category_label()?, c.category_label()?)));
    Ok(ContingencyTable::from_pairs(pairs).with_variables(rows.name(), columns.name()))
}

/// Numerical observations split into groups by a categorical column
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSample {
    grouping: String,
    measured: String,
    labels: Vec<String>,
    groups: Vec<Vec<f64>>,
}

impl GroupedSample {
    /// Group `measured` by `categories`, groups in first-encountered order
    pub fn from_columns(categories: &Column, measured: &Column) -> Result<Self> {
        ensure_aligned(categories, measured)?;

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut labels = Vec::new();
        let mut groups: Vec<Vec<f64>> = Vec::new();

        for (category, value) in categories.values().iter().zip(measured.values()) {
            let (Some(label), Some(x)) = (category.category_label(), value.as_number()) else {
                continue;
            };
            let g = *index.entry(label.to_string()).or_insert_with(|| {
                labels.push(label.to_string());
                groups.push(Vec::new());
                labels.len() - 1
            });
            groups[g].push(x);
        }

        Ok(Self {
            grouping: categories.name().to_string(),
            measured: measured.name().to_string(),
            labels,
            groups,
        })
    }

    /// Build from explicit labels and groups
    pub fn from_groups(labels: Vec<String>, groups: Vec<Vec<f64>>) -> Result<Self> {
        if labels.len() != groups.len() {
            return Err(Error::InvalidInput(format!(
                "{} group labels for {} groups",
                labels.len(),
                groups.len()
            )));
        }
        Ok(Self {
            grouping: "group".to_string(),
            measured: "value".to_string(),
            labels,
            groups,
        })
    }

    /// Name the grouping and measured variables used in error messages
    pub fn with_names(mut self, grouping: impl Into<String>, measured: impl Into<String>) -> Self {
        self.grouping = grouping.into();
        self.measured = measured.into();
        self
    }

    /// Name of the categorical column defining the groups
    pub fn grouping_name(&self) -> &str {
        &self.grouping
    }

    /// Name of the numerical column being compared
    pub fn measured_name(&self) -> &str {
        &self.measured
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn groups(&self) -> &[Vec<f64>] {
        &self.groups
    }

    /// Number of groups
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total observations across groups
    pub fn total(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Iterate over (label, observations)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.groups.iter().map(Vec::as_slice))
    }
}

/// Paired numerical observations
#[derive(Debug, Clone, PartialEq)]
pub struct PairedSample {
    names: (String, String),
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PairedSample {
    /// Keep rows where both columns hold a finite number
    pub fn from_columns(a: &Column, b: &Column) -> Result<Self> {
        ensure_aligned(a, b)?;
        let (x, y) = a
            .values()
            .iter()
            .zip(b.values())
            .filter_map(|(va, vb)| Some((va.as_number()?, vb.as_number()?)))
            .unzip();
        Ok(Self {
            names: (a.name().to_string(), b.name().to_string()),
            x,
            y,
        })
    }

    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::length_mismatch(x.len(), y.len()));
        }
        Ok(Self {
            names: ("x".to_string(), "y".to_string()),
            x,
            y,
        })
    }

    /// Name the two variables used in error messages
    pub fn with_names(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.names = (x.into(), y.into());
        self
    }

    pub fn x_name(&self) -> &str {
        &self.names.0
    }

    pub fn y_name(&self) -> &str {
        &self.names.1
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}
