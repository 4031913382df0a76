//! Raw cell values and named columns
//!
//! A loading collaborator hands over cells as a tagged union: each cell is
//! missing, a number, or a piece of text. Classification works over this
//! union instead of inspecting runtime types.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Markers treated as missing by [`Value::from_raw`]
pub const MISSING_MARKERS: &[&str] = &["", "na", "n/a", "nan", "null", "none", "-"];

/// A single raw cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No observation
    Missing,
    /// Numeric cell
    Numeric(f64),
    /// Textual cell
    Text(String),
}

impl Value {
    /// Decode a raw textual cell, normalizing missing markers and numbers
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if MISSING_MARKERS
            .iter()
            .any(|marker| trimmed.eq_ignore_ascii_case(marker))
        {
            return Self::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => Self::Numeric(number),
            _ => Self::Text(trimmed.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The cell as a finite number, if it is one or parses as one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Missing => None,
            Self::Numeric(x) => x.is_finite().then_some(*x),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|x| x.is_finite()),
        }
    }

    /// The cell as a category label
    ///
    /// Numbers use their shortest display form, so `Numeric(1.0)` and
    /// `Text("1")` both label as `"1"` and fall into the same category.
    pub fn category_label(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Missing => None,
            Self::Numeric(x) => Some(Cow::Owned(x.to_string())),
            Self::Text(s) => Some(Cow::Borrowed(s.as_str())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "NA"),
            Self::Numeric(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        if x.is_nan() {
            Self::Missing
        } else {
            Self::Numeric(x)
        }
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Self::Numeric(x as f64)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Self::Numeric(f64::from(x))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// A named, ordered sequence of raw cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a column from raw text cells via [`Value::from_raw`]
    pub fn from_raw<'a, I>(name: impl Into<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            name: name.into(),
            values: cells.into_iter().map(Value::from_raw).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the non-missing cells
    pub fn present(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().filter(|v| !v.is_missing())
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }
}
