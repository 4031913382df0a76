//! Column classification into categorical and numerical variables

use effect_core::{Column, Error, Result, Value, VariableKind};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// What classification saw in one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: VariableKind,
    pub non_missing: usize,
    pub missing: usize,
    /// Distinct numbers for numerical columns, distinct labels otherwise
    pub distinct: usize,
    /// Share of non-missing values that parse as finite numbers
    pub numeric_fraction: f64,
    /// How clear-cut the assigned kind is, in [0, 1]
    ///
    /// A categorical column where most values are numbers and a few are
    /// stray text scores close to zero.
    pub confidence: f64,
}

/// Profile a single column
///
/// A column is numerical iff every non-missing value parses as a finite
/// number. Fails when nothing is left after removing missing values, or
/// when fewer than two distinct values remain.
pub fn profile(column: &Column) -> Result<ColumnProfile> {
    let present: Vec<&Value> = column.present().collect();
    let non_missing = present.len();
    if non_missing == 0 {
        return Err(Error::insufficient(
            format!("column '{}'", column.name()),
            1,
            0,
        ));
    }

    let numbers: Vec<f64> = present.iter().filter_map(|v| v.as_number()).collect();
    let numeric_fraction = numbers.len() as f64 / non_missing as f64;

    let (kind, distinct) = if numbers.len() == non_missing {
        let distinct: HashSet<OrderedFloat<f64>> =
            numbers.iter().copied().map(OrderedFloat).collect();
        (VariableKind::Numerical, distinct.len())
    } else {
        let distinct: HashSet<_> = present.iter().filter_map(|v| v.category_label()).collect();
        (VariableKind::Categorical, distinct.len())
    };

    if distinct < 2 {
        return Err(Error::degenerate(
            column.name(),
            format!("{distinct} distinct value, at least 2 are needed"),
        ));
    }

    let confidence = match kind {
        VariableKind::Numerical => 1.0,
        VariableKind::Categorical => 1.0 - numeric_fraction,
    };

    debug!(
        column = column.name(),
        %kind,
        non_missing,
        distinct,
        numeric_fraction,
        "classified column"
    );

    Ok(ColumnProfile {
        name: column.name().to_string(),
        kind,
        non_missing,
        missing: column.missing_count(),
        distinct,
        numeric_fraction,
        confidence,
    })
}

/// Assign a variable kind to each of the two selected columns
pub fn classify(a: &Column, b: &Column) -> Result<(VariableKind, VariableKind)> {
    Ok((profile(a)?.kind, profile(b)?.kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_column() {
        let column = Column::new("score", vec![Some(1.0), None, Some(2.5), Some(1.0)]);
        let p = profile(&column).unwrap();
        assert_eq!(p.kind, VariableKind::Numerical);
        assert_eq!(p.non_missing, 3);
        assert_eq!(p.missing, 1);
        assert_eq!(p.distinct, 2);
        assert_eq!(p.confidence, 1.0);
    }

    #[test]
    fn test_numeric_text_counts_as_numeric() {
        let column = Column::from_raw("x", ["1", " 2.5 ", "NA", "3e2"]);
        assert_eq!(profile(&column).unwrap().kind, VariableKind::Numerical);
    }

    #[test]
    fn test_any_text_makes_column_categorical() {
        let column = Column::from_raw("x", ["1", "2", "3", "oops"]);
        let p = profile(&column).unwrap();
        assert_eq!(p.kind, VariableKind::Categorical);
        assert_eq!(p.distinct, 4);
        assert!((p.numeric_fraction - 0.75).abs() < 1e-12);
        assert!((p.confidence - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_number_and_numeric_text_share_a_category() {
        let column = Column::new(
            "mixed",
            vec![Value::from(1.0), Value::from("1"), Value::from("x"), Value::from("x")],
        );
        let p = profile(&column).unwrap();
        assert_eq!(p.kind, VariableKind::Categorical);
        assert_eq!(p.distinct, 2);
    }

    #[test]
    fn test_all_missing_is_insufficient() {
        let column = Column::from_raw("empty", ["", "NA", "null"]);
        assert!(matches!(
            profile(&column),
            Err(Error::InsufficientData { expected: 1, actual: 0, .. })
        ));
    }

    #[test]
    fn test_single_value_is_degenerate() {
        let numeric = Column::new("c", vec![4.0, 4.0, 4.0]);
        assert!(matches!(profile(&numeric), Err(Error::DegenerateColumn { .. })));

        let text = Column::new("g", vec!["A", "A"]);
        assert!(matches!(profile(&text), Err(Error::DegenerateColumn { .. })));
    }

    #[test]
    fn test_classify_pair() {
        let groups = Column::new("group", vec!["G1", "G1", "G2", "G2"]);
        let scores = Column::new("score", vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            classify(&groups, &scores).unwrap(),
            (VariableKind::Categorical, VariableKind::Numerical)
        );
        assert_eq!(
            classify(&scores, &groups).unwrap(),
            (VariableKind::Numerical, VariableKind::Categorical)
        );
    }

    #[test]
    fn test_classify_propagates_errors() {
        let good = Column::new("a", vec!["X", "Y"]);
        let bad = Column::new("b", vec![None::<f64>, None]);
        assert!(classify(&good, &bad).is_err());
        assert!(classify(&bad, &good).is_err());
    }
}
