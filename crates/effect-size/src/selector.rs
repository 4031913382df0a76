//! Metric selection from a pair of variable kinds

use effect_core::{Error, MetricKind, Result, VariableKind};

/// Categories needed before a grouped comparison switches to eta squared
pub const ETA_SQUARED_MIN_CATEGORIES: usize = 3;

/// Pick the one metric permitted for two variable kinds
///
/// The pairing is order-independent. For a categorical/numerical pairing
/// `category_count` is the number of distinct categories in the categorical
/// column: exactly 2 selects Cohen's d, 3 or more selects eta squared.
pub fn select_metric(
    kind_a: VariableKind,
    kind_b: VariableKind,
    category_count: Option<usize>,
) -> Result<MetricKind> {
    use VariableKind::{Categorical, Numerical};

    match (kind_a, kind_b) {
        (Categorical, Categorical) => Ok(MetricKind::CramersV),
        (Numerical, Numerical) => Ok(MetricKind::PearsonR),
        (Categorical, Numerical) | (Numerical, Categorical) => match category_count {
            Some(2) => Ok(MetricKind::CohensD),
            Some(k) if k >= ETA_SQUARED_MIN_CATEGORIES => Ok(MetricKind::EtaSquared),
            Some(k) => Err(Error::UnsupportedPairing(format!(
                "categorical column has {k} categories, at least 2 are needed"
            ))),
            None => Err(Error::UnsupportedPairing(
                "category count is required for a categorical/numerical pairing".to_string(),
            )),
        },
    }
}

/// Whether `metric` is defined for the given kinds, in either order
pub fn is_compatible(metric: MetricKind, kind_a: VariableKind, kind_b: VariableKind) -> bool {
    use VariableKind::{Categorical, Numerical};

    match metric {
        MetricKind::CramersV => kind_a == Categorical && kind_b == Categorical,
        MetricKind::PearsonR => kind_a == Numerical && kind_b == Numerical,
        MetricKind::CohensD | MetricKind::EtaSquared => kind_a != kind_b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use VariableKind::{Categorical, Numerical};

    #[test]
    fn test_same_kind_pairings() {
        assert_eq!(select_metric(Categorical, Categorical, None).unwrap(), MetricKind::CramersV);
        assert_eq!(select_metric(Numerical, Numerical, None).unwrap(), MetricKind::PearsonR);
        // The count is irrelevant when kinds match
        assert_eq!(select_metric(Categorical, Categorical, Some(7)).unwrap(), MetricKind::CramersV);
    }

    #[test]
    fn test_category_count_boundary() {
        for (a, b) in [(Categorical, Numerical), (Numerical, Categorical)] {
            assert!(matches!(select_metric(a, b, Some(0)), Err(Error::UnsupportedPairing(_))));
            assert!(matches!(select_metric(a, b, Some(1)), Err(Error::UnsupportedPairing(_))));
            assert_eq!(select_metric(a, b, Some(2)).unwrap(), MetricKind::CohensD);
            assert_eq!(select_metric(a, b, Some(3)).unwrap(), MetricKind::EtaSquared);
            assert_eq!(select_metric(a, b, Some(10)).unwrap(), MetricKind::EtaSquared);
        }
    }

    #[test]
    fn test_missing_category_count() {
        assert!(matches!(
            select_metric(Numerical, Categorical, None),
            Err(Error::UnsupportedPairing(_))
        ));
    }

    #[test]
    fn test_compatibility() {
        assert!(is_compatible(MetricKind::CramersV, Categorical, Categorical));
        assert!(!is_compatible(MetricKind::CramersV, Categorical, Numerical));
        assert!(is_compatible(MetricKind::CohensD, Numerical, Categorical));
        assert!(is_compatible(MetricKind::EtaSquared, Categorical, Numerical));
        assert!(!is_compatible(MetricKind::EtaSquared, Numerical, Numerical));
        assert!(!is_compatible(MetricKind::PearsonR, Categorical, Categorical));
    }
}
