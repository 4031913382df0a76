//! Property-based tests for the effect size estimators
//!
//! These check ranges, symmetries and the interpreter ordering over
//! randomly generated tables and samples.

use effect_core::MetricKind;
use effect_size::{
    interpret, CohenD, ContingencyTable, CramersV, EffectSizeEstimator, EtaSquared, GroupedSample,
    PairedSample, PearsonR,
};
use proptest::prelude::*;

fn labels(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}

fn table_from(counts: Vec<Vec<u64>>) -> ContingencyTable {
    let rows = labels("r", counts.len());
    let columns = labels("c", counts[0].len());
    ContingencyTable::from_counts(rows, columns, counts).unwrap()
}

fn positive_counts() -> impl Strategy<Value = Vec<Vec<u64>>> {
    (2usize..6, 2usize..6).prop_flat_map(|(rows, columns)| {
        prop::collection::vec(prop::collection::vec(1u64..50, columns), rows)
    })
}

proptest! {
    // Property: Cramér's V stays in [0, 1]
    #[test]
    fn prop_cramers_v_in_unit_interval(counts in positive_counts(), corrected in any::<bool>()) {
        let estimate = CramersV::new()
            .with_continuity_correction(corrected)
            .estimate(&table_from(counts))
            .unwrap();
        prop_assert!((0.0..=1.0).contains(&estimate.value));
    }

    // Property: a table that is the outer product of its marginals has no association
    #[test]
    fn prop_cramers_v_zero_for_independent_tables(
        row_weights in prop::collection::vec(1u64..6, 2..5),
        column_weights in prop::collection::vec(1u64..6, 2..5),
    ) {
        let counts = row_weights
            .iter()
            .map(|r| column_weights.iter().map(|c| r * c).collect())
            .collect();
        let estimate = CramersV::new().estimate(&table_from(counts)).unwrap();
        prop_assert!(estimate.value.abs() < 1e-6, "V = {}", estimate.value);
    }

    // Property: Pearson's r stays in [-1, 1] and r(x, x) = 1
    #[test]
    fn prop_pearson_bounds(pairs in prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 3..40)) {
        let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();

        if let Ok(estimate) = PearsonR::new().estimate(&PairedSample::new(x.clone(), y).unwrap()) {
            prop_assert!((-1.0..=1.0).contains(&estimate.value));
        }
        if let Ok(estimate) = PearsonR::new().estimate(&PairedSample::new(x.clone(), x).unwrap()) {
            prop_assert!((estimate.value - 1.0).abs() < 1e-9);
        }
    }

    // Property: swapping which group comes first negates Cohen's d
    #[test]
    fn prop_cohen_d_antisymmetric(
        first in prop::collection::vec(-50.0..50.0f64, 2..20),
        second in prop::collection::vec(-50.0..50.0f64, 2..20),
    ) {
        let forward = GroupedSample::from_groups(labels("g", 2), vec![first.clone(), second.clone()]).unwrap();
        let backward = GroupedSample::from_groups(labels("g", 2), vec![second, first]).unwrap();

        let (Ok(d1), Ok(d2)) = (CohenD::new().estimate(&forward), CohenD::new().estimate(&backward)) else {
            return Ok(());
        };
        prop_assert!((d1.value + d2.value).abs() < 1e-9);
        prop_assert_eq!(d1.sample_size, d2.sample_size);
    }

    // Property: eta squared stays in [0, 1]
    #[test]
    fn prop_eta_squared_in_unit_interval(
        groups in prop::collection::vec(prop::collection::vec(-50.0..50.0f64, 1..15), 2..6),
    ) {
        let sample = GroupedSample::from_groups(labels("g", groups.len()), groups).unwrap();
        if let Ok(estimate) = EtaSquared::new().estimate(&sample) {
            prop_assert!((0.0..=1.0).contains(&estimate.value));
        }
    }

    // Property: a larger absolute value never gets a weaker label
    #[test]
    fn prop_interpretation_monotonic(a in -2.0..2.0f64, b in -2.0..2.0f64) {
        let (low, high) = if a.abs() <= b.abs() { (a, b) } else { (b, a) };
        for metric in MetricKind::ALL {
            prop_assert!(interpret(metric, low) <= interpret(metric, high));
        }
    }
}
