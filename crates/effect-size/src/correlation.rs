//! Correlation-based effect size between two numerical variables

use crate::samples::PairedSample;
use crate::types::{scale_of, Auxiliary, Estimate};
use crate::EffectSizeEstimator;
use effect_core::{Error, MetricKind, Result};
use statrs::statistics::Statistics;
use tracing::debug;

/// Pearson's product-moment correlation estimator
///
/// r = Σ(x - x̄)(y - ȳ) / sqrt(Σ(x - x̄)² · Σ(y - ȳ)²)
///
/// The least-squares line of y on x is reported alongside r so a
/// regression overlay can be drawn without refitting. Deviations are taken
/// relative to each side's largest magnitude, so any finite input gives a
/// finite r.
#[derive(Debug, Clone, Copy, Default)]
pub struct PearsonR;

impl PearsonR {
    /// Minimum number of complete pairs
    pub const MIN_PAIRS: usize = 3;

    pub fn new() -> Self {
        Self
    }
}

impl EffectSizeEstimator for PearsonR {
    type Input = PairedSample;

    fn metric(&self) -> MetricKind {
        MetricKind::PearsonR
    }

    fn estimate(&self, sample: &PairedSample) -> Result<Estimate> {
        let n = sample.len();
        if n < Self::MIN_PAIRS {
            return Err(Error::insufficient("Pearson's r", Self::MIN_PAIRS, n));
        }

        let (x, y) = (sample.x(), sample.y());
        let mean_x = x.iter().mean();
        let mean_y = y.iter().mean();

        let (scale_x, scale_y) = (scale_of(x), scale_of(y));

        let mut sxy = 0.0;
        let mut sxx = 0.0;
        let mut syy = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            let dx = (xi - mean_x) / scale_x;
            let dy = (yi - mean_y) / scale_y;
            sxy += dx * dy;
            sxx += dx * dx;
            syy += dy * dy;
        }

        if !(sxx > 0.0) {
            return Err(Error::degenerate(
                sample.x_name(),
                "zero variance among complete pairs",
            ));
        }
        if !(syy > 0.0) {
            return Err(Error::degenerate(
                sample.y_name(),
                "zero variance among complete pairs",
            ));
        }

        let r = (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0);
        let slope = sxy / sxx * (scale_y / scale_x);
        let intercept = mean_y - slope * mean_x;

        debug!(n, r, slope, intercept, "computed Pearson's r");

        Ok(Estimate {
            value: r,
            sample_size: n,
            auxiliary: Auxiliary::PearsonR {
                pairs: sample.pairs(),
                mean_x,
                mean_y,
                slope,
                intercept,
                dof: n - 2,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn paired(x: &[f64], y: &[f64]) -> PairedSample {
        PairedSample::new(x.to_vec(), y.to_vec()).unwrap()
    }

    #[test]
    fn test_pearson_correlation_basic() {
        let estimate = PearsonR::new()
            .estimate(&paired(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0]))
            .unwrap();

        assert_abs_diff_eq!(estimate.value, 1.0, epsilon = 1e-10);
        assert_eq!(estimate.sample_size, 5);
        match estimate.auxiliary {
            Auxiliary::PearsonR {
                slope,
                intercept,
                dof,
                ..
            } => {
                assert_abs_diff_eq!(slope, 2.0, epsilon = 1e-10);
                assert_abs_diff_eq!(intercept, 0.0, epsilon = 1e-10);
                assert_eq!(dof, 3);
            }
            _ => panic!("Wrong auxiliary type"),
        }
    }

    #[test]
    fn test_pearson_correlation_negative() {
        let x = [1.0, 4.0, 2.0, 8.0, 5.0];
        let neg: Vec<f64> = x.iter().map(|v| -v).collect();
        let estimate = PearsonR::new().estimate(&paired(&x, &neg)).unwrap();
        assert_abs_diff_eq!(estimate.value, -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_pearson_correlation_known_value() {
        // sxy = 8, sxx = 10, syy = 10 -> r = 0.8
        let estimate = PearsonR::new()
            .estimate(&paired(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 1.0, 4.0, 3.0, 5.0]))
            .unwrap();
        assert_abs_diff_eq!(estimate.value, 0.8, epsilon = 1e-10);
    }

    #[test]
    fn test_symmetric_in_arguments() {
        let x = [1.0, 3.0, 2.0, 7.0, 4.0, 6.0];
        let y = [2.0, 2.5, 1.0, 9.0, 3.0, 4.0];
        let forward = PearsonR::new().estimate(&paired(&x, &y)).unwrap();
        let backward = PearsonR::new().estimate(&paired(&y, &x)).unwrap();
        assert_abs_diff_eq!(forward.value, backward.value, epsilon = 1e-12);
    }

    #[test]
    fn test_too_few_pairs() {
        let err = PearsonR::new()
            .estimate(&paired(&[1.0, 2.0], &[3.0, 4.0]))
            .unwrap_err();
        assert!(matches!(err, Error::InsufficientData { expected: 3, actual: 2, .. }));
    }

    #[test]
    fn test_constant_side_is_degenerate() {
        let err = PearsonR::new()
            .estimate(&paired(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]).with_names("age", "charges"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Degenerate column 'charges': zero variance among complete pairs"
        );
    }

    #[test]
    fn test_large_values_stay_finite() {
        let x = [1e200, 2e200, 3e200, 4e200];
        let estimate = PearsonR::new()
            .estimate(&paired(&x, &[1.0, 2.0, 3.0, 4.0]))
            .unwrap();
        assert_abs_diff_eq!(estimate.value, 1.0, epsilon = 1e-10);
        match estimate.auxiliary {
            Auxiliary::PearsonR { slope, .. } => {
                assert_abs_diff_eq!(slope * 1e200, 1.0, epsilon = 1e-10);
            }
            _ => panic!("Wrong auxiliary type"),
        }

        let same = PearsonR::new().estimate(&paired(&x, &x)).unwrap();
        assert_abs_diff_eq!(same.value, 1.0, epsilon = 1e-10);
    }
}
