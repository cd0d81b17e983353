//! Simulated series backing the illustrative charts. The dashboard has no
//! historical data source, so the trend and heatmap are generated around the
//! submitted figures. Sampling is seeded per store so identical requests
//! produce identical charts and cached renders stay valid.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Variables shown on the correlation heatmap, in axis order.
pub const HEATMAP_VARIABLES: [&str; 5] =
    ["Temperature", "Fuel Price", "CPI", "Unemployment", "Weekly Sales"];

/// Number of simulated observations behind the heatmap.
pub const HEATMAP_SAMPLES: usize = 10;

/// Twelve monthly sales values following a seasonal swing around the store
/// average, with the final month replaced by the actual prediction.
pub fn monthly_trend(store_avg_sales: f64, prediction: f64) -> Vec<(u32, f64)> {
    let mut points: Vec<(u32, f64)> = (1..=12)
        .map(|month| {
            let seasonal = 0.9 + (month as f64 / 2.0).sin() / 10.0;
            (month, store_avg_sales * seasonal)
        })
        .collect();

    if let Some(last) = points.last_mut() {
        last.1 = prediction;
    }
    points
}

/// Draw uniform samples for the five heatmap variables, seeded by store id.
pub fn simulated_feature_samples(store: u32) -> Vec<[f64; 5]> {
    let mut rng = StdRng::seed_from_u64(store as u64);
    (0..HEATMAP_SAMPLES)
        .map(|_| {
            [
                rng.gen_range(40.0..90.0),
                rng.gen_range(2.0..4.0),
                rng.gen_range(150.0..230.0),
                rng.gen_range(5.0..10.0),
                rng.gen_range(500_000.0..2_000_000.0),
            ]
        })
        .collect()
}

/// Pearson correlation matrix of the sample columns.
pub fn correlation_matrix(samples: &[[f64; 5]]) -> [[f64; 5]; 5] {
    let n = samples.len() as f64;
    let mut means = [0.0f64; 5];
    for sample in samples {
        for (mean, value) in means.iter_mut().zip(sample) {
            *mean += value / n;
        }
    }

    let mut matrix = [[0.0f64; 5]; 5];
    for i in 0..5 {
        for j in 0..5 {
            let mut covariance = 0.0;
            let mut variance_i = 0.0;
            let mut variance_j = 0.0;
            for sample in samples {
                let di = sample[i] - means[i];
                let dj = sample[j] - means[j];
                covariance += di * dj;
                variance_i += di * di;
                variance_j += dj * dj;
            }
            let denominator = (variance_i * variance_j).sqrt();
            matrix[i][j] = if i == j {
                1.0
            } else if denominator > 0.0 {
                covariance / denominator
            } else {
                0.0
            };
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_has_twelve_points_ending_at_prediction() {
        let points = monthly_trend(1_000_000.0, 1_234_567.0);
        assert_eq!(points.len(), 12);
        assert_eq!(points.first().unwrap().0, 1);
        assert_eq!(points.last().unwrap().0, 12);
        assert_eq!(points.last().unwrap().1, 1_234_567.0);
    }

    #[test]
    fn test_trend_follows_seasonal_formula() {
        let points = monthly_trend(1_000_000.0, 500_000.0);
        let expected_march = 1_000_000.0 * (0.9 + (3.0f64 / 2.0).sin() / 10.0);
        assert!((points[2].1 - expected_march).abs() < 1e-6);
    }

    #[test]
    fn test_samples_are_deterministic_per_store() {
        let first = simulated_feature_samples(7);
        let second = simulated_feature_samples(7);
        assert_eq!(first, second);

        let other_store = simulated_feature_samples(8);
        assert_ne!(first, other_store);
    }

    #[test]
    fn test_samples_respect_variable_ranges() {
        for sample in simulated_feature_samples(1) {
            assert!(sample[0] >= 40.0 && sample[0] < 90.0);
            assert!(sample[1] >= 2.0 && sample[1] < 4.0);
            assert!(sample[2] >= 150.0 && sample[2] < 230.0);
            assert!(sample[3] >= 5.0 && sample[3] < 10.0);
            assert!(sample[4] >= 500_000.0 && sample[4] < 2_000_000.0);
        }
    }

    #[test]
    fn test_correlation_matrix_is_symmetric_with_unit_diagonal() {
        let samples = simulated_feature_samples(3);
        let matrix = correlation_matrix(&samples);
        for i in 0..5 {
            assert_eq!(matrix[i][i], 1.0);
            for j in 0..5 {
                assert!((matrix[i][j] - matrix[j][i]).abs() < 1e-9);
                assert!(matrix[i][j] >= -1.0 - 1e-9 && matrix[i][j] <= 1.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_correlation_of_constant_column_is_zero() {
        let samples = vec![[1.0, 5.0, 2.0, 3.0, 4.0], [2.0, 5.0, 1.0, 6.0, 8.0]];
        let matrix = correlation_matrix(&samples);
        // Column 1 has no variance; off-diagonal correlations collapse to zero.
        assert_eq!(matrix[0][1], 0.0);
        assert_eq!(matrix[1][1], 1.0);
    }
}
