use common::ForecastRequest;

/// Fixed feature order the model was trained against. Artifact coefficients
/// and tree splits reference features by these names.
pub const FEATURE_NAMES: [&str; 10] = [
    "store",
    "holiday_flag",
    "temperature",
    "fuel_price",
    "cpi",
    "unemployment",
    "month",
    "year",
    "week",
    "store_avg_sales",
];

/// Resolve a feature name to its position in the feature vector.
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_NAMES.iter().position(|&n| n == name)
}

/// Map a request to the model's feature vector. The holiday flag becomes
/// 1.0/0.0, everything else is a plain numeric widening.
pub fn feature_vector(request: &ForecastRequest) -> [f64; 10] {
    [
        request.store as f64,
        if request.holiday_flag { 1.0 } else { 0.0 },
        request.temperature,
        request.fuel_price,
        request.cpi,
        request.unemployment,
        request.month as f64,
        request.year as f64,
        request.week as f64,
        request.store_avg_sales,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> ForecastRequest {
        ForecastRequest {
            store: 7,
            holiday_flag: true,
            temperature: 88.5,
            fuel_price: 3.2,
            cpi: 190.0,
            unemployment: 6.1,
            month: 11,
            year: 2011,
            week: 47,
            store_avg_sales: 1_250_000.0,
        }
    }

    #[test]
    fn test_feature_index_matches_declared_order() {
        assert_eq!(feature_index("store"), Some(0));
        assert_eq!(feature_index("store_avg_sales"), Some(9));
        assert_eq!(feature_index("weekly_sales"), None);
    }

    #[test]
    fn test_feature_vector_layout() {
        let vector = feature_vector(&sample_request());
        assert_eq!(vector[0], 7.0);
        assert_eq!(vector[1], 1.0);
        assert_eq!(vector[2], 88.5);
        assert_eq!(vector[7], 2011.0);
        assert_eq!(vector[9], 1_250_000.0);
    }

    #[test]
    fn test_holiday_flag_encodes_as_zero_when_unset() {
        let mut request = sample_request();
        request.holiday_flag = false;
        assert_eq!(feature_vector(&request)[1], 0.0);
    }
}
