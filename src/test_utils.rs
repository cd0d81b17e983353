#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use moka::future::Cache;
    use predictor::Predictor;
    use std::sync::Arc;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Linear artifact with a bare intercept and no coefficients, so every
    /// request predicts exactly 1,150,000 and assertions stay exact.
    pub const TEST_MODEL_JSON: &str = r#"{
        "name": "test_model",
        "version": "0.0.1",
        "model": {
            "kind": "linear",
            "intercept": 1150000.0,
            "coefficients": {}
        }
    }"#;

    /// Create AppState for testing
    pub fn setup_test_app_state() -> AppState {
        let model = Predictor::from_json(TEST_MODEL_JSON).expect("Failed to compile test model");
        let cache = Cache::new(100);

        AppState {
            model: Arc::new(model),
            cache,
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// This function sets up a tracing subscriber that outputs logs to STDERR,
    /// which is useful for debugging tests. The log level is determined by the
    /// RUST_LOG environment variable, defaulting to WARN if not set.
    ///
    /// # Returns
    ///
    /// A guard that will clean up the subscriber when dropped.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        // Get log level from environment variable or default to WARN
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        // Initialize tracing for tests
        let _ = init_test_tracing();

        let state = setup_test_app_state();
        create_router(state)
    }
}
