use anyhow::{Context, Result};
use moka::future::Cache;
use predictor::Predictor;
use std::sync::Arc;
use std::time::Duration;

use crate::schemas::AppState;

/// Initialize application state from a model artifact path.
/// A model that fails to load is fatal; there is nothing to serve without it.
pub fn initialize_app_state_with_path(model_path: &str) -> Result<AppState> {
    tracing::info!("Loading model artifact: {}", model_path);
    let model = Predictor::load(model_path)
        .with_context(|| format!("Failed to load model artifact from {}", model_path))?;

    // Initialize cache for rendered charts and forecasts
    let cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(300)) // 5 minutes
        .build();

    Ok(AppState {
        model: Arc::new(model),
        cache,
    })
}
