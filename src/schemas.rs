use common::{ForecastRequest, ForecastResponse, ModelInfo, SalesOutlook};
use moka::future::Cache;
use predictor::WeeklySalesModel;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// The pre-trained model, loaded once at startup and read-only afterwards
    pub model: Arc<dyn WeeklySalesModel>,
    /// Cache for expensive render operations
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Forecast(ForecastResponse),
    Chart(String),
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Identity of the loaded model artifact
    pub model: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::forecast::create_forecast,
        crate::handlers::charts::render_chart,
        crate::handlers::report::download_report,
    ),
    components(
        schemas(
            ApiResponse<ForecastResponse>,
            ErrorResponse,
            HealthResponse,
            ForecastRequest,
            ForecastResponse,
            SalesOutlook,
            ModelInfo,
            crate::handlers::charts::ChartKind,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "forecast", description = "Weekly sales forecast endpoints"),
        (name = "charts", description = "Forecast chart rendering endpoints"),
        (name = "report", description = "PDF report endpoints"),
    ),
    info(
        title = "Storecast API",
        description = "Weekly retail sales forecasting dashboard - predictions, charts and PDF reports from a pre-trained model",
        version = "0.1.0",
        contact(
            name = "Storecast Team",
            email = "contact@storecast.dev"
        ),
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
