use axum::{extract::State, http::StatusCode, response::Json};
use axum_valid::Valid;
use common::{ForecastRequest, ForecastResponse};
use tracing::{info, instrument};

use crate::helpers::forecast::run_forecast;
use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse};

/// Predict weekly sales for one request
#[utoipa::path(
    post,
    path = "/api/v1/forecast",
    tag = "forecast",
    request_body = ForecastRequest,
    responses(
        (status = 200, description = "Forecast computed successfully", body = ApiResponse<ForecastResponse>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_forecast(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<ForecastRequest>>,
) -> Result<Json<ApiResponse<ForecastResponse>>, (StatusCode, Json<ErrorResponse>)> {
    // Create cache key
    let cache_key = format!("forecast_{:?}", request);

    // Check cache first
    if let Some(CachedData::Forecast(forecast)) = state.cache.get(&cache_key).await {
        let response = ApiResponse {
            data: forecast,
            message: "Forecast retrieved from cache".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    let forecast = run_forecast(state.model.as_ref(), &request);
    info!(
        "Predicted weekly sales for store {}: {:.2} ({:+.2}% vs average)",
        request.store, forecast.predicted_weekly_sales, forecast.delta_pct
    );

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Forecast(forecast.clone()))
        .await;

    let response = ApiResponse {
        data: forecast,
        message: "Forecast computed successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
