use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use axum_valid::Valid;
use common::ForecastRequest;
use serde::Deserialize;
use tracing::{error, instrument};
use utoipa::ToSchema;

use crate::helpers::forecast::run_forecast;
use crate::schemas::{AppState, CachedData, ErrorResponse};

/// Chart flavors the dashboard can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Predicted vs average bar chart
    Comparison,
    /// Simulated monthly trend line
    Trend,
    /// Simulated feature correlation heatmap
    Heatmap,
}

/// Render one of the forecast charts as SVG
#[utoipa::path(
    post,
    path = "/api/v1/forecast/charts/{kind}",
    tag = "charts",
    params(
        ("kind" = String, Path, description = "Chart kind: comparison, trend or heatmap"),
    ),
    request_body = ForecastRequest,
    responses(
        (status = 200, description = "Chart rendered successfully", body = String, content_type = "image/svg+xml"),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Chart rendering failed", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn render_chart(
    Path(kind): Path<ChartKind>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<ForecastRequest>>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    // Create cache key
    let cache_key = format!("chart_{:?}_{:?}", kind, request);

    // Check cache first
    if let Some(CachedData::Chart(svg)) = state.cache.get(&cache_key).await {
        return Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg));
    }

    let forecast = run_forecast(state.model.as_ref(), &request);

    let rendered = match kind {
        ChartKind::Comparison => report::comparison_chart(
            forecast.predicted_weekly_sales,
            request.store_avg_sales,
        ),
        ChartKind::Trend => {
            report::trend_chart(forecast.predicted_weekly_sales, request.store_avg_sales)
        }
        ChartKind::Heatmap => report::heatmap_chart(request.store),
    };

    match rendered {
        Ok(svg) => {
            // Cache the result
            state
                .cache
                .insert(cache_key, CachedData::Chart(svg.clone()))
                .await;
            Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
        }
        Err(e) => {
            error!("Failed to render {:?} chart: {}", kind, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to render chart".to_string(),
                    code: "CHART_ERROR".to_string(),
                    success: false,
                }),
            ))
        }
    }
}
