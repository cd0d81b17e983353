use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use axum_valid::Valid;
use chrono::Utc;
use common::ForecastRequest;
use report::{render_report, report_filename};
use tracing::{error, info, instrument};

use crate::helpers::forecast::{report_context, run_forecast};
use crate::schemas::{AppState, ErrorResponse};

/// Render the two-page forecast report and offer it as a download
#[utoipa::path(
    post,
    path = "/api/v1/forecast/report",
    tag = "report",
    request_body = ForecastRequest,
    responses(
        (status = 200, description = "PDF report rendered successfully", body = Vec<u8>, content_type = "application/pdf"),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Report rendering failed", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn download_report(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<ForecastRequest>>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let forecast = run_forecast(state.model.as_ref(), &request);
    let context = report_context(&request, &forecast, Utc::now().date_naive());

    match render_report(&context) {
        Ok(bytes) => {
            info!(
                "Rendered report for store {} ({} bytes)",
                request.store,
                bytes.len()
            );
            let disposition = format!(
                "attachment; filename=\"{}\"",
                report_filename(request.store)
            );
            Ok((
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            ))
        }
        Err(e) => {
            error!("Failed to render report for store {}: {}", request.store, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to render report".to_string(),
                    code: "REPORT_ERROR".to_string(),
                    success: false,
                }),
            ))
        }
    }
}
