use crate::handlers::{
    charts::render_chart, dashboard::dashboard, forecast::create_forecast, health::health_check,
    report::download_report,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use axum_prometheus::PrometheusMetricLayer;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    Router::new()
        // Dashboard page
        .route("/", get(dashboard))
        // Health check
        .route("/health", get(health_check))
        // Forecast pipeline routes
        .route("/api/v1/forecast", post(create_forecast))
        .route("/api/v1/forecast/charts/:kind", post(render_chart))
        .route("/api/v1/forecast/report", post(download_report))
        // Prometheus metrics
        .route("/metrics", get(|| async move { metric_handle.render() }))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive())
                .layer(prometheus_layer),
        )
        .with_state(state)
}
