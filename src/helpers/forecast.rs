use chrono::NaiveDate;
use common::{ForecastRequest, ForecastResponse};
use predictor::{build_insight, WeeklySalesModel};
use report::ReportContext;

/// Run the predict -> delta -> narrative pipeline for one request.
/// Shared by the forecast, chart and report handlers and by the CLI.
pub fn run_forecast(model: &dyn WeeklySalesModel, request: &ForecastRequest) -> ForecastResponse {
    let prediction = model.predict(request);
    let insight = build_insight(request, prediction);
    let info = model.info();

    ForecastResponse {
        store: request.store,
        predicted_weekly_sales: prediction,
        store_avg_sales: request.store_avg_sales,
        delta_pct: insight.delta_pct,
        outlook: insight.outlook,
        summary: insight.summary,
        model_name: info.name.clone(),
        model_version: info.version.clone(),
    }
}

/// Assemble the renderer inputs for a completed forecast.
pub fn report_context(
    request: &ForecastRequest,
    forecast: &ForecastResponse,
    generated_on: NaiveDate,
) -> ReportContext {
    ReportContext {
        store: request.store,
        year: request.year,
        week: request.week,
        prediction: forecast.predicted_weekly_sales,
        store_avg_sales: request.store_avg_sales,
        delta_pct: forecast.delta_pct,
        summary: forecast.summary.clone(),
        generated_on,
    }
}
