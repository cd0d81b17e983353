use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use tracing::info;
use validator::Validate;

use common::ForecastRequest;
use predictor::Predictor;
use report::{render_report, report_filename};

use crate::helpers::forecast::{report_context, run_forecast};

/// Inputs for a one-shot report render. Defaults match the dashboard's
/// initial widget values.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Path to the serialized model artifact
    #[arg(long, env = "MODEL_PATH", default_value = "assets/sales_model.json")]
    pub model_path: String,
    /// Output file (defaults to the store-named report filename)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Store identifier (1-50)
    #[arg(long, default_value_t = 1)]
    pub store: u32,
    /// Treat the forecasted week as a holiday week
    #[arg(long)]
    pub holiday_flag: bool,
    /// Average temperature for the week (°F)
    #[arg(long, default_value_t = 60.0)]
    pub temperature: f64,
    /// Regional fuel price ($/gallon)
    #[arg(long, default_value_t = 3.5)]
    pub fuel_price: f64,
    /// Consumer price index
    #[arg(long, default_value_t = 180.0)]
    pub cpi: f64,
    /// Unemployment rate (%)
    #[arg(long, default_value_t = 7.5)]
    pub unemployment: f64,
    /// Calendar month (1-12)
    #[arg(long, default_value_t = 5)]
    pub month: u32,
    /// Calendar year
    #[arg(long, default_value_t = 2010)]
    pub year: i32,
    /// ISO week of year (1-52)
    #[arg(long, default_value_t = 25)]
    pub week: u32,
    /// Historical average weekly sales for the store ($)
    #[arg(long, default_value_t = 1_000_000.0)]
    pub store_avg_sales: f64,
}

pub fn render_report_file(args: ReportArgs) -> Result<()> {
    let request = ForecastRequest {
        store: args.store,
        holiday_flag: args.holiday_flag,
        temperature: args.temperature,
        fuel_price: args.fuel_price,
        cpi: args.cpi,
        unemployment: args.unemployment,
        month: args.month,
        year: args.year,
        week: args.week,
        store_avg_sales: args.store_avg_sales,
    };
    request.validate().context("Invalid forecast inputs")?;

    let model = Predictor::load(&args.model_path)
        .with_context(|| format!("Failed to load model artifact from {}", args.model_path))?;

    let forecast = run_forecast(&model, &request);
    info!(
        "Predicted weekly sales for store {}: {:.2} ({:+.2}% vs average)",
        request.store, forecast.predicted_weekly_sales, forecast.delta_pct
    );

    let context = report_context(&request, &forecast, Utc::now().date_naive());
    let bytes = render_report(&context).context("Failed to render report")?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(report_filename(request.store)));
    fs::write(&output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Report written to {} ({} bytes)", output.display(), bytes.len());
    Ok(())
}
