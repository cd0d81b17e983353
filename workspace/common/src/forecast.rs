use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A single forecast submission: the ten scalar inputs the model consumes.
///
/// Ranges match the dashboard input widgets. Requests outside these ranges
/// are rejected at the API edge rather than clamped.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ForecastRequest {
    /// Store identifier (1-50)
    #[validate(range(min = 1, max = 50))]
    pub store: u32,
    /// Whether the forecasted week contains a holiday
    pub holiday_flag: bool,
    /// Average temperature for the week (°F)
    #[validate(range(min = 20.0, max = 120.0))]
    pub temperature: f64,
    /// Regional fuel price ($/gallon)
    #[validate(range(min = 2.0, max = 5.0))]
    pub fuel_price: f64,
    /// Consumer price index
    #[validate(range(min = 100.0, max = 250.0))]
    pub cpi: f64,
    /// Unemployment rate (%)
    #[validate(range(min = 0.0, max = 15.0))]
    pub unemployment: f64,
    /// Calendar month (1-12)
    #[validate(range(min = 1, max = 12))]
    pub month: u32,
    /// Calendar year
    #[validate(range(min = 2010, max = 2012))]
    pub year: i32,
    /// ISO week of year (1-52)
    #[validate(range(min = 1, max = 52))]
    pub week: u32,
    /// Historical average weekly sales for the store ($).
    /// Must be strictly positive so the delta is always finite.
    #[validate(range(exclusive_min = 0.0, max = 3_000_000.0))]
    pub store_avg_sales: f64,
}

/// Outlook category derived from the delta between prediction and average.
///
/// The boundaries are strict: a delta of exactly ±10% is still `Steady`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SalesOutlook {
    /// Delta above +10%
    Strong,
    /// Delta below -10%
    Slowdown,
    /// Delta within ±10%
    Steady,
}

impl SalesOutlook {
    /// Classify a percentage delta.
    pub fn from_delta(delta: f64) -> Self {
        if delta > 10.0 {
            SalesOutlook::Strong
        } else if delta < -10.0 {
            SalesOutlook::Slowdown
        } else {
            SalesOutlook::Steady
        }
    }
}

/// Identity of the loaded model artifact.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ModelInfo {
    /// Model name recorded in the artifact
    pub name: String,
    /// Model version recorded in the artifact
    pub version: String,
}

/// Forecast pipeline output returned to the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ForecastResponse {
    /// Store the forecast was produced for
    pub store: u32,
    /// Predicted weekly sales ($)
    pub predicted_weekly_sales: f64,
    /// Historical average weekly sales ($)
    pub store_avg_sales: f64,
    /// Percentage change of the prediction against the average
    pub delta_pct: f64,
    /// Outlook category for the week
    pub outlook: SalesOutlook,
    /// Narrative business summary
    pub summary: String,
    /// Name of the model that produced the prediction
    pub model_name: String,
    /// Version of the model that produced the prediction
    pub model_version: String,
}
