//! Derived forecast insight: the percentage delta against the store average
//! and the narrative business summary.

use common::{ForecastRequest, SalesOutlook};

/// Delta, outlook and narrative derived from one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastInsight {
    pub delta_pct: f64,
    pub outlook: SalesOutlook,
    pub summary: String,
}

/// Percentage change of the prediction against the historical average.
/// The average is validated strictly positive upstream.
pub fn percent_delta(prediction: f64, average: f64) -> f64 {
    (prediction - average) / average * 100.0
}

/// Build the insight for a prediction: classify the delta and assemble the
/// narrative summary shown on the dashboard and in the report.
pub fn build_insight(request: &ForecastRequest, prediction: f64) -> ForecastInsight {
    let delta_pct = percent_delta(prediction, request.store_avg_sales);
    let outlook = SalesOutlook::from_delta(delta_pct);

    let mut summary = match outlook {
        SalesOutlook::Strong => format!(
            "Sales are expected to increase by {:.2}%, suggesting a strong performance week for Store {}.",
            delta_pct, request.store
        ),
        SalesOutlook::Slowdown => format!(
            "Sales are projected to fall by {:.2}%, indicating a potential slowdown in weekly revenue.",
            delta_pct.abs()
        ),
        SalesOutlook::Steady => format!(
            "Sales are likely to remain steady with a {:.2}% change compared to the average.",
            delta_pct
        ),
    };

    // Context clauses are independent of each other and of the outlook.
    if request.holiday_flag {
        summary.push_str(
            " Since it's a holiday week, increased foot traffic and higher purchase volumes are likely.",
        );
    }
    if request.temperature > 90.0 {
        summary.push_str(" Hot weather conditions could influence consumer activity or logistics.");
    }
    if request.unemployment > 10.0 {
        summary.push_str(" A higher unemployment rate might slightly dampen overall sales.");
    }

    ForecastInsight {
        delta_pct,
        outlook,
        summary,
    }
}
