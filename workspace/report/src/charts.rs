//! The three dashboard charts, rendered as standalone SVG documents.

use plotters::prelude::*;

use crate::error::{ReportError, Result};
use crate::simulate::{
    correlation_matrix, monthly_trend, simulated_feature_samples, HEATMAP_VARIABLES,
};

const SKY_BLUE: RGBColor = RGBColor(0, 191, 255);
const GOLD: RGBColor = RGBColor(255, 215, 0);
const LIME_GREEN: RGBColor = RGBColor(50, 205, 50);

fn chart_error<E: std::fmt::Display>(error: E) -> ReportError {
    ReportError::Chart(error.to_string())
}

fn sales_label(value: &f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else {
        format!("${:.0}K", value / 1_000.0)
    }
}

/// Bar chart comparing the predicted week against the store average.
pub fn comparison_chart(prediction: f64, store_avg_sales: f64) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (500, 300)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let y_max = prediction.max(store_avg_sales).max(1.0) * 1.2;
        let mut chart = ChartBuilder::on(&root)
            .caption("Predicted vs Average Weekly Sales", ("sans-serif", 18))
            .margin(12)
            .x_label_area_size(24)
            .y_label_area_size(64)
            .build_cartesian_2d(0.0f64..3.0, 0.0f64..y_max)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|_| String::new())
            .y_label_formatter(&sales_label)
            .y_desc("Sales ($)")
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series([
                Rectangle::new([(0.5, 0.0), (1.25, prediction)], SKY_BLUE.filled()),
                Rectangle::new([(1.75, 0.0), (2.5, store_avg_sales)], GOLD.filled()),
            ])
            .map_err(chart_error)?;

        let label_offset = y_max * 0.03;
        chart
            .draw_series([
                Text::new(
                    "Predicted".to_string(),
                    (0.55, prediction + label_offset),
                    ("sans-serif", 14),
                ),
                Text::new(
                    "Average".to_string(),
                    (1.85, store_avg_sales + label_offset),
                    ("sans-serif", 14),
                ),
            ])
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
    }
    Ok(svg)
}

/// Simulated monthly trend line for the store, ending at the prediction.
pub fn trend_chart(prediction: f64, store_avg_sales: f64) -> Result<String> {
    let points = monthly_trend(store_avg_sales, prediction);
    let low = points.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let high = points
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::NEG_INFINITY, f64::max);
    let pad = ((high - low) * 0.15).max(1.0);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (500, 300)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Simulated Monthly Sales Trend", ("sans-serif", 18))
            .margin(12)
            .x_label_area_size(32)
            .y_label_area_size(64)
            .build_cartesian_2d(1.0f64..12.0, (low - pad)..(high + pad))
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .x_labels(12)
            .x_label_formatter(&|v| format!("{:.0}", v))
            .y_label_formatter(&sales_label)
            .x_desc("Month")
            .y_desc("Sales ($)")
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(LineSeries::new(
                points.iter().map(|(month, value)| (*month as f64, *value)),
                &LIME_GREEN,
            ))
            .map_err(chart_error)?;

        chart
            .draw_series(points.iter().map(|(month, value)| {
                Circle::new((*month as f64, *value), 3, LIME_GREEN.filled())
            }))
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
    }
    Ok(svg)
}

/// Correlation heatmap over simulated economic indicators for the store.
pub fn heatmap_chart(store: u32) -> Result<String> {
    let samples = simulated_feature_samples(store);
    let matrix = correlation_matrix(&samples);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (600, 340)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Feature Correlation Heatmap", ("sans-serif", 18))
            .margin(12)
            .x_label_area_size(28)
            .y_label_area_size(92)
            .build_cartesian_2d(0.0f64..5.0, 0.0f64..5.0)
            .map_err(chart_error)?;

        let variable_label = |v: &f64| {
            HEATMAP_VARIABLES
                .get(v.floor() as usize)
                .map(|name| name.to_string())
                .unwrap_or_default()
        };

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(5)
            .y_labels(5)
            .x_label_formatter(&variable_label)
            .y_label_formatter(&variable_label)
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series((0..5).flat_map(|i| {
                (0..5).map(move |j| {
                    Rectangle::new(
                        [(i as f64, j as f64), (i as f64 + 1.0, j as f64 + 1.0)],
                        diverging_color(matrix[i][j]).filled(),
                    )
                })
            }))
            .map_err(chart_error)?;

        chart
            .draw_series((0..5).flat_map(|i| {
                (0..5).map(move |j| {
                    Text::new(
                        format!("{:.2}", matrix[i][j]),
                        (i as f64 + 0.3, j as f64 + 0.45),
                        ("sans-serif", 13),
                    )
                })
            }))
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
    }
    Ok(svg)
}

/// Blue-white-red diverging scale over [-1, 1].
fn diverging_color(value: f64) -> RGBColor {
    let value = value.clamp(-1.0, 1.0);
    if value >= 0.0 {
        let fade = ((1.0 - value) * 255.0).round() as u8;
        RGBColor(255, fade, fade)
    } else {
        let fade = ((1.0 + value) * 255.0).round() as u8;
        RGBColor(fade, fade, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_chart_renders_svg() {
        let svg = comparison_chart(1_150_000.0, 1_000_000.0).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Predicted vs Average Weekly Sales"));
    }

    #[test]
    fn test_trend_chart_renders_svg() {
        let svg = trend_chart(750_000.0, 1_000_000.0).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Simulated Monthly Sales Trend"));
    }

    #[test]
    fn test_heatmap_chart_renders_svg() {
        let svg = heatmap_chart(5).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Feature Correlation Heatmap"));
    }

    #[test]
    fn test_heatmap_is_deterministic_per_store() {
        assert_eq!(heatmap_chart(9).unwrap(), heatmap_chart(9).unwrap());
    }

    #[test]
    fn test_diverging_color_endpoints() {
        let hot = diverging_color(1.0);
        assert_eq!((hot.0, hot.1, hot.2), (255, 0, 0));

        let cold = diverging_color(-1.0);
        assert_eq!((cold.0, cold.1, cold.2), (0, 0, 255));

        let neutral = diverging_color(0.0);
        assert_eq!((neutral.0, neutral.1, neutral.2), (255, 255, 255));
    }
}
