//! The two-page forecast report: a branded cover page and a body page with
//! store identification, prediction results and the narrative summary, all
//! drawn at fixed offsets on US letter pages.

use chrono::NaiveDate;
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect,
    Rgb,
};
use tracing::debug;

use common::{format_currency, format_delta};

use crate::error::{ReportError, Result};

/// Everything the renderer needs, already derived. The renderer itself has
/// no opinion on how these values were produced.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub store: u32,
    pub year: i32,
    pub week: u32,
    pub prediction: f64,
    pub store_avg_sales: f64,
    pub delta_pct: f64,
    pub summary: String,
    pub generated_on: NaiveDate,
}

const PAGE_WIDTH_IN: f64 = 8.5;
const PAGE_HEIGHT_IN: f64 = 11.0;
const PT_TO_MM: f64 = 0.352_778;

/// Average Helvetica glyph width as a fraction of the font size. Close
/// enough for centering short headings without embedding font metrics.
const AVG_GLYPH_WIDTH: f64 = 0.5;

/// Character budget for one wrapped summary line at the body font size.
const SUMMARY_WRAP_CHARS: usize = 82;

/// Line spacing of the wrapped summary, in inches (14 pt leading).
const SUMMARY_LEADING_IN: f64 = 14.0 * PT_TO_MM / 25.4;

fn inches(value: f64) -> Mm {
    Mm(value * 25.4)
}

fn brand_blue() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.45, 0.85, None))
}

fn gold() -> Color {
    Color::Rgb(Rgb::new(1.0, 0.84, 0.0, None))
}

fn white() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn grey() -> Color {
    Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None))
}

/// Download filename for a rendered report, keyed by store.
pub fn report_filename(store: u32) -> String {
    format!("sales_report_store{}.pdf", store)
}

/// Greedy word wrap against a character budget. A single word longer than
/// the budget becomes its own line.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn draw_centered(layer: &PdfLayerReference, text: &str, size: f32, y: Mm, font: &IndirectFontRef) {
    let width_mm = text.chars().count() as f64 * size as f64 * AVG_GLYPH_WIDTH * PT_TO_MM;
    let x = Mm((PAGE_WIDTH_IN * 25.4 - width_mm) / 2.0);
    layer.use_text(text, size, x, y, font);
}

fn draw_rule(layer: &PdfLayerReference, y_in: f64) {
    layer.set_outline_color(black());
    layer.set_outline_thickness(1.0);
    layer.add_line(Line {
        points: vec![
            (Point::new(inches(1.0), inches(y_in)), false),
            (Point::new(inches(7.5), inches(y_in)), false),
        ],
        is_closed: false,
    });
}

fn draw_heading(layer: &PdfLayerReference, text: &str, y_in: f64, bold: &IndirectFontRef) {
    layer.set_fill_color(brand_blue());
    layer.use_text(text, 14.0, inches(1.0), inches(y_in), bold);
    layer.set_fill_color(black());
}

/// Render the complete two-page report into an in-memory PDF.
///
/// Pure with respect to its inputs: no filesystem access, no clock reads.
/// The returned buffer is a complete document or the call fails.
pub fn render_report(context: &ReportContext) -> Result<Vec<u8>> {
    let (doc, cover_page, cover_layer) = PdfDocument::new(
        "Weekly Sales Forecast Report",
        inches(PAGE_WIDTH_IN),
        inches(PAGE_HEIGHT_IN),
        "cover",
    );
    let helvetica = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Document(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Document(e.to_string()))?;

    // Cover page: solid brand background with decorative marks.
    let layer = doc.get_page(cover_page).get_layer(cover_layer);
    layer.set_fill_color(brand_blue());
    layer.add_rect(
        Rect::new(
            Mm(0.0),
            Mm(0.0),
            inches(PAGE_WIDTH_IN),
            inches(PAGE_HEIGHT_IN),
        )
        .with_mode(PaintMode::Fill),
    );

    layer.set_fill_color(gold());
    for i in 0..3 {
        let x = 1.4 + 0.5 * i as f64;
        layer.add_rect(
            Rect::new(inches(x), inches(8.6), inches(x + 0.3), inches(8.9))
                .with_mode(PaintMode::Fill),
        );
    }

    layer.set_fill_color(white());
    draw_centered(&layer, "Weekly Sales Forecast", 28.0, inches(7.9), &bold);
    draw_centered(
        &layer,
        "Storecast Retail Analytics",
        16.0,
        inches(7.2),
        &helvetica,
    );
    draw_centered(
        &layer,
        &format!(
            "Generated on {}",
            context.generated_on.format("%B %d, %Y")
        ),
        12.0,
        inches(6.6),
        &helvetica,
    );
    draw_centered(
        &layer,
        "Storecast | Retail Analytics Report",
        10.0,
        inches(0.7),
        &helvetica,
    );

    // Body page: three labeled sections at fixed vertical offsets.
    let (body_page, body_layer) = doc.add_page(
        inches(PAGE_WIDTH_IN),
        inches(PAGE_HEIGHT_IN),
        "report",
    );
    let layer = doc.get_page(body_page).get_layer(body_layer);

    layer.set_fill_color(black());
    draw_centered(
        &layer,
        "Weekly Sales Forecast Report",
        20.0,
        inches(10.5),
        &bold,
    );

    let y = 10.0;

    draw_heading(&layer, "Store Information", y - 0.4, &bold);
    layer.use_text(
        format!("Store ID: {}", context.store),
        12.0,
        inches(1.2),
        inches(y - 0.7),
        &helvetica,
    );
    layer.use_text(
        format!("Year: {}", context.year),
        12.0,
        inches(1.2),
        inches(y - 0.9),
        &helvetica,
    );
    layer.use_text(
        format!("Week: {}", context.week),
        12.0,
        inches(1.2),
        inches(y - 1.1),
        &helvetica,
    );

    draw_rule(&layer, y - 1.25);

    draw_heading(&layer, "Sales Prediction Results", y - 1.6, &bold);
    layer.use_text(
        format!(
            "Predicted Weekly Sales: {}",
            format_currency(context.prediction)
        ),
        12.0,
        inches(1.2),
        inches(y - 1.9),
        &helvetica,
    );
    layer.use_text(
        format!(
            "Store Average Sales: {}",
            format_currency(context.store_avg_sales)
        ),
        12.0,
        inches(1.2),
        inches(y - 2.1),
        &helvetica,
    );
    layer.use_text(
        format!("Change vs. Average: {}", format_delta(context.delta_pct)),
        12.0,
        inches(1.2),
        inches(y - 2.3),
        &helvetica,
    );

    draw_rule(&layer, y - 2.45);

    draw_heading(&layer, "Business Summary", y - 2.8, &bold);
    let mut line_y = y - 3.1;
    for line in wrap_text(&context.summary, SUMMARY_WRAP_CHARS) {
        layer.use_text(line, 11.0, inches(1.2), inches(line_y), &helvetica);
        line_y -= SUMMARY_LEADING_IN;
    }

    layer.set_fill_color(grey());
    draw_centered(
        &layer,
        "Storecast | Retail Analytics Report",
        9.0,
        inches(0.7),
        &helvetica,
    );

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ReportError::Document(e.to_string()))?;
    debug!(store = context.store, size = bytes.len(), "Report rendered");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ReportContext {
        ReportContext {
            store: 4,
            year: 2011,
            week: 48,
            prediction: 1_150_000.0,
            store_avg_sales: 1_000_000.0,
            delta_pct: 15.0,
            summary: "Sales are expected to increase by 15.00%, suggesting a strong \
                      performance week for Store 4."
                .to_string(),
            generated_on: NaiveDate::from_ymd_opt(2012, 11, 30).unwrap(),
        }
    }

    #[test]
    fn test_report_starts_with_pdf_signature() {
        let bytes = render_report(&context()).unwrap();
        assert!(bytes.len() > 1_000);
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn test_report_handles_long_summaries() {
        let mut ctx = context();
        ctx.summary = ctx.summary.repeat(8);
        let bytes = render_report(&ctx).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn test_report_filename_uses_store_id() {
        assert_eq!(report_filename(7), "sales_report_store7.pdf");
        assert_eq!(report_filename(50), "sales_report_store50.pdf");
    }

    #[test]
    fn test_wrap_text_respects_budget() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        for line in &lines {
            assert!(line.chars().count() <= 9);
        }
    }

    #[test]
    fn test_wrap_text_keeps_oversized_word_on_its_own_line() {
        let lines = wrap_text("tiny incomprehensibilities tiny", 10);
        assert_eq!(lines, vec!["tiny", "incomprehensibilities", "tiny"]);
    }

    #[test]
    fn test_wrap_text_of_empty_string_is_empty() {
        assert!(wrap_text("", 20).is_empty());
    }
}
