pub mod charts;
pub mod document;
pub mod error;
pub mod simulate;

pub use charts::{comparison_chart, heatmap_chart, trend_chart};
pub use document::{render_report, report_filename, ReportContext};
pub use error::{ReportError, Result};
