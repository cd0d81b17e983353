pub mod report;
pub mod serve;

pub use report::{render_report_file, ReportArgs};
pub use serve::serve;
