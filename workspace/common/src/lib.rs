//! Common transport-layer types shared between the backend and its consumers.
//! These structs mirror the backend handlers' request/response payloads so
//! the CLI and the library crates can reuse them without duplicating shapes.

mod forecast;
mod format;

pub use forecast::{ForecastRequest, ForecastResponse, ModelInfo, SalesOutlook};
pub use format::{format_currency, format_delta};
