//! Plain-text reports: per-category summaries and the spend chart.

pub mod chart;
pub mod layout;
pub mod summary;

pub use chart::{create_spend_chart, ChartColumn, SpendChart, CHART_TITLE};
pub use summary::render_summary;
