//! Data module - static benchmark tables and narrative text

pub mod insights;
pub mod tables;

pub use insights::{Insight, InsightBlock, InsightKind, DASHBOARD_TITLE, FINAL_RECOMMENDATIONS};
pub use tables::{Comparator, GapPoint, MetricSeriesPoint, RadarPoint, SeriesColor};
