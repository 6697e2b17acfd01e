//! GUI module - User interface components

mod app;
mod chart_viewer;
mod view_selector;

pub use app::DashboardApp;
pub use chart_viewer::ChartViewer;
pub use view_selector::{SelectorAction, ViewSelector};
