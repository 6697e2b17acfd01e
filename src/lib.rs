//! Academic Benchmark Dashboard
//!
//! Static comparator scores across year groups, shown as selectable line,
//! radar and gap-bar charts with narrative insights.

pub mod charts;
pub mod data;
pub mod dispatch;
pub mod error;
pub mod gui;
pub mod logging;
pub mod report;

pub use dispatch::{DispatchTriple, Selection, ViewDispatcher, ViewSelection};
pub use error::{DashboardError, Result};
