//! Dispatch module - view selection and chart configuration lookup

mod descriptor;
mod dispatcher;
mod view;

pub use descriptor::{
    gap_tooltip, AxisDomain, ChartDescriptor, ChartKind, GapFill, SeriesSpec, GAP_DOMAIN,
    RADAR_DOMAIN,
};
pub use dispatcher::{Dataset, DispatchTriple, ViewDispatcher};
pub use view::{Selection, ViewSelection};
