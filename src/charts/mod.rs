//! Charts module - Chart rendering

mod plotter;
mod radar;
mod renderer;

pub use plotter::{color32, ChartPlotter};
pub use radar::RadarGeometry;
pub use renderer::{wrap_text, StaticChartRenderer};
