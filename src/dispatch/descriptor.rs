//! Chart descriptors handed to the rendering surfaces.

use crate::data::tables::{Comparator, SeriesColor};
use serde::Serialize;

/// Closed set of chart shapes the dashboard draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    LineComparison,
    RadarComparison,
    HorizontalBarGap,
}

/// Fixed numeric bounds of the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const COMPARISON_DOMAIN: AxisDomain = AxisDomain::new(80.0, 140.0);
pub const RADAR_DOMAIN: AxisDomain = AxisDomain::new(0.0, 140.0);
pub const GAP_DOMAIN: AxisDomain = AxisDomain::new(-5.0, 25.0);

/// Angle (degrees) at which the radar radius labels are drawn.
pub const RADAR_RADIUS_ANGLE: f64 = 30.0;

/// How one plotted field is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSpec {
    /// Field name in the dataset records
    pub key: &'static str,
    /// Legend name
    pub name: &'static str,
    pub color: SeriesColor,
    pub stroke_width: f32,
    /// Dash and gap length, `None` for a solid stroke
    pub dash: Option<(u32, u32)>,
    /// Marker radius at each datum
    pub dot_radius: Option<f32>,
    /// Area fill opacity (radar polygons)
    pub fill_opacity: Option<f32>,
    /// Which comparator this series reads. `None` for the gap series.
    #[serde(skip)]
    pub comparator: Option<Comparator>,
}

impl SeriesSpec {
    const fn line(comparator: Comparator, key: &'static str, name: &'static str, color: SeriesColor) -> Self {
        Self {
            key,
            name,
            color,
            stroke_width: 2.0,
            dash: None,
            dot_radius: None,
            fill_opacity: None,
            comparator: Some(comparator),
        }
    }

    const fn dashed(mut self, dash: u32, gap: u32) -> Self {
        self.dash = Some((dash, gap));
        self
    }

    const fn dotted(mut self, radius: f32) -> Self {
        self.dot_radius = Some(radius);
        self
    }

    const fn filled(mut self, opacity: f32) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }
}

const CURRENT: SeriesColor = Comparator::Current.color();
const EXPECTED: SeriesColor = Comparator::Expected.color();
const UK_NATIONAL: SeriesColor = Comparator::UkNational.color();
const UK_INDEPENDENT: SeriesColor = Comparator::UkIndependent.color();
const INTERNATIONAL: SeriesColor = Comparator::International.color();

pub const LINE_SERIES: &[SeriesSpec] = &[
    SeriesSpec::line(Comparator::Current, "isj", "ISJ Current", CURRENT).dotted(5.0),
    SeriesSpec::line(Comparator::Expected, "isjExpected", "ISJ Expected", EXPECTED)
        .dashed(5, 5)
        .dotted(5.0),
    SeriesSpec::line(Comparator::UkNational, "ukNational", "UK National Avg", UK_NATIONAL),
    SeriesSpec::line(Comparator::UkIndependent, "ukIndependent", "UK Independent Schools", UK_INDEPENDENT),
    SeriesSpec::line(Comparator::International, "international", "International Schools", INTERNATIONAL),
];

pub const RADAR_SERIES: &[SeriesSpec] = &[
    SeriesSpec::line(Comparator::Current, "isj", "ISJ Current", CURRENT).filled(0.3),
    SeriesSpec::line(Comparator::Expected, "isjExpected", "ISJ Expected", EXPECTED).filled(0.3),
    SeriesSpec::line(Comparator::UkNational, "ukNational", "UK National", UK_NATIONAL).filled(0.3),
    SeriesSpec::line(Comparator::UkIndependent, "ukIndependent", "UK Independent", UK_INDEPENDENT).filled(0.3),
    SeriesSpec::line(Comparator::International, "international", "International", INTERNATIONAL).filled(0.3),
];

pub const GAP_SERIES: &[SeriesSpec] = &[SeriesSpec {
    key: "gap",
    name: "Gap to International Benchmark",
    color: INTERNATIONAL,
    stroke_width: 0.0,
    dash: None,
    dot_radius: None,
    fill_opacity: None,
    comparator: None,
}];

/// Fill of one gap bar, picked from the sign of its delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapFill {
    /// Expected score is ahead of the international benchmark (negative gap)
    Ahead,
    /// Expected score trails or matches the benchmark
    Behind,
}

impl GapFill {
    pub fn for_value(gap: f64) -> Self {
        if gap < 0.0 {
            GapFill::Ahead
        } else {
            GapFill::Behind
        }
    }

    pub fn color(self) -> SeriesColor {
        match self {
            GapFill::Ahead => UK_INDEPENDENT,
            GapFill::Behind => INTERNATIONAL,
        }
    }
}

/// Tooltip text for a gap bar.
pub fn gap_tooltip(gap: f64) -> String {
    format!("Gap to International: {} points", gap)
}

/// Everything a rendering surface needs besides the records themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartDescriptor {
    pub kind: ChartKind,
    /// Field holding the category label of each record
    pub category_key: &'static str,
    pub domain: AxisDomain,
    pub series: &'static [SeriesSpec],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_angle: Option<f64>,
}

impl ChartDescriptor {
    pub const fn line_comparison() -> Self {
        Self {
            kind: ChartKind::LineComparison,
            category_key: "year",
            domain: COMPARISON_DOMAIN,
            series: LINE_SERIES,
            radius_angle: None,
        }
    }

    pub const fn radar_comparison() -> Self {
        Self {
            kind: ChartKind::RadarComparison,
            category_key: "subject",
            domain: RADAR_DOMAIN,
            series: RADAR_SERIES,
            radius_angle: Some(RADAR_RADIUS_ANGLE),
        }
    }

    pub const fn horizontal_bar_gap() -> Self {
        Self {
            kind: ChartKind::HorizontalBarGap,
            category_key: "subject",
            domain: GAP_DOMAIN,
            series: GAP_SERIES,
            radius_angle: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_fill_follows_sign() {
        assert_eq!(GapFill::for_value(-2.7), GapFill::Ahead);
        assert_eq!(GapFill::for_value(0.0), GapFill::Behind);
        assert_eq!(GapFill::for_value(22.5), GapFill::Behind);
        assert_ne!(GapFill::Ahead.color(), GapFill::Behind.color());
    }

    #[test]
    fn series_colors_match_comparator_scheme() {
        for spec in LINE_SERIES.iter().chain(RADAR_SERIES) {
            let comparator = spec.comparator.unwrap();
            assert_eq!(spec.color, comparator.color());
            assert_eq!(spec.key, comparator.field_name());
        }
    }

    #[test]
    fn only_cohort_lines_are_marked() {
        let dotted: Vec<_> = LINE_SERIES
            .iter()
            .filter(|s| s.dot_radius.is_some())
            .map(|s| s.key)
            .collect();
        assert_eq!(dotted, ["isj", "isjExpected"]);
        let dashed: Vec<_> = LINE_SERIES.iter().filter(|s| s.dash.is_some()).collect();
        assert_eq!(dashed.len(), 1);
        assert_eq!(dashed[0].dash, Some((5, 5)));
    }

    #[test]
    fn tooltip_text() {
        assert_eq!(gap_tooltip(-2.7), "Gap to International: -2.7 points");
        assert_eq!(gap_tooltip(10.0), "Gap to International: 10 points");
    }
}
