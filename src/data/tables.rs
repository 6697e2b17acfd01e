//! Static Benchmark Tables
//! Hand-entered comparator scores per year group, the Year 7 radar overview
//! and the pre-computed gap table. Nothing here is derived at runtime.

use serde::Serialize;

/// Upper bound used to scale the radar axes.
pub const RADAR_FULL_MARK: f64 = 140.0;

/// One of the five score series every comparison dataset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// Current cohort (ISJ)
    Current,
    /// Expected trajectory for the current cohort
    Expected,
    UkNational,
    UkIndependent,
    International,
}

impl Comparator {
    pub const ALL: [Comparator; 5] = [
        Comparator::Current,
        Comparator::Expected,
        Comparator::UkNational,
        Comparator::UkIndependent,
        Comparator::International,
    ];

    /// Field name used in the serialized records.
    pub fn field_name(self) -> &'static str {
        match self {
            Comparator::Current => "isj",
            Comparator::Expected => "isjExpected",
            Comparator::UkNational => "ukNational",
            Comparator::UkIndependent => "ukIndependent",
            Comparator::International => "international",
        }
    }

    pub const fn color(self) -> SeriesColor {
        match self {
            Comparator::Current => SeriesColor::rgb(0x3b, 0x82, 0xf6),
            Comparator::Expected => SeriesColor::rgb(0x60, 0xa5, 0xfa),
            Comparator::UkNational => SeriesColor::rgb(0x6b, 0x72, 0x80),
            Comparator::UkIndependent => SeriesColor::rgb(0x10, 0xb9, 0x81),
            Comparator::International => SeriesColor::rgb(0x8b, 0x5c, 0xf6),
        }
    }
}

/// Plain RGB colour shared by the interactive and static renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SeriesColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for SeriesColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// One period's scores across the five comparators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSeriesPoint {
    #[serde(rename = "year")]
    pub period: &'static str,
    #[serde(rename = "isj")]
    pub current: f64,
    #[serde(rename = "isjExpected")]
    pub expected: f64,
    pub uk_national: f64,
    pub uk_independent: f64,
    pub international: f64,
}

impl MetricSeriesPoint {
    const fn new(
        period: &'static str,
        current: f64,
        expected: f64,
        uk_national: f64,
        uk_independent: f64,
        international: f64,
    ) -> Self {
        Self {
            period,
            current,
            expected,
            uk_national,
            uk_independent,
            international,
        }
    }

    pub fn score(&self, comparator: Comparator) -> f64 {
        match comparator {
            Comparator::Current => self.current,
            Comparator::Expected => self.expected,
            Comparator::UkNational => self.uk_national,
            Comparator::UkIndependent => self.uk_independent,
            Comparator::International => self.international,
        }
    }
}

/// One subject's Year 7 scores for the radial chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarPoint {
    pub subject: &'static str,
    #[serde(rename = "isj")]
    pub current: f64,
    #[serde(rename = "isjExpected")]
    pub expected: f64,
    pub uk_national: f64,
    pub uk_independent: f64,
    pub international: f64,
    pub full_mark: f64,
}

impl RadarPoint {
    const fn new(
        subject: &'static str,
        current: f64,
        expected: f64,
        uk_national: f64,
        uk_independent: f64,
        international: f64,
    ) -> Self {
        Self {
            subject,
            current,
            expected,
            uk_national,
            uk_independent,
            international,
            full_mark: RADAR_FULL_MARK,
        }
    }

    pub fn score(&self, comparator: Comparator) -> f64 {
        match comparator {
            Comparator::Current => self.current,
            Comparator::Expected => self.expected,
            Comparator::UkNational => self.uk_national,
            Comparator::UkIndependent => self.uk_independent,
            Comparator::International => self.international,
        }
    }
}

/// Gap between the expected trajectory and the international benchmark.
/// Negative means the expected score is ahead of the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GapPoint {
    pub subject: &'static str,
    pub gap: f64,
}

impl GapPoint {
    const fn new(subject: &'static str, gap: f64) -> Self {
        Self { subject, gap }
    }
}

// Cognitive Ability (CAT4)
pub const COGNITIVE: &[MetricSeriesPoint] = &[
    MetricSeriesPoint::new("Year 3", 98.4, 105.4, 100.0, 110.0, 115.0),
    MetricSeriesPoint::new("Year 4", 97.7, 104.7, 100.0, 110.0, 115.0),
    MetricSeriesPoint::new("Year 5", 103.2, 110.2, 100.0, 115.0, 120.0),
    MetricSeriesPoint::new("Year 6", 104.5, 111.5, 100.0, 115.0, 120.0),
    MetricSeriesPoint::new("Year 7", 120.7, 127.7, 100.0, 120.0, 125.0),
];

pub const READING: &[MetricSeriesPoint] = &[
    MetricSeriesPoint::new("Year 1", 80.0, 87.0, 80.5, 87.5, 90.0),
    MetricSeriesPoint::new("Year 3", 99.2, 106.2, 102.5, 107.5, 115.0),
    MetricSeriesPoint::new("Year 4", 95.3, 102.3, 105.0, 112.5, 120.0),
    MetricSeriesPoint::new("Year 5", 97.4, 104.4, 105.0, 112.5, 122.5),
    MetricSeriesPoint::new("Year 6", 107.7, 114.7, 105.0, 115.0, 122.5),
    MetricSeriesPoint::new("Year 7", 105.3, 112.3, 107.5, 117.5, 125.0),
];

pub const MATHS: &[MetricSeriesPoint] = &[
    MetricSeriesPoint::new("Year 3", 96.7, 103.7, 100.0, 110.0, 122.5),
    MetricSeriesPoint::new("Year 4", 98.3, 105.3, 100.0, 115.0, 127.5),
    MetricSeriesPoint::new("Year 5", 101.8, 108.8, 100.0, 115.0, 127.5),
    MetricSeriesPoint::new("Year 6", 100.8, 107.8, 100.0, 115.0, 127.5),
    MetricSeriesPoint::new("Year 7", 110.7, 117.7, 105.0, 120.0, 132.5),
];

pub const SCIENCE: &[MetricSeriesPoint] = &[
    MetricSeriesPoint::new("Year 3", 99.4, 106.4, 100.0, 110.0, 122.5),
    MetricSeriesPoint::new("Year 4", 97.4, 104.4, 100.0, 115.0, 127.5),
    MetricSeriesPoint::new("Year 5", 100.5, 107.5, 100.0, 115.0, 127.5),
    MetricSeriesPoint::new("Year 6", 100.5, 107.5, 100.0, 115.0, 127.5),
    MetricSeriesPoint::new("Year 7", 116.0, 123.0, 105.0, 120.0, 132.5),
];

// Year 7 only
pub const RADAR: &[RadarPoint] = &[
    RadarPoint::new("Cognitive Ability", 120.7, 127.7, 100.0, 120.0, 125.0),
    RadarPoint::new("Reading", 105.3, 112.3, 107.5, 117.5, 125.0),
    RadarPoint::new("Mathematics", 110.7, 117.7, 105.0, 120.0, 132.5),
    RadarPoint::new("Science", 116.0, 123.0, 105.0, 120.0, 132.5),
];

pub const GAP: &[GapPoint] = &[
    GapPoint::new("Cognitive (Y3-Y4)", 10.0),
    GapPoint::new("Cognitive (Y5-Y6)", 8.5),
    GapPoint::new("Cognitive (Y7)", -2.7),
    GapPoint::new("Reading (Y1-Y3)", 8.8),
    GapPoint::new("Reading (Y4-Y5)", 17.7),
    GapPoint::new("Reading (Y6-Y7)", 12.7),
    GapPoint::new("Maths (Y3-Y4)", 22.5),
    GapPoint::new("Maths (Y5-Y6)", 19.2),
    GapPoint::new("Maths (Y7)", 14.8),
    GapPoint::new("Science (Y3-Y4)", 18.1),
    GapPoint::new("Science (Y5-Y6)", 20.0),
    GapPoint::new("Science (Y7)", 9.5),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_scores_stay_in_range() {
        for table in [COGNITIVE, READING, MATHS, SCIENCE] {
            for point in table {
                for comparator in Comparator::ALL {
                    let v = point.score(comparator);
                    assert!((75.0..=140.0).contains(&v), "{} {:?} = {}", point.period, comparator, v);
                }
            }
        }
        for point in RADAR {
            for comparator in Comparator::ALL {
                assert!(point.score(comparator) <= point.full_mark);
            }
        }
    }

    #[test]
    fn expected_trajectory_is_seven_points_ahead() {
        for table in [COGNITIVE, READING, MATHS, SCIENCE] {
            for point in table {
                assert!((point.expected - point.current - 7.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn records_serialize_with_dashboard_field_names() {
        let json = serde_json::to_value(MATHS[0]).unwrap();
        assert_eq!(json["year"], "Year 3");
        assert_eq!(json["isj"], 96.7);
        assert_eq!(json["isjExpected"], 103.7);
        assert_eq!(json["ukIndependent"], 110.0);

        let radar = serde_json::to_value(RADAR[0]).unwrap();
        assert_eq!(radar["fullMark"], 140.0);
        assert_eq!(radar["subject"], "Cognitive Ability");
    }

    #[test]
    fn color_hex() {
        assert_eq!(Comparator::Current.color().hex(), "#3b82f6");
        assert_eq!(Comparator::International.color().hex(), "#8b5cf6");
    }
}
