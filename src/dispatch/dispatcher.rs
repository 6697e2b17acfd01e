//! View dispatcher
//! Resolves a view into its dataset, chart descriptor and insight block from a
//! lookup table built once at start-up.

use super::descriptor::ChartDescriptor;
use super::view::ViewSelection;
use crate::data::insights::{self, InsightBlock};
use crate::data::tables::{self, GapPoint, MetricSeriesPoint, RadarPoint};
use serde::Serialize;

/// Ordered records backing one view. All records in a dataset share a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Dataset {
    Series(&'static [MetricSeriesPoint]),
    Radar(&'static [RadarPoint]),
    Gap(&'static [GapPoint]),
}

impl Dataset {
    pub fn len(&self) -> usize {
        match self {
            Dataset::Series(points) => points.len(),
            Dataset::Radar(points) => points.len(),
            Dataset::Gap(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Category label of every record, in order.
    pub fn labels(&self) -> Vec<&'static str> {
        match self {
            Dataset::Series(points) => points.iter().map(|p| p.period).collect(),
            Dataset::Radar(points) => points.iter().map(|p| p.subject).collect(),
            Dataset::Gap(points) => points.iter().map(|p| p.subject).collect(),
        }
    }
}

/// Everything the rendering surface needs for one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchTriple {
    pub view: ViewSelection,
    pub title: &'static str,
    pub dataset: Dataset,
    pub chart: ChartDescriptor,
    pub insights: InsightBlock,
}

/// Total mapping from `ViewSelection` to its `DispatchTriple`.
pub struct ViewDispatcher {
    table: Vec<DispatchTriple>,
}

impl Default for ViewDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewDispatcher {
    pub fn new() -> Self {
        let table = ViewSelection::ALL.into_iter().map(Self::entry).collect();
        Self { table }
    }

    fn entry(view: ViewSelection) -> DispatchTriple {
        let (dataset, chart, insights) = match view {
            ViewSelection::Cognitive => (
                Dataset::Series(tables::COGNITIVE),
                ChartDescriptor::line_comparison(),
                insights::COGNITIVE,
            ),
            ViewSelection::Reading => (
                Dataset::Series(tables::READING),
                ChartDescriptor::line_comparison(),
                insights::READING,
            ),
            ViewSelection::Maths => (
                Dataset::Series(tables::MATHS),
                ChartDescriptor::line_comparison(),
                insights::MATHS,
            ),
            ViewSelection::Science => (
                Dataset::Series(tables::SCIENCE),
                ChartDescriptor::line_comparison(),
                insights::SCIENCE,
            ),
            ViewSelection::Radar => (
                Dataset::Radar(tables::RADAR),
                ChartDescriptor::radar_comparison(),
                insights::RADAR,
            ),
            ViewSelection::Gap => (
                Dataset::Gap(tables::GAP),
                ChartDescriptor::horizontal_bar_gap(),
                insights::GAP,
            ),
        };

        DispatchTriple {
            view,
            title: view.title(),
            dataset,
            chart,
            insights,
        }
    }

    pub fn resolve(&self, view: ViewSelection) -> &DispatchTriple {
        &self.table[view.index()]
    }

    /// Resolve a raw key. Unrecognised keys get the first (cognitive) entry.
    pub fn resolve_key(&self, key: &str) -> &DispatchTriple {
        self.resolve(ViewSelection::from_key(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DispatchTriple> {
        self.table.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::descriptor::{ChartKind, GapFill};

    #[test]
    fn every_view_resolves_to_a_complete_triple() {
        let dispatcher = ViewDispatcher::new();
        for view in ViewSelection::ALL {
            let triple = dispatcher.resolve(view);
            assert_eq!(triple.view, view);
            assert!(!triple.dataset.is_empty());
            assert!(!triple.insights.is_empty());
            assert!(!triple.title.is_empty());
            assert!(matches!(
                triple.chart.kind,
                ChartKind::LineComparison | ChartKind::RadarComparison | ChartKind::HorizontalBarGap
            ));
        }
    }

    #[test]
    fn chart_kind_per_view() {
        let dispatcher = ViewDispatcher::new();
        let kind = |v| dispatcher.resolve(v).chart.kind;
        assert_eq!(kind(ViewSelection::Cognitive), ChartKind::LineComparison);
        assert_eq!(kind(ViewSelection::Reading), ChartKind::LineComparison);
        assert_eq!(kind(ViewSelection::Maths), ChartKind::LineComparison);
        assert_eq!(kind(ViewSelection::Science), ChartKind::LineComparison);
        assert_eq!(kind(ViewSelection::Radar), ChartKind::RadarComparison);
        assert_eq!(kind(ViewSelection::Gap), ChartKind::HorizontalBarGap);
    }

    #[test]
    fn unknown_key_resolves_to_cognitive() {
        let dispatcher = ViewDispatcher::new();
        let fallback = dispatcher.resolve_key("pie-chart");
        assert_eq!(fallback, dispatcher.resolve(ViewSelection::Cognitive));
        assert_eq!(dispatcher.resolve_key("radar").view, ViewSelection::Radar);
    }

    #[test]
    fn near_miss_keys_resolve_to_cognitive() {
        let dispatcher = ViewDispatcher::new();
        let cognitive = dispatcher.resolve(ViewSelection::Cognitive);
        for key in ["MATHS", " radar ", "Gap"] {
            assert_eq!(dispatcher.resolve_key(key), cognitive, "key {key:?}");
        }
    }

    #[test]
    fn resolving_twice_is_identical() {
        let dispatcher = ViewDispatcher::new();
        for view in ViewSelection::ALL {
            let first = dispatcher.resolve(view).clone();
            let second = dispatcher.resolve(view);
            assert_eq!(&first, second);
        }
    }

    #[test]
    fn radar_view_has_four_subjects_at_full_mark() {
        let dispatcher = ViewDispatcher::new();
        let Dataset::Radar(points) = dispatcher.resolve(ViewSelection::Radar).dataset else {
            panic!("radar view must carry radar points");
        };
        assert_eq!(points.len(), 4);
        let subjects: Vec<_> = points.iter().map(|p| p.subject).collect();
        assert_eq!(subjects, ["Cognitive Ability", "Reading", "Mathematics", "Science"]);
        assert!(points.iter().all(|p| p.full_mark == 140.0));
    }

    #[test]
    fn gap_view_has_twelve_entries_and_one_negative() {
        let dispatcher = ViewDispatcher::new();
        let Dataset::Gap(points) = dispatcher.resolve(ViewSelection::Gap).dataset else {
            panic!("gap view must carry gap points");
        };
        assert_eq!(points.len(), 12);
        let y7 = points.iter().find(|p| p.subject == "Cognitive (Y7)").unwrap();
        assert_eq!(y7.gap, -2.7);

        let negative = points.iter().filter(|p| GapFill::for_value(p.gap) == GapFill::Ahead);
        assert_eq!(negative.count(), 1);
    }

    #[test]
    fn maths_view_starts_at_year_three() {
        let dispatcher = ViewDispatcher::new();
        let Dataset::Series(points) = dispatcher.resolve(ViewSelection::Maths).dataset else {
            panic!("maths view must carry series points");
        };
        assert_eq!(points[0].period, "Year 3");
        assert_eq!(points[0].current, 96.7);
        assert_eq!(points[0].expected, 103.7);
    }

    #[test]
    fn labels_follow_category_key() {
        let dispatcher = ViewDispatcher::new();
        let reading = dispatcher.resolve(ViewSelection::Reading);
        assert_eq!(reading.chart.category_key, "year");
        assert_eq!(reading.dataset.labels().first(), Some(&"Year 1"));
        assert_eq!(dispatcher.iter().count(), 6);
    }
}
