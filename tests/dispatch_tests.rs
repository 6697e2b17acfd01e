use academic_dashboard::data::tables::Comparator;
use academic_dashboard::dispatch::{ChartKind, Dataset, GapFill};
use academic_dashboard::{Selection, ViewDispatcher, ViewSelection};

#[test]
fn every_view_yields_data_chart_and_insights() {
    let dispatcher = ViewDispatcher::new();
    for view in ViewSelection::ALL {
        let triple = dispatcher.resolve(view);
        assert!(!triple.dataset.is_empty(), "{view} has no data");
        assert!(!triple.insights.lines.is_empty(), "{view} has no insights");
        assert!(!triple.chart.series.is_empty());
    }
}

#[test]
fn unrecognised_keys_fall_back_to_cognitive() {
    let dispatcher = ViewDispatcher::new();
    let cognitive = dispatcher.resolve(ViewSelection::Cognitive);
    for key in ["", "Cognitiv", "bar", "radar2", "🙂"] {
        assert_eq!(dispatcher.resolve_key(key), cognitive);
    }
}

#[test]
fn separate_dispatchers_agree() {
    let a = ViewDispatcher::new();
    let b = ViewDispatcher::new();
    for view in ViewSelection::ALL {
        assert_eq!(a.resolve(view), b.resolve(view));
    }
}

#[test]
fn axis_domains_per_chart_kind() {
    let dispatcher = ViewDispatcher::new();
    for triple in dispatcher.iter() {
        let (min, max) = match triple.chart.kind {
            ChartKind::LineComparison => (80.0, 140.0),
            ChartKind::RadarComparison => (0.0, 140.0),
            ChartKind::HorizontalBarGap => (-5.0, 25.0),
        };
        assert_eq!(triple.chart.domain.min, min);
        assert_eq!(triple.chart.domain.max, max);
    }
}

#[test]
fn comparison_values_fit_their_domain() {
    let dispatcher = ViewDispatcher::new();
    for triple in dispatcher.iter() {
        let domain = triple.chart.domain;
        match triple.dataset {
            Dataset::Series(points) => {
                for p in points {
                    for c in Comparator::ALL {
                        assert!(domain.contains(p.score(c)));
                    }
                }
            }
            Dataset::Radar(points) => {
                for p in points {
                    for c in Comparator::ALL {
                        assert!(domain.contains(p.score(c)));
                    }
                }
            }
            Dataset::Gap(points) => {
                assert!(points.iter().all(|p| domain.contains(p.gap)));
            }
        }
    }
}

#[test]
fn gap_bars_colour_by_sign() {
    let dispatcher = ViewDispatcher::new();
    let Dataset::Gap(points) = dispatcher.resolve(ViewSelection::Gap).dataset else {
        panic!("expected gap data");
    };
    let negative = points.iter().find(|p| p.gap < 0.0).unwrap();
    for p in points.iter().filter(|p| p.gap >= 0.0) {
        assert_ne!(
            GapFill::for_value(negative.gap).color(),
            GapFill::for_value(p.gap).color()
        );
    }
}

#[test]
fn selection_drives_resolution() {
    let dispatcher = ViewDispatcher::new();
    let mut selection = Selection::default();
    assert_eq!(dispatcher.resolve(selection.current()).view, ViewSelection::Cognitive);

    selection.select(ViewSelection::Science);
    let triple = dispatcher.resolve(selection.current());
    assert_eq!(triple.title, "Science Performance Comparison");
    assert_eq!(triple.dataset.labels().last(), Some(&"Year 7"));
}
