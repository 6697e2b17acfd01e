//! View identifiers and the single piece of mutable UI state.

use crate::error::DashboardError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The six selectable dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewSelection {
    #[default]
    Cognitive,
    Reading,
    Maths,
    Science,
    Radar,
    Gap,
}

impl ViewSelection {
    /// Table order. The first entry is the fallback.
    pub const ALL: [ViewSelection; 6] = [
        ViewSelection::Cognitive,
        ViewSelection::Reading,
        ViewSelection::Maths,
        ViewSelection::Science,
        ViewSelection::Radar,
        ViewSelection::Gap,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ViewSelection::Cognitive => "cognitive",
            ViewSelection::Reading => "reading",
            ViewSelection::Maths => "maths",
            ViewSelection::Science => "science",
            ViewSelection::Radar => "radar",
            ViewSelection::Gap => "gap",
        }
    }

    /// Button caption in the selector bar.
    pub fn label(self) -> &'static str {
        match self {
            ViewSelection::Cognitive => "Cognitive",
            ViewSelection::Reading => "Reading",
            ViewSelection::Maths => "Mathematics",
            ViewSelection::Science => "Science",
            ViewSelection::Radar => "Year 7 Overview",
            ViewSelection::Gap => "Gap Analysis",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewSelection::Cognitive => "Cognitive Ability (CAT4) Comparison",
            ViewSelection::Reading => "Reading Ability Comparison",
            ViewSelection::Maths => "Mathematics Performance Comparison",
            ViewSelection::Science => "Science Performance Comparison",
            ViewSelection::Radar => "Year 7 Performance Across All Subjects",
            ViewSelection::Gap => "Gap Analysis: ISJ Expected vs International Benchmarks",
        }
    }

    /// Position in the dispatch table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lenient lookup: unknown keys resolve to `Cognitive`.
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            log::warn!("Unknown view '{}', falling back to {}", key, Self::default());
            Self::default()
        })
    }
}

impl FromStr for ViewSelection {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.key() == s)
            .ok_or_else(|| DashboardError::UnknownView(s.to_string()))
    }
}

impl fmt::Display for ViewSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Owned current-view state, replaced wholesale on each selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection {
    current: ViewSelection,
}

impl Selection {
    pub fn new(initial: ViewSelection) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> ViewSelection {
        self.current
    }

    /// Returns true when the view actually changed.
    pub fn select(&mut self, view: ViewSelection) -> bool {
        if self.current == view {
            return false;
        }
        log::debug!("View changed: {} -> {}", self.current, view);
        self.current = view;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for view in ViewSelection::ALL {
            assert_eq!(view.key().parse::<ViewSelection>().unwrap(), view);
        }
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        let err = "histogram".parse::<ViewSelection>().unwrap_err();
        assert!(matches!(err, DashboardError::UnknownView(ref k) if k == "histogram"));
    }

    #[test]
    fn keys_match_exactly() {
        for key in ["MATHS", " radar ", "Gap", "cognitive\n"] {
            assert!(key.parse::<ViewSelection>().is_err(), "{key:?} should not parse");
            assert_eq!(ViewSelection::from_key(key), ViewSelection::Cognitive);
        }
    }

    #[test]
    fn lenient_lookup_falls_back_to_cognitive() {
        assert_eq!(ViewSelection::from_key("histogram"), ViewSelection::Cognitive);
        assert_eq!(ViewSelection::from_key(""), ViewSelection::Cognitive);
        assert_eq!(ViewSelection::from_key("gap"), ViewSelection::Gap);
    }

    #[test]
    fn index_matches_table_order() {
        for (i, view) in ViewSelection::ALL.iter().enumerate() {
            assert_eq!(view.index(), i);
        }
    }

    #[test]
    fn selection_starts_on_cognitive_and_replaces_wholesale() {
        let mut selection = Selection::default();
        assert_eq!(selection.current(), ViewSelection::Cognitive);

        assert!(selection.select(ViewSelection::Radar));
        assert_eq!(selection.current(), ViewSelection::Radar);
        assert!(!selection.select(ViewSelection::Radar));

        // every state reaches every other directly
        for from in ViewSelection::ALL {
            for to in ViewSelection::ALL {
                let mut s = Selection::new(from);
                assert_eq!(s.select(to), from != to);
                assert_eq!(s.current(), to);
            }
        }
    }
}
