//! Narrative text shown under each chart, plus the closing recommendations.

use serde::Serialize;

/// Tone of a single observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Strength,
    ActionPoint,
}

impl InsightKind {
    pub fn icon(self) -> &'static str {
        match self {
            InsightKind::Strength => "✅",
            InsightKind::ActionPoint => "⚠",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: &'static str,
}

const fn strength(text: &'static str) -> Insight {
    Insight {
        kind: InsightKind::Strength,
        text,
    }
}

const fn action(text: &'static str) -> Insight {
    Insight {
        kind: InsightKind::ActionPoint,
        text,
    }
}

/// Literal observations attached to one view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InsightBlock {
    pub heading: &'static str,
    pub lines: &'static [Insight],
}

impl InsightBlock {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub const COGNITIVE: InsightBlock = InsightBlock {
    heading: "Key Insights:",
    lines: &[
        strength("Cognitive ability increases steadily at ISJ, closing the gap to independent schools."),
        strength("By Year 7, ISJ students match or exceed top-tier international school performance."),
        action("Action Point: Focus on problem-solving skills in Years 3-4 to reach top independent school standards sooner."),
    ],
};

pub const READING: InsightBlock = InsightBlock {
    heading: "Key Insights:",
    lines: &[
        strength("ISJ's expected progress will align with UK independent school standards in Years 6-7."),
        strength("Reading gaps in Years 3-5 are expected to close, but international schools remain ahead."),
        action("Action Point: Early fluency & comprehension training (Years 3-5) is key to matching top schools."),
    ],
};

pub const MATHS: InsightBlock = InsightBlock {
    heading: "Key Insights:",
    lines: &[
        strength("ISJ will reach independent school standards by Year 7 but remain behind international schools."),
        action("Action Point: Introduce advanced problem-solving strategies (Years 3-6) to match international schools."),
    ],
};

pub const SCIENCE: InsightBlock = InsightBlock {
    heading: "Key Insights:",
    lines: &[
        strength("Science is expected to align with independent schools by Year 7 but still trails international benchmarks."),
        action("Action Point: Expand practical, inquiry-based learning (Years 3-6) to match global standards."),
    ],
};

pub const RADAR: InsightBlock = InsightBlock {
    heading: "Year 7 Performance Overview:",
    lines: &[
        strength("Strongest areas: Cognitive Ability (exceeding UK independent schools)"),
        strength("Science shows strong improvement, approaching independent school standards"),
        action("Most room for growth: Reading and Mathematics compared to international benchmarks"),
    ],
};

pub const GAP: InsightBlock = InsightBlock {
    heading: "Gap Analysis Insights:",
    lines: &[
        strength("Cognitive ability in Year 7 exceeds international benchmarks by 2.7 points"),
        action("Largest gaps: Mathematics and Science in early years (18-22 point gap)"),
        strength("All gaps narrow by Year 7, indicating effective teaching strategies"),
    ],
};

/// Closing panel shown below every view.
pub struct Recommendations {
    pub strengths: &'static [&'static str],
    pub improvements: &'static [&'static str],
}

pub const DASHBOARD_TITLE: &str = "ISJ Academic Performance Analysis";

pub const FINAL_RECOMMENDATIONS: Recommendations = Recommendations {
    strengths: &[
        "ISJ is expected to match UK independent school performance in most subjects by Year 7.",
        "Science, maths, and reading show strong year-over-year improvement.",
        "Cognitive ability is a standout area, exceeding international benchmarks in Year 7.",
    ],
    improvements: &[
        "Reading & maths in Years 3-5 remain below independent & international benchmarks.",
        "Science lags behind top-performing international schools (PISA, IB).",
        "Early interventions in reasoning skills (Years 3-4) could further boost CAT4 scores.",
    ],
};
