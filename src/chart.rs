//! Chart-ready series built from the aggregate sentiment counts.
//!
//! The engine only prepares data; a rendering collaborator draws it. When the
//! series or kind changes, the renderer must destroy its previous chart
//! instance before creating a new one on the same surface.

use serde::Serialize;
use utoipa::ToSchema;

use crate::model::{AnalysisResult, ChartKind};

/// Label order is fixed and colors match it position for position.
pub const CHART_LABELS: [&str; 3] = ["Positive", "Neutral", "Negative"];
pub const CHART_COLORS: [&str; 3] = ["#16a34a", "#f59e0b", "#dc2626"];

/// Series data in the shape a chart renderer consumes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub labels: [&'static str; 3],
    pub values: [u32; 3],
    pub colors: [&'static str; 3],
    /// Bar charts want a zero-based linear value axis; pie charts have none
    pub zero_based_axis: bool,
}

/// Maps the aggregate counts into a series for the requested chart kind.
/// The values are identical for both kinds; only axis hints differ.
pub fn build(result: &AnalysisResult, kind: ChartKind) -> ChartSeries {
    ChartSeries {
        kind,
        labels: CHART_LABELS,
        values: [result.positive, result.neutral, result.negative],
        colors: CHART_COLORS,
        zero_based_axis: kind == ChartKind::Bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(positive: u32, neutral: u32, negative: u32) -> AnalysisResult {
        AnalysisResult {
            positive,
            neutral,
            negative,
            total: positive + neutral + negative,
            reviews: vec![],
        }
    }

    #[test]
    fn test_values_follow_label_order() {
        let series = build(&counts(6, 3, 1), ChartKind::Pie);
        assert_eq!(series.values, [6, 3, 1]);
        assert_eq!(series.labels, ["Positive", "Neutral", "Negative"]);
        assert_eq!(series.colors, ["#16a34a", "#f59e0b", "#dc2626"]);
    }

    #[test]
    fn test_kind_does_not_change_values() {
        let result = counts(4, 2, 9);
        let pie = build(&result, ChartKind::Pie);
        let bar = build(&result, ChartKind::Bar);
        assert_eq!(pie.values, bar.values);
        assert!(!pie.zero_based_axis);
        assert!(bar.zero_based_axis);
    }

    #[test]
    fn test_zero_counts_series() {
        let series = build(&counts(0, 0, 0), ChartKind::Bar);
        assert_eq!(series.values, [0, 0, 0]);
    }
}
