//! Aggregate sentiment statistics derived from the provider's raw counts.

use serde::Serialize;
use utoipa::ToSchema;

use crate::model::AnalysisResult;

/// Percentage breakdown of the three sentiment buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct SentimentStats {
    pub positive_percent: u32,
    pub neutral_percent: u32,
    pub negative_percent: u32,
}

/// Computes rounded percentages from the aggregate counts.
///
/// With no counts at all, every percentage is 0. Never divides by zero.
pub fn aggregate(result: &AnalysisResult) -> SentimentStats {
    let total = result.positive + result.neutral + result.negative;
    SentimentStats {
        positive_percent: percent_of(result.positive, total),
        neutral_percent: percent_of(result.neutral, total),
        negative_percent: percent_of(result.negative, total),
    }
}

fn percent_of(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
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
    fn test_positive_percent_rounds() {
        // 6 / 10 = 60%
        assert_eq!(aggregate(&counts(6, 3, 1)).positive_percent, 60);
        // 1 / 3 = 33.33 -> 33, 2 / 3 = 66.67 -> 67
        let stats = aggregate(&counts(1, 2, 0));
        assert_eq!(stats.positive_percent, 33);
        assert_eq!(stats.neutral_percent, 67);
    }

    #[test]
    fn test_zero_counts_yield_zero() {
        let stats = aggregate(&counts(0, 0, 0));
        assert_eq!(stats.positive_percent, 0);
        assert_eq!(stats.neutral_percent, 0);
        assert_eq!(stats.negative_percent, 0);
    }

    #[test]
    fn test_all_one_bucket() {
        assert_eq!(aggregate(&counts(5, 0, 0)).positive_percent, 100);
        assert_eq!(aggregate(&counts(0, 0, 7)).negative_percent, 100);
    }
}
