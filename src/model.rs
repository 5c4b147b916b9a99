//! Core data model shared by the engine and the HTTP layer.
//!
//! `AnalysisResult` mirrors the wire shape of the external analysis provider
//! and is immutable once received. `ViewState` is the per-session view
//! selection (filter, keyword, sort, page) that drives review pagination.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reviews shown per page. Fixed, not configurable at runtime.
pub const REVIEWS_PER_PAGE: usize = 8;

/// Sentiment label assigned by the external provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// A single scored review.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Review {
    /// Review body text
    #[serde(rename = "review")]
    pub text: String,
    /// Provider-assigned label
    pub sentiment: Sentiment,
}

/// Full analysis response from the provider.
///
/// The aggregate counts and the per-review labels are produced independently
/// upstream, so `positive + neutral + negative` is not guaranteed to equal
/// `reviews.len()`. Aggregate stats come from the counts; the word cloud and
/// review pages come from `reviews`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
    /// Total review count as reported by the provider
    #[serde(default)]
    pub total: u32,
    pub reviews: Vec<Review>,
}

/// Sentiment tab selection for the review list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum SentimentFilter {
    #[default]
    All,
    Positive,
    Neutral,
    Negative,
}

impl SentimentFilter {
    /// Whether a review passes this filter.
    pub fn matches(&self, sentiment: Sentiment) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Positive => sentiment == Sentiment::Positive,
            SentimentFilter::Neutral => sentiment == Sentiment::Neutral,
            SentimentFilter::Negative => sentiment == Sentiment::Negative,
        }
    }
}

/// Review list ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum SortOrder {
    /// Keep the provider's order
    #[default]
    Default,
    /// Longest text first
    Longest,
    /// Shortest text first
    Shortest,
}

/// Chart flavor requested by the caller. Only affects how the renderer
/// configures axes; the series data is identical for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Pie,
    Bar,
}

/// Current view selection over the review list.
///
/// `page` is 1-based. Changing `filter` or `keyword` resets `page` to 1;
/// changing `sort` does not (sorting never changes the match count).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ViewState {
    pub filter: SentimentFilter,
    pub keyword: String,
    pub sort: SortOrder,
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            filter: SentimentFilter::All,
            keyword: String::new(),
            sort: SortOrder::Default,
            page: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_deserializes() {
        let body = r#"{
            "positive": 2, "neutral": 1, "negative": 0, "total": 3,
            "reviews": [
                {"review": "Great product", "sentiment": "Positive"},
                {"review": "It arrived on time", "sentiment": "Neutral"},
                {"review": "Love it", "sentiment": "Positive"}
            ]
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.positive, 2);
        assert_eq!(result.reviews.len(), 3);
        assert_eq!(result.reviews[0].text, "Great product");
        assert_eq!(result.reviews[0].sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_total_field_is_optional() {
        let body = r#"{"positive": 0, "neutral": 0, "negative": 0, "reviews": []}"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_filter_matches() {
        assert!(SentimentFilter::All.matches(Sentiment::Negative));
        assert!(SentimentFilter::Positive.matches(Sentiment::Positive));
        assert!(!SentimentFilter::Positive.matches(Sentiment::Neutral));
    }

    #[test]
    fn test_default_view_state() {
        let state = ViewState::default();
        assert_eq!(state.filter, SentimentFilter::All);
        assert_eq!(state.keyword, "");
        assert_eq!(state.sort, SortOrder::Default);
        assert_eq!(state.page, 1);
    }
}
