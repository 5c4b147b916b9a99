//! Review list derivation: sentiment filter, keyword search, sort, paging.
//!
//! The pipeline order is fixed — filter by sentiment, then by keyword, then
//! sort, then slice the requested page. `total_pages` is computed from the
//! filtered set, so sorting never changes it.

use serde::Serialize;
use utoipa::ToSchema;

use crate::model::{Review, SortOrder, ViewState, REVIEWS_PER_PAGE};

/// One derived page of reviews plus the paging envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewPage {
    pub items: Vec<Review>,
    /// Reviews matching the current filter and keyword, across all pages
    pub matched: usize,
    /// ceil(matched / page size); 0 when nothing matched
    pub total_pages: usize,
    /// Echo of the requested 1-based page
    pub page: usize,
}

/// Derives the visible page for the given view state.
///
/// A `page` beyond `total_pages` yields empty `items` rather than clamping;
/// callers keep pages in range by resetting to 1 on filter or keyword change.
pub fn derive_page(reviews: &[Review], state: &ViewState) -> ReviewPage {
    let keyword = state.keyword.to_lowercase();

    let mut matched: Vec<&Review> = reviews
        .iter()
        .filter(|r| state.filter.matches(r.sentiment))
        .filter(|r| keyword.is_empty() || r.text.to_lowercase().contains(&keyword))
        .collect();

    match state.sort {
        SortOrder::Default => {}
        SortOrder::Longest => matched.sort_by_key(|r| std::cmp::Reverse(text_len(r))),
        SortOrder::Shortest => matched.sort_by_key(|r| text_len(r)),
    }

    let count = matched.len();
    let total_pages = count.div_ceil(REVIEWS_PER_PAGE);

    let start = (state.page.saturating_sub(1)) * REVIEWS_PER_PAGE;
    let items = if start >= count {
        Vec::new()
    } else {
        matched[start..count.min(start + REVIEWS_PER_PAGE)]
            .iter()
            .map(|r| (*r).clone())
            .collect()
    };

    ReviewPage {
        items,
        matched: count,
        total_pages,
        page: state.page,
    }
}

fn text_len(review: &Review) -> usize {
    review.text.chars().count()
}
