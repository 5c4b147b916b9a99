//! Session state: the latest analysis result plus the current view selection.
//!
//! This is the explicit-dispatch version of the UI's reactive wiring: every
//! user interaction becomes a [`ViewEvent`], applied here with the page-reset
//! rules, and the visible page is re-derived from scratch each time. Only a
//! new analysis touches the aggregate/chart/word-cloud inputs.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::model::{AnalysisResult, SentimentFilter, SortOrder, ViewState};
use crate::view::{self, ReviewPage};

/// One view-state mutation from the caller.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViewEvent {
    /// Select a sentiment tab; resets to page 1
    SetFilter(SentimentFilter),
    /// Change the keyword search; resets to page 1
    SetKeyword(String),
    /// Change the ordering; page is kept since the match count is unchanged
    SetSort(SortOrder),
    /// Jump to a 1-based page
    SetPage(usize),
}

/// Holds at most one analysis result and the view selection over it.
#[derive(Debug, Default)]
pub struct Session {
    result: Option<AnalysisResult>,
    view: ViewState,
}

impl Session {
    /// Discards the current result when a new analysis request starts.
    /// The view selection survives across analyses; only the page resets.
    pub fn begin_analysis(&mut self) {
        self.result = None;
        self.view.page = 1;
    }

    /// Installs a fresh result, fully replacing any prior one.
    pub fn install(&mut self, result: AnalysisResult) {
        self.result = Some(result);
        self.view.page = 1;
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Applies one view event, enforcing the page-reset rules.
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::SetFilter(filter) => {
                self.view.filter = filter;
                self.view.page = 1;
            }
            ViewEvent::SetKeyword(keyword) => {
                self.view.keyword = keyword;
                self.view.page = 1;
            }
            ViewEvent::SetSort(sort) => {
                self.view.sort = sort;
            }
            ViewEvent::SetPage(page) => {
                self.view.page = page.max(1);
            }
        }
    }

    /// Derives the currently visible review page, or None before any result.
    pub fn current_page(&self) -> Option<ReviewPage> {
        self.result
            .as_ref()
            .map(|r| view::derive_page(&r.reviews, &self.view))
    }
}
