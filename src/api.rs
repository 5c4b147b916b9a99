//! HTTP layer: analyze trigger plus derived-view endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::chart::{self, ChartSeries};
use crate::model::ChartKind;
use crate::provider;
use crate::session::{Session, ViewEvent};
use crate::stats::{self, SentimentStats};
use crate::view::ReviewPage;
use crate::wordcloud::{self, WordEntry};

pub struct AppState {
    pub session: RwLock<Session>,
    /// At most one analysis request may be in flight
    pub analyzing: AtomicBool,
    pub http: reqwest::Client,
    pub provider_url: String,
}

impl AppState {
    pub fn new(provider_url: String) -> Self {
        AppState {
            session: RwLock::new(Session::default()),
            analyzing: AtomicBool::new(false),
            http: reqwest::Client::new(),
            provider_url,
        }
    }
}

/// Holds the in-flight flag for the duration of one analyze call. The flag
/// is released on drop, so the guard also releases when axum drops the
/// handler future on client disconnect — a dead client can never leave the
/// service stuck refusing new analyses.
struct InflightGuard(Arc<AppState>);

impl InflightGuard {
    /// Claims the flag, or returns None if an analysis is already in flight.
    fn acquire(state: &Arc<AppState>) -> Option<Self> {
        state
            .analyzing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;
        Some(InflightGuard(state.clone()))
    }
}

impl Drop for InflightGuard {
    fn drop(&mut self) {
        self.0.analyzing.store(false, Ordering::SeqCst);
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

fn error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn no_analysis() -> ApiError {
    error(StatusCode::NOT_FOUND, "No analysis available yet")
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Product page URL to analyze
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
    /// Total reviews reported by the provider
    pub total: u32,
    /// Reviews actually received in the payload
    pub review_count: usize,
    pub positive_percent: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    pub stats: SentimentStats,
    pub chart: ChartSeries,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SummaryParams {
    /// Chart kind: "pie" (default) or "bar"
    #[serde(default)]
    pub chart: ChartKind,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HomeResponse {
    pub message: String,
}

/// Health / root route.
#[utoipa::path(get, path = "/", responses((status = 200, body = HomeResponse)))]
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "review-pulse is running".to_string(),
    })
}

/// Triggers a fresh analysis through the external provider and installs the
/// result as the new session state.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis complete", body = AnalyzeResponse),
        (status = 400, description = "Missing URL", body = ErrorResponse),
        (status = 409, description = "Analysis already in progress", body = ErrorResponse),
        (status = 502, description = "Provider failure", body = ErrorResponse)
    ),
    tag = "analysis"
)]
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let url = req.url.trim();
    if url.is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "Product URL is required"));
    }

    let _inflight = InflightGuard::acquire(&state).ok_or_else(|| {
        error(StatusCode::CONFLICT, "An analysis is already in progress")
    })?;

    info!("analysis started for {}", url);
    {
        let mut session = state.session.write().unwrap();
        session.begin_analysis();
    }

    let outcome = provider::analyze_url(&state.http, &state.provider_url, url).await;

    let result = outcome
        .map_err(|_| error(StatusCode::BAD_GATEWAY, "Analysis request failed"))?;

    let response = AnalyzeResponse {
        positive: result.positive,
        neutral: result.neutral,
        negative: result.negative,
        total: result.total,
        review_count: result.reviews.len(),
        positive_percent: stats::aggregate(&result).positive_percent,
    };
    info!(
        "analysis finished: {} reviews ({}% positive)",
        response.review_count, response.positive_percent
    );

    let mut session = state.session.write().unwrap();
    session.install(result);

    Ok(Json(response))
}

/// Aggregate percentages plus the chart series for the requested kind.
#[utoipa::path(
    get,
    path = "/api/summary",
    params(SummaryParams),
    responses(
        (status = 200, body = SummaryResponse),
        (status = 404, description = "No analysis available", body = ErrorResponse)
    ),
    tag = "analysis"
)]
pub async fn summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let session = state.session.read().unwrap();
    let result = session.result().ok_or_else(no_analysis)?;
    Ok(Json(SummaryResponse {
        stats: stats::aggregate(result),
        chart: chart::build(result, params.chart),
    }))
}

/// Flat word list for the cloud renderer. Weights are freshly randomized on
/// every call, matching the cloud's decorative weighting.
#[utoipa::path(
    get,
    path = "/api/wordcloud",
    responses(
        (status = 200, body = [WordEntry]),
        (status = 404, description = "No analysis available", body = ErrorResponse)
    ),
    tag = "analysis"
)]
pub async fn wordcloud_words(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WordEntry>>, ApiError> {
    let session = state.session.read().unwrap();
    let result = session.result().ok_or_else(no_analysis)?;
    Ok(Json(wordcloud::extract(&result.reviews)))
}

/// The currently visible review page under the session's view state.
#[utoipa::path(
    get,
    path = "/api/reviews",
    responses(
        (status = 200, body = ReviewPage),
        (status = 404, description = "No analysis available", body = ErrorResponse)
    ),
    tag = "reviews"
)]
pub async fn reviews(State(state): State<Arc<AppState>>) -> Result<Json<ReviewPage>, ApiError> {
    let session = state.session.read().unwrap();
    session.current_page().map(Json).ok_or_else(no_analysis)
}

/// Applies one view event (filter, keyword, sort or page change) and returns
/// the newly derived page.
#[utoipa::path(
    post,
    path = "/api/view",
    request_body = ViewEvent,
    responses(
        (status = 200, body = ReviewPage),
        (status = 404, description = "No analysis available", body = ErrorResponse)
    ),
    tag = "reviews"
)]
pub async fn update_view(
    State(state): State<Arc<AppState>>,
    Json(event): Json<ViewEvent>,
) -> Result<Json<ReviewPage>, ApiError> {
    let mut session = state.session.write().unwrap();
    session.apply(event);
    session.current_page().map(Json).ok_or_else(no_analysis)
}
