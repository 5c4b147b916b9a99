//! Client for the external analysis provider.
//!
//! The provider scrapes the product page and scores every review; this
//! service never classifies anything itself. Any transport error or
//! non-success status collapses into one generic failure — error payloads
//! are logged but never parsed or forwarded.

use anyhow::{anyhow, Result};
use serde_json::json;
use tracing::warn;

use crate::model::AnalysisResult;

/// Requests a fresh analysis for the given product URL.
pub async fn analyze_url(
    client: &reqwest::Client,
    base_url: &str,
    url: &str,
) -> Result<AnalysisResult> {
    let endpoint = format!("{}/api/analyze", base_url.trim_end_matches('/'));

    let response = client
        .post(&endpoint)
        .json(&json!({ "url": url }))
        .send()
        .await
        .map_err(|e| {
            warn!("analysis provider unreachable: {}", e);
            anyhow!("analysis request failed")
        })?;

    if !response.status().is_success() {
        warn!("analysis provider returned {}", response.status());
        return Err(anyhow!("analysis request failed"));
    }

    response.json::<AnalysisResult>().await.map_err(|e| {
        warn!("analysis provider response parse error: {}", e);
        anyhow!("analysis request failed")
    })
}
