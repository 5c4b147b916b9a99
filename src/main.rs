mod api;
mod chart;
mod model;
mod provider;
mod session;
mod stats;
mod view;
mod wordcloud;

use axum::{
    routing::{get, post},
    Router,
};
use dotenv::dotenv;
use std::env;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::home,
        api::analyze,
        api::summary,
        api::wordcloud_words,
        api::reviews,
        api::update_view
    ),
    components(
        schemas(
            api::HomeResponse,
            api::AnalyzeRequest,
            api::AnalyzeResponse,
            api::SummaryResponse,
            api::ErrorResponse,
            crate::model::Sentiment,
            crate::model::Review,
            crate::model::SentimentFilter,
            crate::model::SortOrder,
            crate::model::ChartKind,
            crate::chart::ChartSeries,
            crate::stats::SentimentStats,
            crate::session::ViewEvent,
            crate::view::ReviewPage,
            crate::wordcloud::WordEntry
        )
    ),
    tags(
        (name = "analysis", description = "Sentiment analysis and aggregate views"),
        (name = "reviews", description = "Filtered, sorted, paginated review pages")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let provider_url =
        env::var("PROVIDER_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let state = Arc::new(api::AppState::new(provider_url));

    let app = Router::new()
        .merge(
            SwaggerUi::new("/review-pulse-swagger")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .route("/", get(api::home))
        .route("/api/analyze", post(api::analyze))
        .route("/api/summary", get(api::summary))
        .route("/api/wordcloud", get(api::wordcloud_words))
        .route("/api/reviews", get(api::reviews))
        .route("/api/view", post(api::update_view))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    println!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
