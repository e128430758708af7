use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use nm_core::Error;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl SummarizeRequest {
    /// The request text, if present and non-blank.
    fn text(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

/// `GET /api/news?query=…` — grouped articles, or a generic 500 body.
pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NewsQuery>,
) -> Response {
    let term = params.query.unwrap_or_else(|| "latest".to_string());

    match nm_news::fetch_grouped(state.news.as_ref(), &term).await {
        Ok(groups) => (StatusCode::OK, Json(groups)).into_response(),
        Err(e) => {
            // Detail stays server-side; the client gets a generic body.
            tracing::error!("❌ news fetch failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to fetch news"})),
            )
                .into_response()
        }
    }
}

/// `POST /api/summarise` — strict path: validation and provider failures
/// surface as error responses.
pub async fn summarise(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeRequest>,
) -> Response {
    let Some(text) = request.text() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Text is required"})),
        )
            .into_response();
    };

    match state.summarizer.summarize_strict(text).await {
        Ok(summary) => (StatusCode::OK, Json(json!({"summary": summary}))).into_response(),
        Err(Error::Validation(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Text is required"})),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("❌ summarise failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to summarise"})),
            )
                .into_response()
        }
    }
}

/// `POST /api/ai/summarize` — lenient path: after validation, provider
/// failures degrade to a placeholder summary instead of an error status.
pub async fn ai_summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeRequest>,
) -> Response {
    let Some(text) = request.text() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Text is required for summarization"})),
        )
            .into_response();
    };

    let summary = state.summarizer.summarize_lenient(text).await;
    (StatusCode::OK, Json(json!({"summary": summary}))).into_response()
}
