use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

use nm_core::Result;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/news", get(handlers::get_news))
        .route("/api/summarise", post(handlers::summarise))
        .route("/api/ai/summarize", post(handlers::ai_summarize))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Bind the facade on the given port and serve until shutdown.
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("🚀 Server running on http://localhost:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::AppState;
    pub use nm_core::{Article, Error, Result, SourceGroup};
}
