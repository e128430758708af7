use nm_core::{Article, Error};

use crate::api::FacadeClient;
use crate::state::{ViewState, DEFAULT_QUERY};

const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";
const FETCH_FAILED_MESSAGE: &str = "Failed to fetch news. Please try again later.";
const SUMMARY_FAILED_MESSAGE: &str = "Failed to generate summary. Please try again.";
const NO_CONTENT_MESSAGE: &str = "Cannot summarize: Article content not available.";

/// One interactive session against the facade: the API client plus the view
/// state it drives.
///
/// There is no cancellation; a fast-follow trigger issues a new independent
/// call, and overlapping calls may complete out of order.
#[derive(Debug)]
pub struct Session {
    api: FacadeClient,
    pub state: ViewState,
}

impl Session {
    pub fn new(api: FacadeClient) -> Self {
        Self {
            api,
            state: ViewState::new(),
        }
    }

    /// Initial page load: fetch the latest headlines.
    pub async fn initial_load(&mut self) {
        self.fetch(DEFAULT_QUERY.to_string()).await;
    }

    /// Manual search submission with whatever is in the query box.
    pub async fn submit_search(&mut self) {
        let term = self.state.query.clone();
        self.fetch(term).await;
    }

    /// Trending-topic or recent-search click.
    pub async fn select_topic(&mut self, topic: &str) {
        self.state.set_query(topic);
        self.fetch(topic.to_string()).await;
    }

    /// Home click: reset to the latest headlines.
    pub async fn go_home(&mut self) {
        self.state.reset_to_latest();
        self.fetch(DEFAULT_QUERY.to_string()).await;
    }

    /// Manual refresh of the current query.
    pub async fn refresh(&mut self) {
        self.submit_search().await;
    }

    async fn fetch(&mut self, term: String) {
        if term.trim().is_empty() {
            return;
        }
        self.state.fetch_started();
        match self.api.fetch_news(&term).await {
            Ok(groups) => self.state.fetch_succeeded(&term, groups),
            Err(e) => {
                tracing::error!("news fetch failed: {e}");
                self.state.fetch_failed(fetch_error_message(&e));
            }
        }
    }

    /// Request an AI summary for one article.
    ///
    /// A no-op while another summary is in flight; successful summaries stay
    /// cached by URL for the rest of the session.
    pub async fn summarize_article(&mut self, article: &Article) {
        let Some(text) = compose_summary_text(article) else {
            self.state.set_error(NO_CONTENT_MESSAGE);
            return;
        };
        if !self.state.summarize_started(&article.url) {
            return;
        }

        match self.api.summarise(&text).await {
            Ok(summary) => self.state.summarize_succeeded(&article.url, summary),
            Err(e) => {
                tracing::error!("summarise failed: {e}");
                self.state.summarize_failed(SUMMARY_FAILED_MESSAGE);
            }
        }
    }
}

/// Build the text sent to the summarizer: `"{title} - {description}"`,
/// trimmed. `None` when the article carries neither.
fn compose_summary_text(article: &Article) -> Option<String> {
    let title = article.title.as_deref().unwrap_or_default();
    let description = article.description.as_deref().unwrap_or_default();
    if title.is_empty() && description.is_empty() {
        return None;
    }
    Some(format!("{title} - {description}").trim().to_string())
}

/// Timeouts get their own banner copy; everything else is generic.
fn fetch_error_message(error: &Error) -> &'static str {
    if error.is_timeout() {
        TIMEOUT_MESSAGE
    } else {
        FETCH_FAILED_MESSAGE
    }
}
