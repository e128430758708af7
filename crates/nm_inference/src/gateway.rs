use std::sync::Arc;

use nm_core::{Error, GenerativeModel, Result};

/// Fixed fallback returned by the lenient path when generation fails.
pub const FALLBACK_SUMMARY: &str = "Unable to generate summary.";

/// Summarization gateway over an injected generative backend.
///
/// Two entry points with deliberately divergent failure behavior:
/// [`SummaryGateway::summarize_strict`] validates its input and fails loud,
/// [`SummaryGateway::summarize_lenient`] degrades any failure to a fixed
/// placeholder string. Neither retries.
#[derive(Clone)]
pub struct SummaryGateway {
    model: Arc<dyn GenerativeModel>,
}

impl SummaryGateway {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Summarize an article's text in a few sentences.
    ///
    /// Empty or whitespace-only text is rejected before any provider call.
    pub async fn summarize_strict(&self, text: &str) -> Result<String> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Validation("text is required".to_string()));
        }

        let prompt =
            format!("Summarise the following news article in 2-3 concise sentences:\n\n{text}");
        self.model.generate(&prompt).await
    }

    /// Summarize arbitrary text, degrading to [`FALLBACK_SUMMARY`] on failure.
    pub async fn summarize_lenient(&self, text: &str) -> String {
        let prompt = format!("Summarize the following text clearly and concisely:\n\n{text}");
        match self.model.generate(&prompt).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!("summarization failed: {e}");
                FALLBACK_SUMMARY.to_string()
            }
        }
    }
}
