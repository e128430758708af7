use async_trait::async_trait;

use crate::Result;

/// A generative-text backend capable of completing a single prompt.
///
/// Implementations are constructed once at startup and injected into the
/// summarization gateway so tests can substitute fakes.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    fn name(&self) -> &str;

    /// Complete a prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
