use std::fmt;

use nm_core::{GenerativeModel, Result};

/// Offline backend: echoes the first 20 words of the prompt.
///
/// Useful for tests and for running the server without a generative API key.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

#[async_trait::async_trait]
impl GenerativeModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let words: Vec<&str> = prompt.split_whitespace().take(20).collect();
        Ok(words.join(" "))
    }
}
