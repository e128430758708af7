use async_trait::async_trait;

use crate::types::Article;
use crate::Result;

/// Upstream news search, consumed as an opaque HTTP service.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch the current top headlines.
    async fn top_headlines(&self) -> Result<Vec<Article>>;

    /// Search all articles matching a keyword term, newest first.
    async fn search(&self, term: &str) -> Result<Vec<Article>>;
}
