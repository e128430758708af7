pub mod client;
pub mod group;
pub mod query;

pub use client::NewsApiClient;
pub use group::group_by_source;
pub use query::QueryMode;

use nm_core::{NewsProvider, Result, SourceGroup};

/// Fetch articles for a search term and partition them by source.
///
/// The term selects the upstream query shape (see [`QueryMode::from_term`]).
/// Either the full grouped set is returned or the whole request fails; there
/// are no retries and no partial results.
pub async fn fetch_grouped(provider: &dyn NewsProvider, term: &str) -> Result<Vec<SourceGroup>> {
    let articles = match QueryMode::from_term(term) {
        QueryMode::TopHeadlines => provider.top_headlines().await?,
        QueryMode::Search(q) => provider.search(&q).await?,
    };
    Ok(group_by_source(articles))
}

pub mod prelude {
    pub use crate::{fetch_grouped, group_by_source, NewsApiClient, QueryMode};
    pub use nm_core::{Article, Error, NewsProvider, Result, SourceGroup};
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nm_core::{Article, Error, NewsProvider};

    struct MockProvider;

    fn article(url: &str, source: Option<&str>) -> Article {
        serde_json::from_value(match source {
            Some(name) => serde_json::json!({"url": url, "source": {"name": name}}),
            None => serde_json::json!({"url": url}),
        })
        .unwrap()
    }

    #[async_trait]
    impl NewsProvider for MockProvider {
        async fn top_headlines(&self) -> nm_core::Result<Vec<Article>> {
            Ok(vec![
                article("http://a.example/1", Some("Alpha")),
                article("http://b.example/1", Some("Beta")),
                article("http://a.example/2", Some("Alpha")),
            ])
        }

        async fn search(&self, term: &str) -> nm_core::Result<Vec<Article>> {
            assert_eq!(term, "spacex");
            Ok(vec![article("http://c.example/1", Some("Gamma"))])
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl NewsProvider for FailingProvider {
        async fn top_headlines(&self) -> nm_core::Result<Vec<Article>> {
            Err(Error::Upstream("apiKeyInvalid".to_string()))
        }

        async fn search(&self, _term: &str) -> nm_core::Result<Vec<Article>> {
            Err(Error::Upstream("apiKeyInvalid".to_string()))
        }
    }

    #[tokio::test]
    async fn latest_term_groups_top_headlines() {
        let groups = fetch_grouped(&MockProvider, "latest").await.unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].source, "Alpha");
        assert_eq!(groups[0].articles.len(), 2);
        assert_eq!(groups[1].source, "Beta");
        assert_eq!(groups[1].articles.len(), 1);
    }

    #[tokio::test]
    async fn keyword_term_uses_search_mode() {
        let groups = fetch_grouped(&MockProvider, "  spacex ").await.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].source, "Gamma");
    }

    #[tokio::test]
    async fn provider_failure_propagates_whole() {
        let err = fetch_grouped(&FailingProvider, "latest").await.unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
    }
}
