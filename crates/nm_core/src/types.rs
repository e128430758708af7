use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder source name for articles the provider delivers without one.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// A single news article as delivered by the news provider.
///
/// Field names follow the provider's JSON (`urlToImage`, `publishedAt`).
/// Everything except `url` is optional: provider responses routinely omit
/// fields and a missing field must never fail deserialization. The `url`
/// doubles as the article's identity within a result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: Option<ArticleSource>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Article {
    /// The source name this article groups under.
    pub fn source_name(&self) -> &str {
        self.source
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or(UNKNOWN_SOURCE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One publisher and its articles, in provider order.
///
/// Groups are only ever built around at least one article; an empty group is
/// never constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceGroup {
    pub source: String,
    pub articles: Vec<Article>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_name_falls_back_to_unknown() {
        let mut article: Article = serde_json::from_str(r#"{"url": "http://a.example/1"}"#).unwrap();
        assert_eq!(article.source_name(), UNKNOWN_SOURCE);

        article.source = Some(ArticleSource {
            id: None,
            name: Some(String::new()),
        });
        assert_eq!(article.source_name(), UNKNOWN_SOURCE);

        article.source = Some(ArticleSource {
            id: None,
            name: Some("BBC News".to_string()),
        });
        assert_eq!(article.source_name(), "BBC News");
    }

    #[test]
    fn article_deserializes_with_missing_fields() {
        let article: Article = serde_json::from_str(
            r#"{"url": "http://a.example/1", "title": "Hello", "publishedAt": null}"#,
        )
        .unwrap();
        assert_eq!(article.title.as_deref(), Some("Hello"));
        assert!(article.published_at.is_none());
        assert!(article.url_to_image.is_none());
    }

    #[test]
    fn article_round_trips_provider_field_names() {
        let json = serde_json::json!({
            "source": {"id": "bbc-news", "name": "BBC News"},
            "author": "A. Reporter",
            "title": "Hello",
            "description": "World",
            "url": "http://a.example/1",
            "urlToImage": "http://a.example/1.jpg",
            "publishedAt": "2024-05-01T12:00:00Z",
            "content": "Hello world"
        });
        let article: Article = serde_json::from_value(json).unwrap();
        let back = serde_json::to_value(&article).unwrap();
        assert_eq!(back["urlToImage"], "http://a.example/1.jpg");
        assert_eq!(back["publishedAt"], "2024-05-01T12:00:00Z");
        assert_eq!(back["source"]["name"], "BBC News");
    }
}
