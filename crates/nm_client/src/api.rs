use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use nm_core::{Error, Result, SourceGroup};

const NEWS_TIMEOUT: Duration = Duration::from_secs(10);
const SUMMARIZE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

#[derive(Debug, Deserialize)]
struct SummaryBody {
    summary: String,
}

/// HTTP client for the facade's two endpoints.
#[derive(Debug, Clone)]
pub struct FacadeClient {
    client: Client,
    base_url: Url,
}

impl FacadeClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| Error::InvalidUrl(e.to_string()))?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::InvalidUrl(e.to_string()))
    }

    /// `GET /api/news?query=…` → grouped articles.
    pub async fn fetch_news(&self, term: &str) -> Result<Vec<SourceGroup>> {
        let response = self
            .client
            .get(self.endpoint("/api/news")?)
            .query(&[("query", term.trim())])
            .timeout(NEWS_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error(response, "Failed to fetch news").await);
        }
        Ok(response.json().await?)
    }

    /// `POST /api/summarise` → summary text (strict endpoint).
    pub async fn summarise(&self, text: &str) -> Result<String> {
        self.post_for_summary("/api/summarise", text, "Failed to summarise")
            .await
    }

    /// `POST /api/ai/summarize` → summary text (lenient endpoint).
    pub async fn get_summary(&self, text: &str) -> Result<String> {
        self.post_for_summary("/api/ai/summarize", text, "Failed to summarise")
            .await
    }

    async fn post_for_summary(&self, path: &str, text: &str, fallback: &str) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint(path)?)
            .json(&json!({"text": text}))
            .timeout(SUMMARIZE_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error(response, fallback).await);
        }
        let body: SummaryBody = response.json().await?;
        Ok(body.summary)
    }
}

/// Turn a non-success facade response into an [`Error::Upstream`], preferring
/// the `{error}` body when one parses.
async fn upstream_error(response: reqwest::Response, fallback: &str) -> Error {
    let body: ErrorBody = response.json().await.unwrap_or_default();
    if body.error.is_empty() {
        Error::Upstream(fallback.to_string())
    } else {
        Error::Upstream(body.error)
    }
}
