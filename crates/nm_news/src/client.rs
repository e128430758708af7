use std::fmt;
use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;

use nm_core::{Article, Error, NewsProvider, Result};

const BASE_URL: &str = "https://newsapi.org/v2";
const PAGE_SIZE: u32 = 30;
const COUNTRY: &str = "us";
const LANGUAGE: &str = "en";

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Article>,
}

/// Client for the newsapi.org HTTP API.
///
/// The API key travels as a query parameter. Construction never fails on a
/// missing key; the first request does instead.
pub struct NewsApiClient {
    client: Arc<Client>,
    api_key: Option<String>,
    base_url: String,
}

impl NewsApiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::Upstream("news API key is not configured".to_string()))
    }

    async fn fetch(&self, url: String, params: &[(&str, &str)]) -> Result<Vec<Article>> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await?
            .json::<NewsApiResponse>()
            .await?;
        unwrap_envelope(response)
    }
}

fn unwrap_envelope(response: NewsApiResponse) -> Result<Vec<Article>> {
    if response.status != "ok" {
        let message = response
            .message
            .unwrap_or_else(|| "Failed to fetch news".to_string());
        tracing::error!("news provider returned an error: {message}");
        return Err(Error::Upstream(message));
    }
    Ok(response.articles)
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait::async_trait]
impl NewsProvider for NewsApiClient {
    async fn top_headlines(&self) -> Result<Vec<Article>> {
        let key = self.key()?;
        let page_size = PAGE_SIZE.to_string();
        tracing::debug!("fetching top headlines");
        self.fetch(
            format!("{}/top-headlines", self.base_url),
            &[("country", COUNTRY), ("pageSize", &page_size), ("apiKey", key)],
        )
        .await
    }

    async fn search(&self, term: &str) -> Result<Vec<Article>> {
        let key = self.key()?;
        let page_size = PAGE_SIZE.to_string();
        tracing::debug!("searching articles for {term:?}");
        self.fetch(
            format!("{}/everything", self.base_url),
            &[
                ("q", term),
                ("pageSize", &page_size),
                ("sortBy", "publishedAt"),
                ("language", LANGUAGE),
                ("apiKey", key),
            ],
        )
        .await
    }
}
