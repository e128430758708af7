use tracing::{info, warn};

const DEFAULT_PORT: u16 = 5000;

/// Process configuration, read once at startup.
///
/// A missing API key is logged, not fatal: the server still starts and the
/// first request needing that key fails instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub news_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env_var("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self {
            news_api_key: env_var("NEWS_API_KEY"),
            gemini_api_key: env_var("GEMINI_API_KEY"),
            port,
        }
    }

    pub fn log_key_presence(&self) {
        info!("✅ GEMINI_API_KEY loaded: {}", self.gemini_api_key.is_some());
        info!("✅ NEWS_API_KEY loaded: {}", self.news_api_key.is_some());
        if self.gemini_api_key.is_none() {
            warn!("GEMINI_API_KEY is not set; summarization requests will fail");
        }
        if self.news_api_key.is_none() {
            warn!("NEWS_API_KEY is not set; news requests will fail");
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
