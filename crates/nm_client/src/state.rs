use std::collections::HashMap;

use nm_core::SourceGroup;

/// Maximum number of recent search terms remembered.
const HISTORY_LIMIT: usize = 5;

/// The default query shown on first load and after a home click.
pub const DEFAULT_QUERY: &str = "latest";

/// Ephemeral UI state for one page session.
///
/// All mutation goes through the transition methods below, so the idle →
/// loading → success/error cycle is testable without any rendering
/// environment. Summaries accumulate for the lifetime of the session and are
/// never evicted.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub query: String,
    pub groups: Vec<SourceGroup>,
    pub loading: bool,
    pub error: Option<String>,
    /// Most-recent-first, deduplicated, at most [`HISTORY_LIMIT`] entries.
    pub search_history: Vec<String>,
    /// Summary text keyed by article URL.
    pub summaries: HashMap<String, String>,
    /// URL of the article whose summary is currently in flight, if any.
    pub summarizing: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            groups: Vec::new(),
            loading: false,
            error: None,
            search_history: vec![DEFAULT_QUERY.to_string()],
            summaries: HashMap::new(),
            summarizing: None,
        }
    }

    pub fn set_query(&mut self, term: &str) {
        self.query = term.to_string();
    }

    pub fn reset_to_latest(&mut self) {
        self.query = DEFAULT_QUERY.to_string();
    }

    /// A fetch left the station: show the spinner, clear any stale banner.
    pub fn fetch_started(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// A fetch came back: the article list is fully replaced, never merged,
    /// and the successful term joins the recent-search history.
    pub fn fetch_succeeded(&mut self, term: &str, groups: Vec<SourceGroup>) {
        self.groups = groups;
        self.loading = false;
        self.error = None;
        self.record_search(term);
    }

    pub fn fetch_failed(&mut self, message: impl Into<String>) {
        self.groups.clear();
        self.loading = false;
        self.error = Some(message.into());
    }

    /// The error banner is dismissible and does not block further actions.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Try to begin summarizing the article at `url`.
    ///
    /// Returns `false` while another summary is in flight: only one in-flight
    /// indicator is representable at a time.
    pub fn summarize_started(&mut self, url: &str) -> bool {
        if self.summarizing.is_some() {
            return false;
        }
        self.summarizing = Some(url.to_string());
        true
    }

    pub fn summarize_succeeded(&mut self, url: &str, summary: String) {
        self.summaries.insert(url.to_string(), summary);
        self.summarizing = None;
    }

    pub fn summarize_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.summarizing = None;
    }

    fn record_search(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() || self.search_history.iter().any(|t| t == term) {
            return;
        }
        self.search_history.insert(0, term.to_string());
        self.search_history.truncate(HISTORY_LIMIT);
    }

    /// Recent searches excluding the current head, as offered by the UI.
    pub fn recent_searches(&self) -> &[String] {
        if self.search_history.len() > 1 {
            &self.search_history[1..]
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(names: &[&str]) -> Vec<SourceGroup> {
        names
            .iter()
            .map(|name| SourceGroup {
                source: name.to_string(),
                articles: vec![serde_json::from_value(
                    serde_json::json!({"url": format!("http://{name}.example/1")}),
                )
                .unwrap()],
            })
            .collect()
    }

    #[test]
    fn fetch_cycle_replaces_the_list_and_clears_errors() {
        let mut state = ViewState::new();
        state.fetch_failed("Failed to fetch news. Please try again later.");
        assert!(state.error.is_some());
        assert!(state.groups.is_empty());

        state.fetch_started();
        assert!(state.loading);
        assert!(state.error.is_none());

        state.fetch_succeeded("SpaceX", groups(&["Alpha", "Beta"]));
        assert!(!state.loading);
        assert_eq!(state.groups.len(), 2);

        // A later fetch fully replaces, never merges.
        state.fetch_started();
        state.fetch_succeeded("AI", groups(&["Gamma"]));
        assert_eq!(state.groups.len(), 1);
        assert_eq!(state.groups[0].source, "Gamma");
    }

    #[test]
    fn failed_fetch_clears_articles_and_sets_a_dismissible_banner() {
        let mut state = ViewState::new();
        state.fetch_succeeded("latest", groups(&["Alpha"]));
        state.fetch_started();
        state.fetch_failed("Request timed out. Please try again.");

        assert!(state.groups.is_empty());
        assert_eq!(
            state.error.as_deref(),
            Some("Request timed out. Please try again.")
        );

        state.dismiss_error();
        assert!(state.error.is_none());
    }

    #[test]
    fn history_is_bounded_and_deduplicated() {
        let mut state = ViewState::new();
        for term in ["a", "b", "c", "d", "e", "f"] {
            state.fetch_succeeded(term, vec![]);
        }
        assert_eq!(state.search_history.len(), HISTORY_LIMIT);
        assert_eq!(state.search_history[0], "f");

        // Submitting the same term twice in a row stores it once.
        state.fetch_succeeded("f", vec![]);
        assert_eq!(state.search_history[0], "f");
        assert_eq!(
            state
                .search_history
                .iter()
                .filter(|t| t.as_str() == "f")
                .count(),
            1
        );
    }

    #[test]
    fn recent_searches_skip_the_current_head() {
        let mut state = ViewState::new();
        assert!(state.recent_searches().is_empty());

        state.fetch_succeeded("SpaceX", vec![]);
        assert_eq!(state.recent_searches(), ["latest"]);
    }

    #[test]
    fn only_one_summary_is_in_flight_at_a_time() {
        let mut state = ViewState::new();
        assert!(state.summarize_started("http://a.example/1"));
        assert!(!state.summarize_started("http://b.example/1"));
        assert_eq!(state.summarizing.as_deref(), Some("http://a.example/1"));

        state.summarize_succeeded("http://a.example/1", "Summary A".to_string());
        assert!(state.summarizing.is_none());

        // The second article can re-enter the flow once the first completes.
        assert!(state.summarize_started("http://b.example/1"));
    }

    #[test]
    fn summaries_accumulate_and_are_never_evicted() {
        let mut state = ViewState::new();
        state.summarize_started("http://a.example/1");
        state.summarize_succeeded("http://a.example/1", "Summary A".to_string());
        state.summarize_started("http://b.example/1");
        state.summarize_succeeded("http://b.example/1", "Summary B".to_string());

        // A failed fetch leaves the cache alone.
        state.fetch_started();
        state.fetch_failed("Failed to fetch news. Please try again later.");
        assert_eq!(state.summaries.len(), 2);
        assert_eq!(
            state.summaries.get("http://a.example/1").map(String::as_str),
            Some("Summary A")
        );
    }

    #[test]
    fn summarize_failure_sets_the_banner_and_frees_the_slot() {
        let mut state = ViewState::new();
        state.summarize_started("http://a.example/1");
        state.summarize_failed("Failed to generate summary. Please try again.");
        assert!(state.summarizing.is_none());
        assert!(state.summaries.is_empty());
        assert!(state.error.is_some());
    }
}
