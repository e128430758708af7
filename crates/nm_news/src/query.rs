/// The distinguished term that selects top-headlines mode.
pub const LATEST_SENTINEL: &str = "latest";

/// Which upstream query shape a search term maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// The provider's "top headlines" endpoint.
    TopHeadlines,
    /// The provider's "search everything" endpoint with a keyword term.
    Search(String),
}

impl QueryMode {
    /// Normalize a raw search term into a query mode.
    ///
    /// The term is trimmed; an empty term or one equal (case-insensitively)
    /// to the `"latest"` sentinel selects top headlines, anything else a
    /// keyword search carrying the trimmed term.
    pub fn from_term(term: &str) -> Self {
        let term = term.trim();
        if term.is_empty() || term.eq_ignore_ascii_case(LATEST_SENTINEL) {
            QueryMode::TopHeadlines
        } else {
            QueryMode::Search(term.to_string())
        }
    }
}
