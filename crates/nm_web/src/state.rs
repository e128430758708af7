use std::sync::Arc;

use nm_core::NewsProvider;
use nm_inference::SummaryGateway;

/// Collaborators shared across requests.
///
/// Built once at startup; individual requests hold no further state.
pub struct AppState {
    pub news: Arc<dyn NewsProvider>,
    pub summarizer: SummaryGateway,
}
