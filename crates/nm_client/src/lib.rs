pub mod api;
pub mod session;
pub mod state;

pub use api::FacadeClient;
pub use session::Session;
pub use state::ViewState;

/// Topics offered by the UI as one-click searches.
pub const TRENDING_TOPICS: &[&str] = &[
    "SpaceX",
    "Entertainment",
    "Stock Market",
    "AI",
    "Travel",
    "Business",
    "Culture",
    "Art",
];

pub mod prelude {
    pub use crate::{FacadeClient, Session, ViewState, TRENDING_TOPICS};
    pub use nm_core::{Article, Error, Result, SourceGroup};
}
