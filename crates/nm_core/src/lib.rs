pub mod error;
pub mod models;
pub mod news;
pub mod types;

pub use error::Error;
pub use models::GenerativeModel;
pub use news::NewsProvider;
pub use types::{Article, ArticleSource, SourceGroup, UNKNOWN_SOURCE};

pub type Result<T> = std::result::Result<T, Error>;
