pub mod gateway;
pub mod models;

pub use gateway::{SummaryGateway, FALLBACK_SUMMARY};
pub use models::create_model;

pub mod prelude {
    pub use crate::models::create_model;
    pub use crate::{SummaryGateway, FALLBACK_SUMMARY};
    pub use nm_core::{Error, GenerativeModel, Result};
}
