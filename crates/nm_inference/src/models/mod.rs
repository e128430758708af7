pub mod dummy;
pub mod gemini;

pub use dummy::DummyModel;
pub use gemini::GeminiModel;

use std::sync::Arc;

use nm_core::{Error, GenerativeModel, Result};

/// Construct a generative backend by name.
///
/// `"gemini"` talks to the Google generative-language API (the key may be
/// absent, in which case the first generation fails); `"dummy"` is the
/// offline backend.
pub fn create_model(name: &str, api_key: Option<String>) -> Result<Arc<dyn GenerativeModel>> {
    match name {
        "gemini" => Ok(Arc::new(GeminiModel::new(api_key))),
        "dummy" => Ok(Arc::new(DummyModel)),
        other => Err(Error::Summarization(format!("unknown model: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_model_knows_its_backends() {
        assert_eq!(create_model("gemini", None).unwrap().name(), "Gemini");
        assert_eq!(create_model("dummy", None).unwrap().name(), "Dummy");
        assert!(create_model("gpt-42", None).is_err());
    }
}
