use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::Result;
use super::prompt::build_prompt;

/// Body accepted by `POST /api/translate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub success: bool,
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
}

/// A generative model endpoint that turns one prompt into one text reply.
/// Implementations hold no per-call state and are shared across requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationClient: Send + Sync {
    /// Send `prompt` to the configured model and return its text output verbatim.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Build the prompt for `request` and run it through `client`.
pub async fn translate_text(
    client: &dyn TranslationClient,
    request: &TranslateRequest,
) -> Result<String> {
    info!(
        "Translating {} chars from {} to {}",
        request.text.chars().count(),
        request.source_language,
        request.target_language
    );
    let prompt = build_prompt(
        &request.text,
        &request.source_language,
        &request.target_language,
    );
    client.generate(&prompt).await.map_err(|e| {
        error!("Translation failed: {}", e);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransLinguaError;

    fn request() -> TranslateRequest {
        TranslateRequest {
            text: "Hello".to_string(),
            source_language: "English".to_string(),
            target_language: "Spanish".to_string(),
        }
    }

    #[tokio::test]
    async fn test_translate_text_sends_built_prompt() {
        let mut client = MockTranslationClient::new();
        client
            .expect_generate()
            .withf(|prompt: &str| prompt == build_prompt("Hello", "English", "Spanish"))
            .times(1)
            .returning(|_| Ok("  Hola\n".to_string()));

        let out = translate_text(&client, &request()).await.unwrap();
        assert_eq!(out, "  Hola\n");
    }

    #[tokio::test]
    async fn test_translate_text_propagates_error() {
        let mut client = MockTranslationClient::new();
        client
            .expect_generate()
            .times(1)
            .returning(|_| Err(TransLinguaError::ExternalService("quota exceeded".to_string())));

        let err = translate_text(&client, &request()).await.unwrap_err();
        assert!(matches!(err, TransLinguaError::ExternalService(ref m) if m == "quota exceeded"));
    }
}
