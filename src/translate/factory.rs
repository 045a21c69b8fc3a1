use std::sync::Arc;
use tracing::info;

use super::gemini::GeminiClient;
use super::interface::TranslationClient;
use super::openai_compatible::OpenAICompatibleClient;
use crate::config::LlmConfig;
use crate::error::{Result, TransLinguaError};

/// Factory for the translation client shared by every request
pub struct TranslationClientFactory;

impl TranslationClientFactory {
    /// Create the client named by `config.provider`.
    ///
    /// # Arguments
    /// * `config` - Provider, model and optional base URL
    /// * `api_key` - Credential already validated at startup
    pub fn create_client(config: &LlmConfig, api_key: &str) -> Result<Arc<dyn TranslationClient>> {
        info!("Initializing translation client: {}", config.provider);

        match config.provider.as_str() {
            "gemini" | "gemini_llm" => Ok(Arc::new(GeminiClient::new(
                config.model.clone(),
                api_key.to_string(),
                config.base_url.clone(),
            ))),
            "openai_compatible" | "openai_compatible_llm" | "ollama_llm" => {
                Ok(Arc::new(OpenAICompatibleClient::new(
                    config.model.clone(),
                    api_key.to_string(),
                    config.base_url.clone(),
                )))
            }
            other => Err(TransLinguaError::Config(format!(
                "Unsupported LLM provider: {}",
                other
            ))),
        }
    }
}
