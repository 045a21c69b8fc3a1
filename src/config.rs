use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::error::TransLinguaError;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub llm_config: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Settings for the single model every translation goes to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            base_url: None,
            api_key: None,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }
        let content = substitute_env_vars(&fs::read_to_string(path)?);

        let path_lower = path.to_lowercase();
        let config = if path_lower.ends_with(".json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config)
    }

    /// Loads the first readable file from `paths`, falling back to defaults.
    /// Returns the path that was used, if any.
    pub fn discover(paths: &[String]) -> (Self, Option<String>) {
        for path in paths {
            match Config::load(path) {
                Ok(cfg) => return (cfg, Some(path.clone())),
                Err(e) => {
                    debug!("Failed to load config from {}: {}", path, e);
                    continue;
                }
            }
        }
        (Config::default(), None)
    }

    /// Applies `TRANSLINGUA_*` and credential overrides from the environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("TRANSLINGUA_HOST") {
            self.system_config.host = host;
        }
        if let Some(port) = lookup("TRANSLINGUA_PORT").and_then(|p| p.parse().ok()) {
            self.system_config.port = port;
        }
        if let Some(model) = lookup("TRANSLINGUA_MODEL") {
            self.llm_config.model = model;
        }
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.is_empty()) {
            self.llm_config.api_key = Some(key);
        }
    }

    /// The credential is required; startup stops here when it is absent.
    pub fn require_api_key(&self) -> std::result::Result<&str, TransLinguaError> {
        match self.llm_config.api_key.as_deref() {
            Some(key) if !key.is_empty() && !is_unresolved_placeholder(key) => Ok(key),
            _ => Err(TransLinguaError::MissingCredential(format!(
                "{} not found in environment variables",
                API_KEY_ENV
            ))),
        }
    }
}

/// Replace `${VAR_NAME}` with the environment value, leaving unknown names as-is.
pub fn substitute_env_vars(content: &str) -> String {
    let pattern = Regex::new(r"\$\{(\w+)\}").expect("static regex");
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

fn is_unresolved_placeholder(value: &str) -> bool {
    value.starts_with("${") && value.ends_with('}')
}
