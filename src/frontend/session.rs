use serde::Deserialize;

use super::languages::{is_supported, DEFAULT_SOURCE, DEFAULT_TARGET};
use crate::translate::TranslateRequest;

pub const MAX_CHARS: usize = 5000;

/// What the last translate action produced. Failures stay distinct from
/// translations all the way to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Translated(String),
    Failed(String),
}

/// Per-browser state, keyed by the session cookie.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
    pub outcome: Option<Outcome>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            text: String::new(),
            source_language: DEFAULT_SOURCE.to_string(),
            target_language: DEFAULT_TARGET.to_string(),
            outcome: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormAction {
    #[default]
    Translate,
    Swap,
    Clear,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateForm {
    #[serde(default)]
    pub action: FormAction,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_source")]
    pub source_language: String,
    #[serde(default = "default_target")]
    pub target_language: String,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

impl SessionState {
    /// Remember what the user typed and selected. Text is kept to `MAX_CHARS`.
    pub fn record_form(&mut self, form: &TranslateForm) {
        self.text = form.text.chars().take(MAX_CHARS).collect();
        self.source_language = form.source_language.clone();
        self.target_language = form.target_language.clone();
    }

    pub fn swap_languages(&mut self) {
        std::mem::swap(&mut self.source_language, &mut self.target_language);
        self.outcome = None;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.outcome = None;
    }
}

/// Checks the form before any model call. `Err` is the warning shown to the user.
pub fn validate_form(form: &TranslateForm) -> Result<TranslateRequest, String> {
    if form.text.trim().is_empty() {
        return Err("Please enter some text to translate.".to_string());
    }
    if form.text.chars().count() > MAX_CHARS {
        return Err(format!("Text exceeds the {} character limit.", MAX_CHARS));
    }
    for language in [&form.source_language, &form.target_language] {
        if !is_supported(language) {
            return Err(format!("Unsupported language: {}", language));
        }
    }
    if form.source_language == form.target_language {
        return Err("Source and target languages must be different.".to_string());
    }
    Ok(TranslateRequest {
        text: form.text.clone(),
        source_language: form.source_language.clone(),
        target_language: form.target_language.clone(),
    })
}
