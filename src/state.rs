use std::sync::Arc;
use handlebars::Handlebars;
use uuid::Uuid;

use crate::frontend::page::build_registry;
use crate::frontend::store::SessionStore;
use crate::translate::TranslationClient;

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<dyn TranslationClient>,
    pub sessions: Arc<SessionStore>, // session cookie -> form state
    pub templates: Arc<Handlebars<'static>>,
}

impl AppState {
    pub fn new(translator: Arc<dyn TranslationClient>) -> anyhow::Result<Self> {
        Self::with_sessions(translator, SessionStore::default())
    }

    pub fn with_sessions(
        translator: Arc<dyn TranslationClient>,
        sessions: SessionStore,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            translator,
            sessions: Arc::new(sessions),
            templates: Arc::new(build_registry()?),
        })
    }

    pub fn generate_session_uid(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
