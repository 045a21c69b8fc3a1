pub mod languages;
pub mod page;
pub mod session;
pub mod store;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Response},
    Form,
};
use tracing::debug;

use crate::error::TransLinguaError;
use crate::state::AppState;
use crate::translate::translate_text;
use page::{render_page, PageView};
use session::{validate_form, FormAction, Outcome, SessionState, TranslateForm};

pub const SESSION_COOKIE: &str = "translingua_session";

/// Session id from the request cookie when it names a live session, otherwise
/// a fresh one. The flag is true when the cookie must be set on the response.
fn session_id(state: &AppState, headers: &HeaderMap) -> (String, bool) {
    let existing = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && state.sessions.contains(value))
        .map(|(_, value)| value.to_string());

    match existing {
        Some(id) => (id, false),
        None => (state.generate_session_uid(), true),
    }
}

fn load_session(state: &AppState, id: &str) -> SessionState {
    state.sessions.get(id).unwrap_or_default()
}

fn respond(
    state: &AppState,
    id: &str,
    is_new: bool,
    session: &SessionState,
    notice: Option<&str>,
) -> Result<Response, TransLinguaError> {
    let body = render_page(&state.templates, &PageView::new(session, notice))?;
    let mut response = Html(body).into_response();
    if is_new {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    Ok(response)
}

/// `GET /`
pub async fn show_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, TransLinguaError> {
    let (id, is_new) = session_id(&state, &headers);
    let session = load_session(&state, &id);
    state.sessions.insert(id.clone(), session.clone());
    respond(&state, &id, is_new, &session, None)
}

/// `POST /`: one form action, then the re-rendered page.
pub async fn submit_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<TranslateForm>,
) -> Result<Response, TransLinguaError> {
    let (id, is_new) = session_id(&state, &headers);
    let mut session = load_session(&state, &id);
    let mut notice = None;

    match form.action {
        FormAction::Translate => {
            session.record_form(&form);
            match validate_form(&form) {
                Ok(request) => {
                    // The session is cloned out so no map guard is held across the call.
                    session.outcome = Some(
                        match translate_text(state.translator.as_ref(), &request).await {
                            Ok(text) => Outcome::Translated(text),
                            Err(e) => Outcome::Failed(e.to_string()),
                        },
                    );
                }
                Err(warning) => {
                    debug!("Rejected form input: {}", warning);
                    notice = Some(warning);
                }
            }
        }
        FormAction::Swap => {
            session.record_form(&form);
            session.swap_languages();
        }
        FormAction::Clear => {
            session.source_language = form.source_language.clone();
            session.target_language = form.target_language.clone();
            session.clear();
        }
    }

    state.sessions.insert(id.clone(), session.clone());
    respond(&state, &id, is_new, &session, notice.as_deref())
}
