use axum::{body::Bytes, extract::State, Json};
use serde_json::{json, Value};

use crate::error::{Result, TransLinguaError, MISSING_FIELDS_MESSAGE};
use crate::frontend::languages::LANGUAGES;
use crate::state::AppState;
use crate::translate::{translate_text, TranslateRequest, TranslateResponse};

pub const SERVICE_NAME: &str = "TransLingua Translation API";

/// Falsy JSON counts as no body at all.
fn is_empty_payload(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Turn a raw request body into a request with all three fields non-empty.
pub fn parse_translate_request(body: &[u8]) -> Result<TranslateRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(TransLinguaError::NoData);
    }

    let data: Value = serde_json::from_slice(body)
        .map_err(|e| TransLinguaError::InvalidRequest(format!("Invalid JSON body: {}", e)))?;
    if is_empty_payload(&data) {
        return Err(TransLinguaError::NoData);
    }

    let field = |name: &str| {
        data.get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    match (field("text"), field("source_language"), field("target_language")) {
        (Some(text), Some(source_language), Some(target_language)) => Ok(TranslateRequest {
            text,
            source_language,
            target_language,
        }),
        _ => Err(TransLinguaError::InvalidRequest(
            MISSING_FIELDS_MESSAGE.to_string(),
        )),
    }
}

/// `POST /api/translate`
pub async fn translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranslateResponse>> {
    let request = parse_translate_request(&body)?;
    let translated_text = translate_text(state.translator.as_ref(), &request).await?;

    Ok(Json(TranslateResponse {
        success: true,
        original_text: request.text,
        translated_text,
        source_language: request.source_language,
        target_language: request.target_language,
    }))
}

/// `GET /api/health`. Never touches the provider.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME
    }))
}

/// `GET /api/languages`
pub async fn list_languages() -> Json<Value> {
    Json(json!({ "languages": LANGUAGES }))
}
