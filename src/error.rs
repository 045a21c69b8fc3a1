use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const NO_DATA_MESSAGE: &str = "No data provided";
pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required fields: text, source_language, target_language";

#[derive(Error, Debug)]
pub enum TransLinguaError {
    #[error("{0}")]
    MissingCredential(String),

    #[error("{}", NO_DATA_MESSAGE)]
    NoData,

    #[error("{0}")]
    InvalidRequest(String),

    /// The model provider call failed. Carries the stringified cause.
    #[error("{0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),
}

pub type Result<T> = std::result::Result<T, TransLinguaError>;

impl From<reqwest::Error> for TransLinguaError {
    fn from(err: reqwest::Error) -> Self {
        TransLinguaError::ExternalService(err.to_string())
    }
}

impl TransLinguaError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TransLinguaError::NoData | TransLinguaError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TransLinguaError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            TransLinguaError::NoData | TransLinguaError::InvalidRequest(_) => {
                json!({ "error": self.to_string() })
            }
            _ => json!({ "success": false, "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
