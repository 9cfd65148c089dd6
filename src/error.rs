use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinkError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("not a valid URL: {0}")]
    Validation(String),
    #[error("short url not found: {0}")]
    NotFound(String),
    #[error("no free identifier after {attempts} attempts")]
    Capacity { attempts: usize },
}

impl LinkError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LinkError::Validation(_) => StatusCode::BAD_REQUEST,
            LinkError::NotFound(_) => StatusCode::NOT_FOUND,
            LinkError::Capacity { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for LinkError {
    fn into_response(self) -> Response {
        let message = match &self {
            LinkError::Validation(_) => "not a valid URL".to_string(),
            other => other.to_string(),
        };
        (self.status_code(), Json(json!({ "error": message }))).into_response()
    }
}
