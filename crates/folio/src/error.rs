use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_core::error::FolioError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("{0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    InternalError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<FolioError> for AppError {
    fn from(value: FolioError) -> Self {
        match value {
            FolioError::Configuration(msg) => AppError::Configuration(msg),
            FolioError::InvalidRequest(_) => AppError::MalformedPayload,
            other => AppError::InternalError(Box::new(other)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match &self {
            AppError::InternalError(err) => {
                error!(%err, "request failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
