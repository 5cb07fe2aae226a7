use std::time::Duration;

use folio_core::error::FolioError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t decode body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("OpenAI returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("OpenAI format error: {0}")]
    Format(String),

    #[error("OpenAI reported an error mid-stream: {message}")]
    Stream {
        kind: Option<String>,
        message: String,
    },

    #[error("no data received for {0:?}")]
    IdleTimeout(Duration),

    #[error("missing API key")]
    MissingApiKey,

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl From<OpenAiError> for FolioError {
    fn from(value: OpenAiError) -> Self {
        match value {
            OpenAiError::Http(err) => FolioError::Transport(err.to_string()),
            OpenAiError::IdleTimeout(idle) => {
                FolioError::Transport(format!("no data received for {idle:?}"))
            }
            OpenAiError::Serde(err) => FolioError::MalformedStream(err.to_string()),
            OpenAiError::Format(msg) => FolioError::MalformedStream(msg),
            OpenAiError::Api { status, body } => FolioError::Upstream {
                status: status.as_u16(),
                body,
            },
            OpenAiError::MissingApiKey => {
                FolioError::Configuration("missing env variable: `OPENAI_API_KEY`".into())
            }
            other @ (OpenAiError::Stream { .. } | OpenAiError::InvalidHeader(_)) => {
                FolioError::Backend(Box::new(other))
            }
        }
    }
}
