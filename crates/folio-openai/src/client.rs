use std::time::Duration;

use async_stream::try_stream;
use bytes::Bytes;
use futures_core::Stream;
use futures_util::StreamExt;
use reqwest::{
    Client as HttpClient, Response,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};

use crate::{
    api_v1::{ChatCompletionChunkResponse, ChatCompletionRequest, ChatCompletionStreamEvent},
    error::OpenAiError,
    sse::{DONE, SseDecoder},
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub(crate) const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Decoded chunks of one streaming completion.
pub type ChunkStream =
    std::pin::Pin<Box<dyn Stream<Item = Result<ChatCompletionChunkResponse, OpenAiError>> + Send>>;

/// Minimal HTTP client for OpenAI’s *chat/completions* endpoint.
///
/// * Streaming only: the relay never waits for a full answer.
/// * No total request timeout. A long answer is fine as long as bytes keep
///   arriving; a gap longer than `idle_timeout` ends the stream with
///   [`OpenAiError::IdleTimeout`].
/// * Shares a single `reqwest::Client`, so cloning `OpenAiClient` is cheap.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    http: HttpClient,
    base: String,
    idle_timeout: Duration,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base", &self.base)
            .field("idle_timeout", &self.idle_timeout)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Build a client with its own connection pool and a 10 s connect
    /// timeout.
    pub fn new(
        api_key: impl Into<String>,
        base_url: Option<String>,
        idle_timeout: Duration,
    ) -> Result<Self, OpenAiError> {
        let http = HttpClient::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self::with_http(api_key, http, base_url, idle_timeout))
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
        idle_timeout: Duration,
    ) -> Self {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Self {
            api_key: api_key.into(),
            http,
            base: base.trim_end_matches('/').to_owned(),
            idle_timeout,
        }
    }

    fn headers(&self) -> Result<HeaderMap, OpenAiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("text/event-stream"));
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }

    /// Open a **streaming** chat completion.
    ///
    /// Resolves once the response headers are in. A transport failure or a
    /// non-2xx status is returned here; everything after that surfaces as
    /// an `Err` item of the returned stream.
    pub async fn chat_completion_stream(
        &self,
        mut request: ChatCompletionRequest,
    ) -> Result<ChunkStream, OpenAiError> {
        request.stream = Some(true);

        let url = format!("{}/chat/completions", self.base);

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, model = %request.model, messages = request.messages.len(), "opening completion stream");

        let resp = self
            .http
            .post(url)
            .headers(self.headers()?)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();

            #[cfg(feature = "tracing")]
            tracing::warn!(%status, "upstream refused completion request");

            return Err(OpenAiError::Api { status, body });
        }

        Ok(Box::pin(decode_chunks(resp, self.idle_timeout)))
    }
}

fn decode_chunks(
    resp: Response,
    idle_timeout: Duration,
) -> impl Stream<Item = Result<ChatCompletionChunkResponse, OpenAiError>> + Send + 'static {
    try_stream! {
        let mut bytes = resp.bytes_stream();
        let mut decoder = SseDecoder::new();

        loop {
            let next: Option<Result<Bytes, reqwest::Error>> =
                tokio::time::timeout(idle_timeout, bytes.next())
                    .await
                    .map_err(|_| OpenAiError::IdleTimeout(idle_timeout))?;

            let Some(chunk) = next else {
                if let Some(data) = decoder.finish()? {
                    if data.trim() != DONE {
                        yield parse_event(data.trim())?;
                    }
                }
                break;
            };

            for data in decoder.push(&chunk?)? {
                let data = data.trim();
                if data == DONE {
                    return;
                }
                yield parse_event(data)?;
            }
        }
    }
}

/// A chunk, or the error OpenAI reported in its place.
fn parse_event(data: &str) -> Result<ChatCompletionChunkResponse, OpenAiError> {
    match serde_json::from_str::<ChatCompletionStreamEvent>(data)? {
        ChatCompletionStreamEvent::Chunk(chunk) => Ok(chunk),
        ChatCompletionStreamEvent::Error { error } => {
            #[cfg(feature = "tracing")]
            tracing::warn!(message = %error.message, "upstream reported an error mid-stream");

            Err(OpenAiError::Stream {
                kind: error.kind,
                message: error.message,
            })
        }
    }
}
