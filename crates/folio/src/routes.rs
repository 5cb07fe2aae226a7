use axum::{
    Json,
    body::Body,
    extract::{State, rejection::JsonRejection},
    http::{
        HeaderName, HeaderValue,
        header::{CACHE_CONTROL, CONNECTION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use folio_core::generic::{Conversation, ConversationMessage};
use serde::Deserialize;
use tracing::debug;

use crate::{error::AppError, relay::ChatReply, state::AppState};

/// Marks a body that carries the fallback sentence instead of a model answer.
pub const FALLBACK_HEADER: HeaderName = HeaderName::from_static("x-folio-fallback");

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ConversationMessage>,
}

impl ChatRequest {
    /// Clients may only send `user` and `assistant` turns.
    fn into_conversation(self) -> Result<Conversation, AppError> {
        if self.messages.iter().all(|m| m.role.is_client_role()) {
            Ok(self.messages)
        } else {
            Err(AppError::MalformedPayload)
        }
    }
}

pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(%rejection, "rejecting chat payload");
        AppError::MalformedPayload
    })?;
    let conversation = request.into_conversation()?;

    let response = match state.relay.handle_chat_request(conversation).await? {
        ChatReply::Stream(stream) => stream_response(Body::from_stream(stream)),
        ChatReply::Fallback(text) => {
            let mut response = stream_response(Body::from(text));
            response
                .headers_mut()
                .insert(FALLBACK_HEADER, HeaderValue::from_static("1"));
            response
        }
    };

    Ok(response)
}

pub async fn profile_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.profile.as_ref().clone())
}

fn stream_response(body: Body) -> Response {
    (
        [
            (CONTENT_TYPE, "text/event-stream"),
            (CACHE_CONTROL, "no-cache"),
            (CONNECTION, "keep-alive"),
        ],
        body,
    )
        .into_response()
}
