use serde::Deserialize;

use super::chat_completion::{FinishReason, MessageRole};

/// A delta message as returned by OpenAI when `stream = true`.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionMessageDelta {
    #[serde(default)]
    pub role: Option<MessageRole>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A single streaming choice payload.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionChunkChoice {
    #[serde(default)]
    pub index: i64,
    pub delta: ChatCompletionMessageDelta,
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

/// The outermost object sent by OpenAI for each SSE chunk.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionChunkResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<ChatCompletionChunkChoice>,
}

/// Error object OpenAI sends in place of a chunk when generation fails after
/// the response headers went out.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamErrorBody {
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// One `data:` payload of the stream: either a chunk or an error report.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ChatCompletionStreamEvent {
    Error { error: StreamErrorBody },
    Chunk(ChatCompletionChunkResponse),
}

impl ChatCompletionChunkResponse {
    /// Text carried by the first choice, if any and non-empty.
    pub fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .find(|choice| choice.index == 0)
            .and_then(|choice| choice.delta.content)
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> ChatCompletionChunkResponse {
        serde_json::from_str(raw).unwrap()
    }

    fn event(raw: &str) -> ChatCompletionStreamEvent {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn extracts_first_choice_content() {
        let chunk = parse(
            r#"{"id":"c1","object":"chat.completion.chunk","created":1,"model":"gpt-4.1-nano",
                "choices":[{"index":0,"delta":{"content":"Hel"},"finish_reason":null}]}"#,
        );
        assert_eq!(chunk.into_text().as_deref(), Some("Hel"));
    }

    #[test]
    fn role_only_and_final_chunks_carry_no_text() {
        let role_only = parse(r#"{"choices":[{"index":0,"delta":{"role":"assistant","content":""}}]}"#);
        assert_eq!(role_only.into_text(), None);

        let last = parse(r#"{"choices":[{"index":0,"delta":{},"finish_reason":"stop"}]}"#);
        assert_eq!(last.into_text(), None);

        let usage_only = parse(r#"{"choices":[],"usage":{"total_tokens":3}}"#);
        assert_eq!(usage_only.into_text(), None);
    }

    #[test]
    fn error_payload_is_not_mistaken_for_a_chunk() {
        let raw = r#"{"error":{"message":"The server had an error","type":"server_error"}}"#;

        match event(raw) {
            ChatCompletionStreamEvent::Error { error } => {
                assert_eq!(error.message, "The server had an error");
                assert_eq!(error.kind.as_deref(), Some("server_error"));
            }
            other => panic!("expected an error event, got {other:?}"),
        }
        assert!(serde_json::from_str::<ChatCompletionChunkResponse>(raw).is_err());
    }

    #[test]
    fn object_without_choices_is_rejected() {
        assert!(serde_json::from_str::<ChatCompletionStreamEvent>(r#"{"id":"x"}"#).is_err());
    }

    #[test]
    fn regular_chunk_parses_as_chunk_event() {
        let raw = r#"{"choices":[{"index":0,"delta":{"content":"Hi"}}]}"#;
        let ChatCompletionStreamEvent::Chunk(chunk) = event(raw) else {
            panic!("expected a chunk");
        };
        assert_eq!(chunk.into_text().as_deref(), Some("Hi"));
    }

    #[test]
    fn unknown_finish_reason_is_tolerated() {
        let chunk = parse(r#"{"choices":[{"index":0,"delta":{},"finish_reason":"something_new"}]}"#);
        assert_eq!(chunk.choices[0].finish_reason, Some(FinishReason::Other));
    }
}
