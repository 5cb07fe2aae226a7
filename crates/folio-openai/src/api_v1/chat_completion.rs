use folio_core::generic::{ConversationMessage, Role};
use folio_core::provider::CompletionParameters;
use serde::{Deserialize, Serialize};

use crate::model_map::map_model;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            max_tokens: None,
            temperature: None,
            stream: None,
        }
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = Some(stream);
        self
    }
}

impl From<CompletionParameters> for ChatCompletionRequest {
    fn from(value: CompletionParameters) -> Self {
        Self {
            model: map_model(&value.model).into_owned(),
            messages: value.messages.into_iter().map(Into::into).collect(),
            max_tokens: value.max_tokens,
            temperature: value.temperature,
            stream: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
    #[serde(other)]
    Other,
}

impl From<Role> for MessageRole {
    fn from(value: Role) -> Self {
        match value {
            Role::System => MessageRole::System,
            Role::User => MessageRole::User,
            Role::Assistant => MessageRole::Assistant,
        }
    }
}

impl From<ConversationMessage> for ChatCompletionMessage {
    fn from(value: ConversationMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::model::OpenAiModel;

    #[test]
    fn request_carries_generation_settings() {
        let params = CompletionParameters::new(
            vec![
                ConversationMessage::system("persona"),
                ConversationMessage::user("hi"),
            ],
            OpenAiModel::Gpt4_1Nano.into(),
        )
        .with_max_tokens(500)
        .with_temperature(0.7);

        let request = ChatCompletionRequest::from(params).stream(true);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "model": "gpt-4.1-nano",
                "messages": [
                    {"role": "system", "content": "persona"},
                    {"role": "user", "content": "hi"}
                ],
                "max_tokens": 500,
                "temperature": 0.7,
                "stream": true
            })
        );
    }

    #[test]
    fn unset_options_are_omitted() {
        let request = ChatCompletionRequest::new("gpt-4o".into(), vec![]);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"model":"gpt-4o","messages":[]}"#);
    }
}
