//! Conversation message and role types shared by every crate in the
//! workspace.
//!
//! They mirror the two fields every chat API agrees on, a role and a text
//! body, and nothing else. Provider crates convert them into their own wire
//! structs via `From`/`Into`.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single chat message independent of any specific LLM provider.
///
/// The same type is used for the client-supplied history and for the
/// system message injected by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
}

impl ConversationMessage {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then `content`).
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Chat roles understood by the relay.
///
/// The `Display` implementation renders the canonical lowercase name so it
/// can be fed directly into JSON without extra mapping logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Injected by the relay; never accepted from a client.
    System,
    /// Messages originating from the human visitor.
    User,
    /// Messages previously produced by the model.
    Assistant,
}

impl Role {
    /// Roles a client may put into its conversation history.
    pub fn is_client_role(self) -> bool {
        matches!(self, Role::User | Role::Assistant)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// An ordered, client-supplied chat history.
pub type Conversation = Vec<ConversationMessage>;
