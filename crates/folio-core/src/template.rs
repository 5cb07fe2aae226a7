//! Conversion of arbitrary values into chat messages.
//!
//! A prompt is assembled from *fragments*: the system prompt rendered from
//! the profile, the client history, and so on. Each fragment implements
//! [`IntoPrompt`] and a chain (see `folio-prompt`) concatenates them in
//! order.
//!
//! ```rust
//! use folio_core::template::IntoPrompt;
//! use folio_core::generic::ConversationMessage;
//!
//! let history = vec![
//!     ConversationMessage::user("Hi"),
//!     ConversationMessage::assistant("Hello!"),
//! ];
//! assert_eq!(history.clone().into_prompt(), history);
//! ```
use crate::generic::ConversationMessage;

/// Converts a value into a series of chat messages.
///
/// By making the `Message` type an **associated type** a back-end can
/// require its own richer struct while fragments stay generic.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single message is a one-element prompt.
impl IntoPrompt for ConversationMessage {
    type Message = ConversationMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}

/// A history is forwarded as-is: same messages, same order.
impl IntoPrompt for Vec<ConversationMessage> {
    type Message = ConversationMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        self
    }
}
