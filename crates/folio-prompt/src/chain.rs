//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`].
//!
//! ```text
//! ┌───────────────┐    IntoPrompt     ┌────────────────┐
//! │ SystemPrompt  │ ─────────────────►│ [system]       │
//! ├───────────────┤                   ├────────────────┤
//! │ Conversation  │ ─────────────────►│ [user, ...]    │
//! └───────────────┘                   └────────────────┘
//!            ▲                                     │
//!            └────────── PromptChain::build() ◄────┘
//! ```
//!
//! The relay uses it to put the system prompt in front of the client
//! history without mutable vectors or `insert(0, ..)` calls:
//!
//! ```rust
//! use folio_core::generic::{ConversationMessage, Role};
//! use folio_prompt::chain::PromptChain;
//!
//! let history = vec![ConversationMessage::user("Where does he live?")];
//! let messages = PromptChain::new()
//!     .with(ConversationMessage::system("You are a companion."))
//!     .with(history)
//!     .build();
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].role, Role::System);
//! ```
use folio_core::template::IntoPrompt;

/// Lightweight container that accumulates messages produced by
/// [`IntoPrompt`] implementors.
///
/// The single `Vec` field is kept private so the only way to obtain the result
/// is through [`Self::build`].
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain, after everything
    /// already in it.
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
