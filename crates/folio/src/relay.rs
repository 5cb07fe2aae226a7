//! The chat relay: one stateless exchange per request.
//!
//! ```text
//! conversation ──► [system prompt, ..history] ──► provider.open()
//!                                                   │
//!                      Err ───────────────────────► Fallback
//!                      Ok(stream) ─► first fragment?
//!                                      │ Err ─────► Fallback
//!                                      │ end ─────► empty Stream
//!                                      │ Some ────► Stream (pump task ─► mpsc ─► body)
//! ```
//!
//! Nothing is sent to the caller before the first fragment, so every failure
//! that happens before any output turns into the fallback sentence alone.
//! Once output has started the body is committed: a later upstream failure
//! is logged and aborts the body instead of appending the fallback.

use std::sync::Arc;

use folio_core::{
    error::{FolioError, Result},
    generic::Conversation,
    model::{Model, OpenAiModel},
    provider::{CompletionParameters, CompletionProvider, FragmentStream},
};
use folio_profile::{ProfileData, fragments::SystemPrompt, fragments::fallback_message};
use folio_prompt::chain::PromptChain;
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, error, warn};

const CHANNEL_CAPACITY: usize = 32;

/// Text the caller receives, in order.
pub type RelayStream = ReceiverStream<Result<String>>;

/// Outcome of a chat request that got past configuration checks.
#[derive(Debug)]
pub enum ChatReply {
    /// Upstream fragments, forwarded as they arrive.
    Stream(RelayStream),
    /// The upstream failed before producing any text.
    Fallback(String),
}

/// Fixed generation settings sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: Model,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: OpenAiModel::Gpt4_1Nano.into(),
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

pub struct ChatRelay<P: ?Sized = dyn CompletionProvider> {
    provider: Option<Arc<P>>,
    system_prompt: SystemPrompt,
    fallback: String,
    settings: GenerationSettings,
}

impl<P: CompletionProvider + ?Sized> ChatRelay<P> {
    /// `provider` is `None` when no upstream credential is configured; every
    /// chat request then fails with [`FolioError::Configuration`].
    pub fn new(profile: &ProfileData, provider: Option<Arc<P>>) -> Self {
        Self {
            provider,
            system_prompt: SystemPrompt::assemble(profile),
            fallback: fallback_message(profile),
            settings: GenerationSettings::default(),
        }
    }

    pub fn system_prompt(&self) -> &SystemPrompt {
        &self.system_prompt
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// The message list sent upstream: the system prompt followed by the
    /// client history, unmodified.
    pub fn messages(&self, conversation: Conversation) -> Conversation {
        PromptChain::new()
            .with(&self.system_prompt)
            .with(conversation)
            .build()
    }

    pub async fn handle_chat_request(&self, conversation: Conversation) -> Result<ChatReply> {
        let Some(provider) = &self.provider else {
            return Err(FolioError::Configuration(
                "OpenAI API key not configured".into(),
            ));
        };

        debug!(history = conversation.len(), "relaying chat request");

        let params = CompletionParameters::new(self.messages(conversation), self.settings.model.clone())
            .with_max_tokens(self.settings.max_tokens)
            .with_temperature(self.settings.temperature);

        let mut upstream = match provider.request_streaming_completion(params).await {
            Ok(stream) => stream,
            Err(err) => {
                error!(%err, "could not open upstream completion stream");
                return Ok(self.fallback_reply());
            }
        };

        let first = loop {
            match upstream.next().await {
                Some(Ok(fragment)) if fragment.is_empty() => continue,
                Some(Ok(fragment)) => break Some(fragment),
                Some(Err(err)) => {
                    error!(%err, "upstream failed before producing any text");
                    return Ok(self.fallback_reply());
                }
                None => break None,
            }
        };

        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        match first {
            Some(first) => {
                tokio::spawn(pump(first, upstream, tx));
            }
            None => warn!("upstream finished without producing any text"),
        }

        Ok(ChatReply::Stream(ReceiverStream::new(rx)))
    }

    fn fallback_reply(&self) -> ChatReply {
        warn!("answering with fallback message");
        ChatReply::Fallback(self.fallback.clone())
    }
}

/// Forward fragments until the upstream ends, fails, or the caller hangs up.
async fn pump(first: String, mut upstream: FragmentStream, tx: mpsc::Sender<Result<String>>) {
    if tx.send(Ok(first)).await.is_err() {
        debug!("client disconnected, dropping upstream stream");
        return;
    }

    let mut forwarded = 1usize;
    loop {
        tokio::select! {
            _ = tx.closed() => {
                debug!(forwarded, "client disconnected, dropping upstream stream");
                return;
            }
            item = upstream.next() => match item {
                None => {
                    debug!(forwarded, "upstream stream completed");
                    return;
                }
                Some(Ok(fragment)) if fragment.is_empty() => {}
                Some(Ok(fragment)) => {
                    if tx.send(Ok(fragment)).await.is_err() {
                        debug!(forwarded, "client disconnected, dropping upstream stream");
                        return;
                    }
                    forwarded += 1;
                }
                Some(Err(err)) => {
                    error!(%err, forwarded, "upstream failed mid-stream, aborting response");
                    let _ = tx.send(Err(err)).await;
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use folio_core::{
        generic::{ConversationMessage, Role},
        provider::OpenStream,
    };
    use futures_util::stream;

    use super::*;

    /// Remembers the last parameters and replays a fixed script.
    struct Recording {
        script: Vec<Result<String>>,
        seen: Mutex<Option<CompletionParameters>>,
    }

    impl CompletionProvider for Recording {
        fn request_streaming_completion<'p>(
            &'p self,
            params: CompletionParameters,
        ) -> OpenStream<'p> {
            *self.seen.lock().unwrap() = Some(params);
            let items: Vec<Result<String>> = self
                .script
                .iter()
                .map(|item| match item {
                    Ok(text) => Ok(text.clone()),
                    Err(err) => Err(FolioError::Transport(err.to_string())),
                })
                .collect();
            Box::pin(async move { Ok(Box::pin(stream::iter(items)) as FragmentStream) })
        }
    }

    fn relay(script: Vec<Result<String>>) -> (ChatRelay<Recording>, Arc<Recording>) {
        let provider = Arc::new(Recording {
            script,
            seen: Mutex::new(None),
        });
        let profile = ProfileData::bundled().unwrap();
        (ChatRelay::new(&profile, Some(provider.clone())), provider)
    }

    #[tokio::test]
    async fn sends_system_prompt_then_history_with_fixed_settings() {
        let (relay, provider) = relay(vec![Ok("ok".into())]);
        let history = vec![
            ConversationMessage::user("Hi"),
            ConversationMessage::assistant("Hello!"),
            ConversationMessage::user("What does he do?"),
        ];

        relay.handle_chat_request(history.clone()).await.unwrap();

        let params = provider.seen.lock().unwrap().take().unwrap();
        assert_eq!(params.messages.len(), history.len() + 1);
        assert_eq!(params.messages[0].role, Role::System);
        assert_eq!(params.messages[0].content, relay.system_prompt().as_str());
        assert_eq!(&params.messages[1..], &history[..]);
        assert_eq!(params.model, Model::OpenAi(OpenAiModel::Gpt4_1Nano));
        assert_eq!(params.max_tokens, Some(500));
        assert_eq!(params.temperature, Some(0.7));
    }

    #[tokio::test]
    async fn empty_fragments_are_not_forwarded() {
        let (relay, _) = relay(vec![
            Ok(String::new()),
            Ok("a".into()),
            Ok(String::new()),
            Ok("b".into()),
        ]);

        let ChatReply::Stream(stream) = relay.handle_chat_request(vec![]).await.unwrap() else {
            panic!("expected a stream");
        };
        let chunks: Vec<String> = stream.map(|item| item.unwrap()).collect().await;
        assert_eq!(chunks, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn stream_without_text_yields_empty_body() {
        let (relay, _) = relay(vec![Ok(String::new())]);

        let ChatReply::Stream(stream) = relay.handle_chat_request(vec![]).await.unwrap() else {
            panic!("expected a stream");
        };
        assert_eq!(stream.count().await, 0);
    }

    #[test]
    fn default_settings_match_relay_contract() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.max_tokens, 500);
        assert_eq!(settings.temperature, 0.7);
        assert_eq!(settings.model, Model::OpenAi(OpenAiModel::Gpt4_1Nano));
    }
}
