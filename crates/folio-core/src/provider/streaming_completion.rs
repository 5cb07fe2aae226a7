use std::{future::Future, pin::Pin};

use futures_core::stream::Stream;

use crate::{error::Result, generic::ConversationMessage, model::Model};

/// Incremental text fragments produced by an upstream model.
///
/// Items arrive in generation order. An `Err` item means the stream broke
/// while reading; the stream yields nothing after it.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String>> + Send + 'static>>;

/// Future returned by [`CompletionProvider::request_streaming_completion`].
pub type OpenStream<'p> = Pin<Box<dyn Future<Output = Result<FragmentStream>> + Send + 'p>>;

/// A **back-end** turns a message list into a network call to a concrete
/// provider and hands back the model’s answer as a [`FragmentStream`].
///
/// The trait has a single method with two distinct failure paths:
///
/// * the returned future resolves to `Err` when the stream cannot be opened
///   at all (network failure, non-2xx status),
/// * the stream itself yields `Err` when reading fails part-way.
///
/// The method returns a [`Pin<Box<dyn Future>>`] so we stay object-safe
/// without pulling in `async_trait`. The stream is `'static` so it can be
/// moved into a spawned task and outlive the borrow of the provider.
pub trait CompletionProvider: Send + Sync {
    fn request_streaming_completion<'p>(&'p self, params: CompletionParameters) -> OpenStream<'p>;
}

/// Everything the upstream needs to generate one answer.
#[derive(Debug, Clone)]
pub struct CompletionParameters {
    pub messages: Vec<ConversationMessage>,
    pub model: Model,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

impl CompletionParameters {
    pub fn new(messages: Vec<ConversationMessage>, model: Model) -> Self {
        Self {
            messages,
            model,
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}
