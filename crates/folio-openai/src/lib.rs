//! OpenAI back-end for the folio chat relay.
//!
//! [`OpenAiAdapter`] implements [`folio_core::provider::CompletionProvider`]
//! on top of the streaming `chat/completions` endpoint. The wire types live
//! in [`api_v1`]; the SSE framing is handled by [`sse::SseDecoder`].

mod adapter;
mod model_map;
mod provider_impl_chat_stream;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub use client::{ChunkStream, OpenAiClient};
pub mod api_v1;
mod client;
pub mod error;
pub mod sse;
