//! Helpers for composing prompts.
//!
//! * [`builder::PromptBuilder`] renders markdown text blocks.
//! * [`chain::PromptChain`] lines up [`IntoPrompt`](folio_core::template::IntoPrompt)
//!   fragments into one ordered message list.
pub mod builder;
pub mod chain;
