//! # `folio-core`
//!
//! Provider-agnostic building blocks for the folio chat relay:
//!
//! * [`generic`] – conversation messages and roles,
//! * [`model`] – model identifiers,
//! * [`provider`] – the [`provider::CompletionProvider`] capability every
//!   upstream back-end implements,
//! * [`template`] – the [`template::IntoPrompt`] conversion used to compose
//!   message lists,
//! * [`error`] – the unified [`FolioError`].
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod template;

pub use error::{FolioError, Result};
