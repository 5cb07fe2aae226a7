//! Portfolio profile data and the prompt fragments rendered from it.
//!
//! ```rust
//! use folio_profile::{ProfileData, fragments::SystemPrompt};
//!
//! let profile = ProfileData::bundled().unwrap();
//! let prompt = SystemPrompt::assemble(&profile);
//! assert!(prompt.as_str().contains("**Skills:**"));
//! ```
pub mod data;
pub mod fragments;

pub use data::{ProfileData, ProfileError};
