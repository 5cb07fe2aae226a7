//! Model identifiers.
//!
//! The relay never types literal strings such as `"gpt-4.1-nano"`; it picks
//! an enum variant and lets the provider crate translate it.
//!
//! ```rust
//! use folio_core::model::{Model, OpenAiModel};
//! assert_eq!(Model::from(OpenAiModel::Gpt4_1Nano),
//!            Model::OpenAi(OpenAiModel::Gpt4_1Nano));
//! ```

/// Universal identifier for an LLM model.
///
/// * `OpenAi` – models known to the OpenAI back-end.
/// * `Custom` – any provider-specific model name not covered by an enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    OpenAi(OpenAiModel),
    Custom(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt4_1Nano,
    Gpt4_1Mini,
    Gpt4o,
    Gpt4oMini,
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}
