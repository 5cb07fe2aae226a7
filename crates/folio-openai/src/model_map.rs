use std::borrow::Cow;

use folio_core::model::{Model, OpenAiModel};

pub const GPT4_1_NANO: &str = "gpt-4.1-nano";
pub const GPT4_1_MINI: &str = "gpt-4.1-mini";
pub const GPT4_O: &str = "gpt-4o";
pub const GPT4_O_MINI: &str = "gpt-4o-mini";

pub(crate) fn map_model(model: &Model) -> Cow<'static, str> {
    match model {
        Model::Custom(custom) => Cow::Borrowed(*custom),
        Model::OpenAi(OpenAiModel::Gpt4_1Nano) => GPT4_1_NANO.into(),
        Model::OpenAi(OpenAiModel::Gpt4_1Mini) => GPT4_1_MINI.into(),
        Model::OpenAi(OpenAiModel::Gpt4o) => GPT4_O.into(),
        Model::OpenAi(OpenAiModel::Gpt4oMini) => GPT4_O_MINI.into(),
    }
}
