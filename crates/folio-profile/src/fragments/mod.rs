mod fallback;
mod system_prompt;

pub use fallback::fallback_message;
pub use system_prompt::SystemPrompt;
