mod streaming_completion;

pub use streaming_completion::*;
