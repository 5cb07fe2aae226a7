#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use folio_core::{
    error::{FolioError, Result},
    generic::Role,
    provider::{CompletionParameters, CompletionProvider, FragmentStream, OpenStream},
};
use futures_util::{StreamExt, stream};

/// One step of a scripted upstream answer.
#[derive(Clone)]
pub enum Step {
    Text(&'static str),
    Fail,
}

/// Upstream stand-in replaying a fixed script and recording every call.
#[derive(Default)]
pub struct Scripted {
    pub script: Vec<Step>,
    pub refuse_to_open: bool,
    pub calls: AtomicUsize,
    pub last: Mutex<Option<CompletionParameters>>,
}

impl Scripted {
    pub fn answering(fragments: &[&'static str]) -> Arc<Self> {
        Arc::new(Self {
            script: fragments.iter().copied().map(Step::Text).collect(),
            ..Self::default()
        })
    }

    pub fn with_script(script: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            script,
            ..Self::default()
        })
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            refuse_to_open: true,
            ..Self::default()
        })
    }
}

impl CompletionProvider for Scripted {
    fn request_streaming_completion<'p>(&'p self, params: CompletionParameters) -> OpenStream<'p> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(params);

        let refuse = self.refuse_to_open;
        let items: Vec<Result<String>> = self
            .script
            .iter()
            .map(|step| match step {
                Step::Text(text) => Ok(text.to_string()),
                Step::Fail => Err(FolioError::Transport("connection reset".into())),
            })
            .collect();

        Box::pin(async move {
            if refuse {
                return Err(FolioError::Upstream {
                    status: 503,
                    body: "overloaded".into(),
                });
            }
            Ok(Box::pin(stream::iter(items)) as FragmentStream)
        })
    }
}

/// Spells out the last user message one character per fragment, yielding to
/// the scheduler between fragments.
pub struct Spelling;

impl CompletionProvider for Spelling {
    fn request_streaming_completion<'p>(&'p self, params: CompletionParameters) -> OpenStream<'p> {
        let word = params
            .messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.clone())
            .unwrap_or_default();

        Box::pin(async move {
            let chars: Vec<String> = word.chars().map(String::from).collect();
            let stream = stream::iter(chars).then(|c| async move {
                tokio::task::yield_now().await;
                Ok(c)
            });
            Ok(Box::pin(stream) as FragmentStream)
        })
    }
}

/// Sends one fragment, then never finishes. `dropped` flips once the relay
/// lets go of the upstream stream.
#[derive(Default)]
pub struct Hanging {
    pub dropped: Arc<AtomicBool>,
}

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl CompletionProvider for Hanging {
    fn request_streaming_completion<'p>(&'p self, _params: CompletionParameters) -> OpenStream<'p> {
        let flag = DropFlag(self.dropped.clone());

        Box::pin(async move {
            let stream = stream::once(async { Ok("first".to_string()) })
                .chain(stream::pending())
                .map(move |item| {
                    let _alive = &flag;
                    item
                });
            Ok(Box::pin(stream) as FragmentStream)
        })
    }
}
