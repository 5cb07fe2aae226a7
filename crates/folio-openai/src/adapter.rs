use std::{env, sync::Arc, time::Duration};

use folio_core::error::{FolioError, Result};

use crate::client::{DEFAULT_IDLE_TIMEOUT, OpenAiClient};
use crate::error::OpenAiError;

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value that
/// implements [`folio_core::provider::CompletionProvider`].
///
/// Cloning is cheap: all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

/// Builder for [`OpenAiAdapter`].
///
/// ```rust,no_run
/// use folio_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env().build();
/// ```
#[derive(Debug, Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) idle_timeout: Option<Duration>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `OPENAI_API_KEY` and `OPENAI_BASE_URL`.
    ///
    /// Never fails. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            base_url: env::var("OPENAI_BASE_URL").ok().filter(|u| !u.trim().is_empty()),
            idle_timeout: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Longest gap tolerated between two body chunks. Defaults to 60 s.
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = Some(idle_timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`FolioError::Configuration`] if the API key is missing or blank.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(OpenAiError::MissingApiKey)?;

        let client = OpenAiClient::new(
            api_key,
            self.base_url,
            self.idle_timeout.unwrap_or(DEFAULT_IDLE_TIMEOUT),
        )
        .map_err(FolioError::from)?;

        Ok(OpenAiAdapter {
            client: Arc::new(client),
        })
    }
}
