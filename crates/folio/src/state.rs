use std::sync::Arc;

use anyhow::Context;
use folio_core::provider::CompletionProvider;
use folio_openai::OpenAiAdapterBuilder;
use folio_profile::ProfileData;
use tracing::{info, warn};

use crate::{config::Config, relay::ChatRelay};

/// Shared, read-only per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<ProfileData>,
    pub relay: Arc<ChatRelay>,
}

impl AppState {
    pub fn new(profile: ProfileData, provider: Option<Arc<dyn CompletionProvider>>) -> Self {
        let relay = ChatRelay::new(&profile, provider);
        Self {
            profile: Arc::new(profile),
            relay: Arc::new(relay),
        }
    }

    /// Load the profile and the OpenAI back-end as described by `config`.
    ///
    /// A missing API key is not fatal: the service starts and answers chat
    /// requests with a configuration error.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let profile = match &config.profile_path {
            Some(path) => {
                info!("Loading profile from {}", path.display());
                ProfileData::load(path)?
            }
            None => ProfileData::bundled().context("bundled profile is invalid")?,
        };

        let provider = match OpenAiAdapterBuilder::new_from_env()
            .with_idle_timeout(config.idle_timeout)
            .build()
        {
            Ok(adapter) => Some(Arc::new(adapter) as Arc<dyn CompletionProvider>),
            Err(err) if err.is_configuration() => {
                warn!("{err}; chat requests will be rejected");
                None
            }
            Err(err) => return Err(err).context("building OpenAI client"),
        };

        Ok(Self::new(profile, provider))
    }
}
