use std::{env, fmt::Display, net::IpAddr, path::PathBuf, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Process-wide settings, read once at start-up.
///
/// The OpenAI credential is deliberately absent: the adapter builder reads
/// `OPENAI_API_KEY` and `OPENAI_BASE_URL` itself so the key never ends up in
/// a `Debug` dump of this struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// `None` serves the profile compiled into the binary.
    pub profile_path: Option<PathBuf>,
    pub idle_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let idle_secs: u64 = try_load(&var, "OPENAI_IDLE_TIMEOUT_SECS", "60")?;
        if idle_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "OPENAI_IDLE_TIMEOUT_SECS",
                value: "0".into(),
                reason: "must be at least one second".into(),
            });
        }

        let profile_path = var("FOLIO_PROFILE_PATH").map(PathBuf::from);
        if profile_path.is_none() {
            info!("FOLIO_PROFILE_PATH not set, using bundled profile");
        }

        Ok(Self {
            bind_addr: try_load(&var, "FOLIO_BIND_ADDR", "0.0.0.0")?,
            port: try_load(&var, "FOLIO_PORT", "3000")?,
            profile_path,
            idle_timeout: Duration::from_secs(idle_secs),
        })
    }
}

fn try_load<T: FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }
    })
}
