use feed_client::{
    DEFAULT_CHANNEL_FEED_BASE, DEFAULT_FEED_API_ENDPOINT, DEFAULT_FETCH_TIMEOUT, FeedApiConfig,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/index.html";

/// Startup configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        /// Name of the environment variable
        key: &'static str,
        /// Raw value as found in the environment
        value: String,
        /// Parser error message
        reason: String,
    },
}

/// Server settings, read from `LOOKUP_*` environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Listening socket (`LOOKUP_BIND_ADDR`)
    pub bind_addr: SocketAddr,
    /// Page template, re-read per request (`LOOKUP_TEMPLATE_PATH`)
    pub template_path: PathBuf,
    /// Conversion endpoint, feed base and timeout
    /// (`LOOKUP_FEED_API_ENDPOINT`, `LOOKUP_CHANNEL_FEED_BASE`, `LOOKUP_FETCH_TIMEOUT_SECS`)
    pub feed_api: FeedApiConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_addr = parse("LOOKUP_BIND_ADDR", get("LOOKUP_BIND_ADDR", DEFAULT_BIND_ADDR))?;
        let timeout_secs: u64 = parse(
            "LOOKUP_FETCH_TIMEOUT_SECS",
            get(
                "LOOKUP_FETCH_TIMEOUT_SECS",
                &DEFAULT_FETCH_TIMEOUT.as_secs().to_string(),
            ),
        )?;

        Ok(Self {
            bind_addr,
            template_path: PathBuf::from(get("LOOKUP_TEMPLATE_PATH", DEFAULT_TEMPLATE_PATH)),
            feed_api: FeedApiConfig {
                endpoint: get("LOOKUP_FEED_API_ENDPOINT", DEFAULT_FEED_API_ENDPOINT),
                channel_feed_base: get("LOOKUP_CHANNEL_FEED_BASE", DEFAULT_CHANNEL_FEED_BASE),
                // 0 disables the timeout
                timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            },
        })
    }
}

fn parse<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}
