//! Server configuration from the environment

use std::time::Duration;

use thiserror::Error;

/// Default pause between closing the Room 2 beaker and judging the mix.
pub const DEFAULT_MIX_DELAY_MS: u64 = 1000;

/// Default idle time after which a session is discarded.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mix_delay: Duration,
    /// Sessions untouched for this long are evicted.
    pub session_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            mix_delay: Duration::from_millis(DEFAULT_MIX_DELAY_MS),
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        }
    }
}

impl Config {
    /// Read HOST, PORT, MIX_DELAY_MS and SESSION_TTL_SECS; unset keys keep
    /// their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: port })?;
        }
        if let Some(delay) = lookup("MIX_DELAY_MS") {
            let millis: u64 = delay.parse().map_err(|_| ConfigError::Invalid {
                key: "MIX_DELAY_MS",
                value: delay,
            })?;
            config.mix_delay = Duration::from_millis(millis);
        }
        if let Some(ttl) = lookup("SESSION_TTL_SECS") {
            let secs = ttl.parse::<u64>().ok().filter(|secs| *secs > 0).ok_or(
                ConfigError::Invalid {
                    key: "SESSION_TTL_SECS",
                    value: ttl,
                },
            )?;
            config.session_ttl = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
