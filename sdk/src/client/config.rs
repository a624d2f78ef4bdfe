//! Client configuration.
//!
//! Provides configuration options for the BetsAPI client and the validator
//! that turns an untyped settings mapping into a [`ClientConfig`].

use std::time::Duration;

use serde_json::Value;

/// Default base URL for the API.
pub const DEFAULT_ENDPOINT_BASE: &str = "https://api.b365api.com/v2/";

/// Default number of retries after a failed call.
pub const DEFAULT_RETRIES: u32 = 5;

/// Default delay between retries in seconds.
pub const DEFAULT_SECONDS_TO_SLEEP: u64 = 1;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings key for the API token.
pub const KEY_TOKEN: &str = "token";

/// Settings key for the endpoint base URL.
pub const KEY_ENDPOINT_BASE: &str = "endpoint_base";

/// Settings key for the retry count.
pub const KEY_RETRIES: &str = "retries";

/// Settings key for the delay between retries.
pub const KEY_SECONDS_TO_SLEEP: &str = "seconds_to_sleep";

/// Table that may hold the retry settings in the published config shape.
pub const KEY_FAILED_CALLS: &str = "failed_calls";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API token sent with every request.
    pub token: String,

    /// Base URL every route is appended to.
    pub endpoint_base: String,

    /// Number of retries after the first failed attempt.
    pub retries: u32,

    /// Delay between a failed attempt and its retry, in seconds.
    pub seconds_to_sleep: u64,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,

    /// Treat non-2xx responses as failed attempts.
    ///
    /// Off by default: only transport errors are retried and any completed
    /// response is decoded as-is.
    pub fail_on_http_status: bool,
}

impl ClientConfig {
    /// Creates a new configuration with the given token and defaults for
    /// everything else.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            endpoint_base: DEFAULT_ENDPOINT_BASE.to_string(),
            retries: DEFAULT_RETRIES,
            seconds_to_sleep: DEFAULT_SECONDS_TO_SLEEP,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("betsapi-sdk/{}", env!("CARGO_PKG_VERSION")),
            fail_on_http_status: false,
        }
    }

    /// Sets the endpoint base URL.
    #[must_use]
    pub fn with_endpoint_base(mut self, endpoint_base: impl Into<String>) -> Self {
        self.endpoint_base = endpoint_base.into();
        self
    }

    /// Sets the number of retries.
    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Sets the delay between retries.
    #[must_use]
    pub fn with_seconds_to_sleep(mut self, seconds: u64) -> Self {
        self.seconds_to_sleep = seconds;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Makes non-2xx responses count as failed attempts.
    #[must_use]
    pub fn with_fail_on_http_status(mut self, enabled: bool) -> Self {
        self.fail_on_http_status = enabled;
        self
    }

    /// Builds a configuration from an untyped settings mapping.
    ///
    /// Keys are checked in a fixed order: `token`, `endpoint_base`,
    /// `retries`, `seconds_to_sleep`. The retry keys may also live under a
    /// `failed_calls` table. Settings that are not an object have every key
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingConfig`] naming the first absent key, or
    /// [`ConfigError::InvalidConfig`] naming the first key with the wrong
    /// type.
    pub fn from_settings(settings: &Value) -> Result<Self, ConfigError> {
        let token = require_string(settings, KEY_TOKEN)?;
        let endpoint_base = require_string(settings, KEY_ENDPOINT_BASE)?;
        let retries = require_unsigned(settings, KEY_RETRIES)?;
        let seconds_to_sleep = require_unsigned(settings, KEY_SECONDS_TO_SLEEP)?;

        let retries = u32::try_from(retries).map_err(|_| ConfigError::InvalidConfig {
            key: KEY_RETRIES,
            expected: "an integer no larger than u32::MAX",
        })?;

        Ok(Self::new(token)
            .with_endpoint_base(endpoint_base)
            .with_retries(retries)
            .with_seconds_to_sleep(seconds_to_sleep))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidConfig {
                key: "timeout",
                expected: "a non-zero duration",
            });
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required option is absent.
    #[error("the following config option is missing: {0}")]
    MissingConfig(&'static str),

    /// An option is present with the wrong type.
    #[error("the following config option must be {expected}: {key}")]
    InvalidConfig {
        /// Offending key.
        key: &'static str,
        /// Description of the accepted type.
        expected: &'static str,
    },
}

impl ConfigError {
    /// Returns the settings key the error refers to.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::MissingConfig(key) | Self::InvalidConfig { key, .. } => key,
        }
    }
}

fn lookup<'a>(settings: &'a Value, key: &str) -> Option<&'a Value> {
    settings.get(key).or_else(|| {
        if key == KEY_RETRIES || key == KEY_SECONDS_TO_SLEEP {
            settings.get(KEY_FAILED_CALLS)?.get(key)
        } else {
            None
        }
    })
}

fn require_string(settings: &Value, key: &'static str) -> Result<String, ConfigError> {
    match lookup(settings, key) {
        None => Err(ConfigError::MissingConfig(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ConfigError::InvalidConfig {
            key,
            expected: "a string",
        }),
    }
}

fn require_unsigned(settings: &Value, key: &'static str) -> Result<u64, ConfigError> {
    let value = lookup(settings, key).ok_or(ConfigError::MissingConfig(key))?;

    value.as_u64().ok_or(ConfigError::InvalidConfig {
        key,
        expected: "a non-negative integer",
    })
}
