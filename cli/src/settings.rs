//! Connection settings.
//!
//! Settings are layered as command line flags, then environment variables,
//! then defaults. The assembled mapping goes through the SDK's config
//! validator so a missing token or a non-numeric retry count is reported the
//! same way for every source.

use std::time::Duration;

use betsapi_sdk::client::config::{
    DEFAULT_ENDPOINT_BASE, DEFAULT_RETRIES, DEFAULT_SECONDS_TO_SLEEP, DEFAULT_TIMEOUT_SECS,
    KEY_ENDPOINT_BASE, KEY_FAILED_CALLS, KEY_RETRIES, KEY_SECONDS_TO_SLEEP, KEY_TOKEN,
};
use betsapi_sdk::{ClientConfig, ConfigError};
use clap::Args;
use serde_json::{Map, Value};

/// Environment variable holding the API token.
pub const ENV_TOKEN: &str = "BETS_API_TOKEN";

/// Environment variable holding the endpoint base URL.
pub const ENV_ENDPOINT: &str = "BETS_API_ENDPOINT";

/// Environment variable holding the retry count.
pub const ENV_RETRIES: &str = "BETS_API_NUMBER_OF_FAILED_CALL_RETRIES";

/// Environment variable holding the delay between retries.
pub const ENV_SECONDS_TO_SLEEP: &str = "BETS_API_SECONDS_TO_SLEEP_AFTER_FAILED_CALL";

/// Connection settings shared by every command.
#[derive(Debug, Clone, Args)]
pub struct ConnectionArgs {
    /// API token.
    #[arg(long, env = ENV_TOKEN, hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Base URL every route is appended to.
    #[arg(long, env = ENV_ENDPOINT, default_value = DEFAULT_ENDPOINT_BASE, global = true)]
    pub endpoint: String,

    /// Retries after a failed call.
    #[arg(long, env = ENV_RETRIES, default_value_t = DEFAULT_RETRIES.to_string(), global = true)]
    pub retries: String,

    /// Seconds to wait between retries.
    #[arg(
        long,
        env = ENV_SECONDS_TO_SLEEP,
        default_value_t = DEFAULT_SECONDS_TO_SLEEP.to_string(),
        global = true
    )]
    pub seconds_to_sleep: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// Retry and fail on non-2xx responses instead of decoding them.
    #[arg(long, global = true)]
    pub fail_on_http_status: bool,
}

impl ConnectionArgs {
    /// Assembles the settings mapping in the published configuration shape.
    ///
    /// Numeric strings become integers; anything else is kept as a string so
    /// the validator can reject it.
    #[must_use]
    pub fn to_settings(&self) -> Value {
        let mut settings = Map::new();

        if let Some(token) = &self.token {
            settings.insert(KEY_TOKEN.to_string(), Value::from(token.as_str()));
        }
        settings.insert(
            KEY_ENDPOINT_BASE.to_string(),
            Value::from(self.endpoint.as_str()),
        );

        let mut failed_calls = Map::new();
        failed_calls.insert(KEY_RETRIES.to_string(), integer_or_string(&self.retries));
        failed_calls.insert(
            KEY_SECONDS_TO_SLEEP.to_string(),
            integer_or_string(&self.seconds_to_sleep),
        );
        settings.insert(KEY_FAILED_CALLS.to_string(), Value::Object(failed_calls));

        Value::Object(settings)
    }

    /// Builds a validated client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a required setting is missing or mistyped.
    pub fn to_config(&self) -> Result<ClientConfig, ConfigError> {
        let config = ClientConfig::from_settings(&self.to_settings())?
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_fail_on_http_status(self.fail_on_http_status);

        config.validate()?;
        Ok(config)
    }
}

fn integer_or_string(raw: &str) -> Value {
    let trimmed = raw.trim();
    match trimmed.parse::<u64>() {
        Ok(n) => Value::from(n),
        Err(_) => Value::from(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn args() -> ConnectionArgs {
        ConnectionArgs {
            token: Some("TOK".to_string()),
            endpoint: DEFAULT_ENDPOINT_BASE.to_string(),
            retries: "5".to_string(),
            seconds_to_sleep: "1".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            fail_on_http_status: false,
        }
    }

    #[test]
    fn test_to_settings_shape() {
        assert_eq!(
            args().to_settings(),
            json!({
                "token": "TOK",
                "endpoint_base": DEFAULT_ENDPOINT_BASE,
                "failed_calls": { "retries": 5, "seconds_to_sleep": 1 }
            })
        );
    }

    #[test]
    fn test_to_config() {
        let config = ConnectionArgs {
            retries: " 2 ".to_string(),
            timeout_secs: 10,
            fail_on_http_status: true,
            ..args()
        }
        .to_config()
        .unwrap();

        assert_eq!(config.token, "TOK");
        assert_eq!(config.retries, 2);
        assert_eq!(config.seconds_to_sleep, 1);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.fail_on_http_status);
    }

    #[test]
    fn test_to_config_missing_token() {
        let err = ConnectionArgs {
            token: None,
            ..args()
        }
        .to_config()
        .unwrap_err();

        assert_eq!(err, ConfigError::MissingConfig(KEY_TOKEN));
    }

    #[test]
    fn test_to_config_non_numeric_retries() {
        let err = ConnectionArgs {
            retries: "five".to_string(),
            ..args()
        }
        .to_config()
        .unwrap_err();

        assert_eq!(err.key(), KEY_RETRIES);
    }

    #[test]
    fn test_to_config_zero_timeout() {
        let err = ConnectionArgs {
            timeout_secs: 0,
            ..args()
        }
        .to_config()
        .unwrap_err();

        assert_eq!(err.key(), "timeout");
    }
}
