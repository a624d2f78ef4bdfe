//! Retrying call executor.
//!
//! [`CallExecutor`] performs one logical GET: it issues the request, reports
//! the outcome to the observer, and retries transport failures up to the
//! configured budget with a fixed delay between attempts.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error};

use super::config::ClientConfig;
use super::endpoint::redact_token;
use super::error::ClientError;
use super::observer::{notify, CallObserver, TracingObserver};
use super::transport::{HttpTransport, TransportError};

/// Retry behavior for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub retries: u32,

    /// Fixed delay between attempts.
    pub delay: Duration,

    /// Treat non-2xx responses as failed attempts.
    pub fail_on_http_status: bool,
}

impl RetryPolicy {
    /// Returns the maximum number of attempts.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}

impl From<&ClientConfig> for RetryPolicy {
    fn from(config: &ClientConfig) -> Self {
        Self {
            retries: config.retries,
            delay: Duration::from_secs(config.seconds_to_sleep),
            fail_on_http_status: config.fail_on_http_status,
        }
    }
}

/// Executes GET requests with retries.
pub struct CallExecutor<T> {
    transport: T,
    observer: Arc<dyn CallObserver>,
    policy: RetryPolicy,
}

impl<T: fmt::Debug> fmt::Debug for CallExecutor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallExecutor")
            .field("transport", &self.transport)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<T: HttpTransport> CallExecutor<T> {
    /// Creates an executor that logs notifications through `tracing`.
    #[must_use]
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self {
            transport,
            observer: Arc::new(TracingObserver),
            policy,
        }
    }

    /// Replaces the observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn CallObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Returns the retry policy.
    #[must_use]
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Calls `endpoint` and decodes the response body as JSON.
    ///
    /// Transport failures are retried until `retries + 1` attempts have been
    /// made. The first completed response is decoded and returned; a body
    /// that is not JSON fails immediately without a retry.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::CallFailed`] when every attempt failed, or
    /// [`ClientError::Decode`] when the body is not valid JSON.
    pub async fn call(&self, endpoint: &str) -> Result<Value, ClientError> {
        let max_attempts = self.policy.max_attempts();
        let mut attempt = 1;

        loop {
            let failure = match self.transport.get(endpoint).await {
                Ok(response) => {
                    notify(|| self.observer.on_response_received(&response, endpoint));

                    if self.policy.fail_on_http_status && !response.is_success() {
                        TransportError::status(response)
                    } else {
                        debug!(
                            status = response.status,
                            attempt,
                            endpoint = %redact_token(endpoint),
                            "call succeeded"
                        );
                        return serde_json::from_str(&response.body).map_err(ClientError::Decode);
                    }
                }
                Err(err) => err,
            };

            notify(|| self.observer.on_request_failed(&failure, endpoint));

            if attempt >= max_attempts {
                error!(
                    attempts = attempt,
                    endpoint = %redact_token(endpoint),
                    "call failed, retries exhausted: {}",
                    failure
                );
                return Err(ClientError::CallFailed {
                    endpoint: endpoint.to_string(),
                    attempts: attempt,
                    last_error: failure,
                });
            }

            debug!(
                attempt,
                max_attempts,
                "call attempt failed, retrying in {:?}",
                self.policy.delay
            );

            if !self.policy.delay.is_zero() {
                tokio::time::sleep(self.policy.delay).await;
            }

            attempt += 1;
        }
    }
}
