//! Call observers.
//!
//! The call executor reports every completed response and every failed
//! attempt to a [`CallObserver`]. Observers are notification sinks: they
//! return nothing and cannot influence the outcome of a call.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, warn};

use super::endpoint::redact_token;
use super::transport::{TransportError, TransportResponse};

/// Receives call notifications.
pub trait CallObserver: Send + Sync {
    /// Called after every completed GET, whatever its status.
    fn on_response_received(&self, response: &TransportResponse, endpoint: &str) {
        let _ = (response, endpoint);
    }

    /// Called after every failed attempt.
    fn on_request_failed(&self, error: &TransportError, endpoint: &str) {
        let _ = (error, endpoint);
    }
}

/// Observer that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CallObserver for NoopObserver {}

/// Observer that logs notifications through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CallObserver for TracingObserver {
    fn on_response_received(&self, response: &TransportResponse, endpoint: &str) {
        debug!(
            status = response.status,
            bytes = response.body.len(),
            endpoint = %redact_token(endpoint),
            "BetsApi response received"
        );
    }

    fn on_request_failed(&self, error: &TransportError, endpoint: &str) {
        warn!(
            kind = %error.kind,
            endpoint = %redact_token(endpoint),
            "BetsApi request failed: {}",
            error.message
        );
    }
}

/// Runs an observer callback, containing any panic it raises.
pub(crate) fn notify<F>(callback: F)
where
    F: FnOnce(),
{
    if catch_unwind(AssertUnwindSafe(callback)).is_err() {
        warn!("call observer panicked; notification dropped");
    }
}
