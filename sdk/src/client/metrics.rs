//! Call metrics.
//!
//! Provides an observer with atomic counters for monitoring API calls.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use super::observer::CallObserver;
use super::transport::{TransportError, TransportErrorKind, TransportResponse};

/// Counters for calls made through a client.
#[derive(Debug)]
pub struct CallMetrics {
    /// Completed responses.
    responses_received: AtomicU64,

    /// Completed responses with a non-2xx status.
    error_statuses: AtomicU64,

    /// Failed attempts.
    requests_failed: AtomicU64,

    /// Failed attempts that were completed responses with a rejected status.
    status_failures: AtomicU64,

    /// Total response body bytes.
    bytes_received: AtomicU64,

    /// Start time for rate calculation.
    start_time: Instant,
}

impl Default for CallMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl CallMetrics {
    /// Creates a new metrics instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            responses_received: AtomicU64::new(0),
            error_statuses: AtomicU64::new(0),
            requests_failed: AtomicU64::new(0),
            status_failures: AtomicU64::new(0),
            bytes_received: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Returns the number of completed responses.
    #[must_use]
    pub fn responses_received(&self) -> u64 {
        self.responses_received.load(Ordering::Relaxed)
    }

    /// Returns the number of failed attempts.
    #[must_use]
    pub fn requests_failed(&self) -> u64 {
        self.requests_failed.load(Ordering::Relaxed)
    }

    /// Returns the uptime.
    #[must_use]
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns a snapshot of all counters.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            responses_received: self.responses_received.load(Ordering::Relaxed),
            error_statuses: self.error_statuses.load(Ordering::Relaxed),
            requests_failed: self.requests_failed.load(Ordering::Relaxed),
            status_failures: self.status_failures.load(Ordering::Relaxed),
            bytes_received: self.bytes_received.load(Ordering::Relaxed),
            uptime: self.uptime(),
        }
    }

    /// Resets all counters.
    pub fn reset(&self) {
        self.responses_received.store(0, Ordering::Relaxed);
        self.error_statuses.store(0, Ordering::Relaxed);
        self.requests_failed.store(0, Ordering::Relaxed);
        self.status_failures.store(0, Ordering::Relaxed);
        self.bytes_received.store(0, Ordering::Relaxed);
    }
}

impl CallObserver for CallMetrics {
    fn on_response_received(&self, response: &TransportResponse, _endpoint: &str) {
        self.responses_received.fetch_add(1, Ordering::Relaxed);
        self.bytes_received
            .fetch_add(response.body.len() as u64, Ordering::Relaxed);
        if !response.is_success() {
            self.error_statuses.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn on_request_failed(&self, error: &TransportError, _endpoint: &str) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
        if error.kind == TransportErrorKind::Status {
            self.status_failures.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Point-in-time copy of [`CallMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Completed responses.
    pub responses_received: u64,
    /// Completed responses with a non-2xx status.
    pub error_statuses: u64,
    /// Failed attempts.
    pub requests_failed: u64,
    /// Failed attempts that were also reported as received responses.
    pub status_failures: u64,
    /// Total response body bytes.
    pub bytes_received: u64,
    /// Uptime.
    pub uptime: Duration,
}

impl MetricsSnapshot {
    /// Returns the number of attempts made.
    ///
    /// A response rejected for its status is reported both as received and
    /// as failed, so it is counted once here.
    #[must_use]
    pub fn attempts(&self) -> u64 {
        (self.responses_received + self.requests_failed).saturating_sub(self.status_failures)
    }

    /// Returns the share of attempts that failed, in `[0, 1]`.
    #[must_use]
    pub fn failure_rate(&self) -> f64 {
        let attempts = self.attempts();
        if attempts == 0 {
            return 0.0;
        }
        self.requests_failed as f64 / attempts as f64
    }
}
