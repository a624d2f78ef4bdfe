//! BetsAPI SDK - Rust client library for the BetsAPI sports odds API.
//!
//! This crate turns BetsAPI's paginated and occasionally unreliable JSON
//! endpoints into plain collections of leagues, events and odds. Pagination,
//! retries and endpoint construction stay inside the client.
//!
//! # Core Types
//!
//! - [`BetsApiClient`] — Resource accessors (leagues, events, odds)
//! - [`ClientConfig`] — Token, endpoint base and retry settings
//! - [`RequestOptions`] — Per-call country and day filters
//! - [`Sport`] — The fixed sport id table
//! - [`OddsResult`] — Match-winner odds from the first complete bookmaker
//!
//! # Extension Points
//!
//! - [`HttpTransport`] — Plug in another HTTP stack
//! - [`CallObserver`] — Receive every response and failed attempt
//!
//! # Example
//!
//! ```rust
//! use betsapi_sdk::{ClientConfig, RequestOptions, Sport};
//!
//! let config = ClientConfig::new("my-token").with_retries(2);
//! let options = RequestOptions::new().for_country("gb");
//! assert_eq!(Sport::Soccer.id(), 1);
//! ```

pub mod client;
pub mod types;

pub use client::{
    BetsApiClient, CallMetrics, CallObserver, ClientConfig, ClientError, ConfigError,
    HttpTransport, TransportError, TransportResponse,
};
pub use types::{MatchOdds, OddsResult, Page, Pager, RequestOptions, Sport};
