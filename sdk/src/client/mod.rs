//! HTTP client for the BetsAPI REST API.
//!
//! This module provides a retrying, paginating client for the BetsAPI
//! sports odds API.
//!
//! # Example
//!
//! ```rust,ignore
//! use betsapi_sdk::client::{BetsApiClient, ClientConfig};
//! use betsapi_sdk::RequestOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BetsApiClient::new(ClientConfig::new("my-token"))?;
//!
//!     // Every page of English soccer leagues
//!     let options = RequestOptions::new().for_country("gb");
//!     let leagues = client.soccer_leagues(&options).await?;
//!     println!("Found {} leagues", leagues.len());
//!
//!     // Match-winner odds for an event
//!     let odds = client.odds(1234567).await?;
//!     println!("Home: {:?}", odds.result.home);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod endpoint;
pub mod error;
pub mod executor;
pub mod http;
pub mod metrics;
pub mod observer;
pub mod paginator;
pub mod transport;

pub use config::{ClientConfig, ConfigError};
pub use endpoint::{ApiVersion, Route};
pub use error::ClientError;
pub use executor::{CallExecutor, RetryPolicy};
pub use http::BetsApiClient;
pub use metrics::{CallMetrics, MetricsSnapshot};
pub use observer::{CallObserver, NoopObserver, TracingObserver};
pub use transport::{
    HttpTransport, ReqwestTransport, TransportError, TransportErrorKind, TransportResponse,
};
