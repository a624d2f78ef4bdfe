//! HTTP client implementation.
//!
//! Provides the main client for the BetsAPI REST API.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use super::config::ClientConfig;
use super::endpoint::{ApiVersion, Route};
use super::error::ClientError;
use super::executor::{CallExecutor, RetryPolicy};
use super::observer::CallObserver;
use super::paginator;
use super::transport::{HttpTransport, ReqwestTransport};
use crate::types::{OddsResult, Page, RequestOptions, Sport};

/// Route listing the leagues of a sport.
pub const ROUTE_LEAGUES: &str = "league";

/// Route listing upcoming events of a league.
pub const ROUTE_UPCOMING_EVENTS: &str = "events/upcoming";

/// Route listing ended events of a league.
pub const ROUTE_ENDED_EVENTS: &str = "events/ended";

/// Route returning the odds summary of an event.
pub const ROUTE_ODDS_SUMMARY: &str = "event/odds/summary";

/// Client for the BetsAPI REST API.
pub struct BetsApiClient<T = ReqwestTransport> {
    config: ClientConfig,
    executor: CallExecutor<T>,
}

impl<T: fmt::Debug> fmt::Debug for BetsApiClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BetsApiClient")
            .field("endpoint_base", &self.config.endpoint_base)
            .field("executor", &self.executor)
            .finish_non_exhaustive()
    }
}

impl BetsApiClient<ReqwestTransport> {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::from_config(&config)?;
        Self::with_transport(config, transport)
    }

    /// Creates a new client from an untyped settings mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if a required setting is missing or mistyped, or the
    /// HTTP client cannot be created.
    pub fn from_settings(settings: &Value) -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_settings(settings)?)
    }
}

impl<T: HttpTransport> BetsApiClient<T> {
    /// Creates a new client that sends requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ClientError> {
        config.validate()?;

        info!(
            endpoint_base = %config.endpoint_base,
            retries = config.retries,
            seconds_to_sleep = config.seconds_to_sleep,
            "BetsApi client created"
        );

        let executor = CallExecutor::new(transport, RetryPolicy::from(&config));
        Ok(Self { config, executor })
    }

    /// Replaces the call observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn CallObserver>) -> Self {
        self.executor = self.executor.with_observer(observer);
        self
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the full URL for a route.
    #[must_use]
    pub fn endpoint(&self, route: &Route) -> String {
        route.build(&self.config.endpoint_base, &self.config.token)
    }

    /// Calls a single, unpaged route.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the body is not JSON.
    pub async fn get(&self, route: &Route) -> Result<Value, ClientError> {
        self.executor.call(&self.endpoint(route)).await
    }

    /// Calls a paged route and merges every page's results.
    ///
    /// # Errors
    ///
    /// Returns an error if any page fails or is not a valid page.
    pub async fn get_all(&self, route: &Route) -> Result<Vec<Value>, ClientError> {
        let executor = &self.executor;

        paginator::fetch_all(|page| {
            let endpoint = self.endpoint(&route.clone().page(page));
            async move {
                let value = executor.call(&endpoint).await?;
                Page::from_value(value).map_err(ClientError::Decode)
            }
        })
        .await
    }

    /// Gets the leagues of a sport.
    ///
    /// # Arguments
    ///
    /// * `sport_id` - The API sport id (see [`Sport::id`])
    /// * `options` - `country` filters by country code
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn leagues(
        &self,
        sport_id: u32,
        options: &RequestOptions,
    ) -> Result<Vec<Value>, ClientError> {
        let route = Route::new(ROUTE_LEAGUES)
            .param("sport_id", sport_id)
            .param_opt("cc", options.country.as_deref());
        self.get_all(&route).await
    }

    /// Gets the leagues of a sport.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn leagues_for(
        &self,
        sport: Sport,
        options: &RequestOptions,
    ) -> Result<Vec<Value>, ClientError> {
        self.leagues(sport.id(), options).await
    }

    /// Gets the soccer leagues.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn soccer_leagues(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<Value>, ClientError> {
        self.leagues_for(Sport::Soccer, options).await
    }

    /// Gets the basketball leagues.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn basketball_leagues(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<Value>, ClientError> {
        self.leagues_for(Sport::Basketball, options).await
    }

    /// Gets the tennis leagues.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tennis_leagues(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<Value>, ClientError> {
        self.leagues_for(Sport::Tennis, options).await
    }

    /// Gets the cricket leagues.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn cricket_leagues(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<Value>, ClientError> {
        self.leagues_for(Sport::Cricket, options).await
    }

    /// Gets the ice hockey leagues.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn hockey_leagues(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<Value>, ClientError> {
        self.leagues_for(Sport::IceHockey, options).await
    }

    /// Gets the baseball leagues.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn baseball_leagues(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<Value>, ClientError> {
        self.leagues_for(Sport::Baseball, options).await
    }

    /// Gets the American football leagues.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn american_football_leagues(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<Value>, ClientError> {
        self.leagues_for(Sport::AmericanFootball, options).await
    }

    /// Gets the boxing and UFC leagues.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn fight_leagues(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<Value>, ClientError> {
        self.leagues_for(Sport::BoxingUfc, options).await
    }

    /// Gets the upcoming events of a league.
    ///
    /// Always uses the v2 API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn events(
        &self,
        sport_id: u32,
        league_id: u64,
    ) -> Result<Vec<Value>, ClientError> {
        let route = Route::new(ROUTE_UPCOMING_EVENTS)
            .version(ApiVersion::V2)
            .param("sport_id", sport_id)
            .param("league_id", league_id);
        self.get_all(&route).await
    }

    /// Gets the ended events of a league.
    ///
    /// Always uses the v2 API.
    ///
    /// # Arguments
    ///
    /// * `sport_id` - The API sport id
    /// * `league_id` - The league id
    /// * `options` - `date` filters by day (`YYYYMMDD`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn ended_events(
        &self,
        sport_id: u32,
        league_id: u64,
        options: &RequestOptions,
    ) -> Result<Vec<Value>, ClientError> {
        let route = Route::new(ROUTE_ENDED_EVENTS)
            .version(ApiVersion::V2)
            .param("sport_id", sport_id)
            .param("league_id", league_id)
            .param_opt("day", options.date.as_deref());
        self.get_all(&route).await
    }

    /// Gets the match-winner odds of an event.
    ///
    /// The first bookmaker with complete closing 1X2 odds is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn odds(&self, event_id: u64) -> Result<OddsResult, ClientError> {
        let route = Route::new(ROUTE_ODDS_SUMMARY).param("event_id", event_id);
        let response = self.get(&route).await?;
        Ok(OddsResult::from_summary(&response))
    }
}
