//! CLI commands.

use betsapi_sdk::{BetsApiClient, ClientError, HttpTransport, RequestOptions, Sport};
use chrono::{Days, Local, NaiveDate};
use clap::Subcommand;
use serde_json::{json, Value};
use tracing::info;

/// Commands supported by the CLI.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every sport and its API id.
    Sports,

    /// List the leagues of a sport.
    Leagues {
        /// Sport name (e.g. "soccer", "ice-hockey") or numeric id.
        sport: Sport,

        /// Country code filter (e.g. "gb").
        #[arg(long)]
        country: Option<String>,
    },

    /// List the upcoming events of a league.
    Events {
        /// Sport name or numeric id.
        sport: Sport,

        /// League id.
        league_id: u64,
    },

    /// List the ended events of a league.
    EndedEvents {
        /// Sport name or numeric id.
        sport: Sport,

        /// League id.
        league_id: u64,

        /// Day filter: "today", "yesterday", YYYY-MM-DD or YYYYMMDD.
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the match-winner odds of an event.
    Odds {
        /// Event id.
        event_id: u64,
    },
}

impl Command {
    /// Returns true if the command needs an API client.
    #[must_use]
    pub fn needs_client(&self) -> bool {
        !matches!(self, Self::Sports)
    }
}

/// Returns the sport table as JSON.
#[must_use]
pub fn sports_table() -> Value {
    Value::Array(
        Sport::ALL
            .iter()
            .map(|sport| json!({ "name": sport.name(), "id": sport.id() }))
            .collect(),
    )
}

/// Resolves a CLI day filter into the API's day format.
///
/// Relative names and ISO dates are converted; anything else is passed
/// through unchanged.
#[must_use]
pub fn resolve_date(raw: &str, today: NaiveDate) -> String {
    let options = RequestOptions::new();
    let options = match raw.trim().to_ascii_lowercase().as_str() {
        "today" => options.for_day(today),
        "yesterday" => match today.checked_sub_days(Days::new(1)) {
            Some(day) => options.for_day(day),
            None => options.for_date(raw),
        },
        _ => match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(day) => options.for_day(day),
            Err(_) => options.for_date(raw.trim()),
        },
    };
    options.date.unwrap_or_default()
}

/// Runs a command against the client and returns its JSON output.
///
/// # Errors
///
/// Returns an error if the underlying API call fails.
pub async fn run<T: HttpTransport>(
    client: &BetsApiClient<T>,
    command: &Command,
) -> Result<Value, ClientError> {
    let output = match command {
        Command::Sports => sports_table(),
        Command::Leagues { sport, country } => {
            let mut options = RequestOptions::new();
            if let Some(country) = country {
                options = options.for_country(country.as_str());
            }
            let leagues = client.leagues_for(*sport, &options).await?;
            info!(sport = %sport, count = leagues.len(), "fetched leagues");
            Value::Array(leagues)
        }
        Command::Events { sport, league_id } => {
            let events = client.events(sport.id(), *league_id).await?;
            info!(sport = %sport, league_id, count = events.len(), "fetched events");
            Value::Array(events)
        }
        Command::EndedEvents {
            sport,
            league_id,
            date,
        } => {
            let mut options = RequestOptions::new();
            if let Some(date) = date {
                options = options.for_date(resolve_date(date, Local::now().date_naive()));
            }
            let events = client.ended_events(sport.id(), *league_id, &options).await?;
            info!(sport = %sport, league_id, count = events.len(), "fetched ended events");
            Value::Array(events)
        }
        Command::Odds { event_id } => {
            let odds = client.odds(*event_id).await?;
            serde_json::to_value(odds)?
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use betsapi_sdk::{ClientConfig, TransportError, TransportResponse};

    use super::*;

    /// Transport that answers every request with the same body and records
    /// the requested URLs.
    #[derive(Debug)]
    struct FixedTransport {
        body: String,
        urls: Mutex<Vec<String>>,
    }

    impl FixedTransport {
        fn new(body: Value) -> Self {
            Self {
                body: body.to_string(),
                urls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpTransport for FixedTransport {
        async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(TransportResponse::ok(self.body.clone()))
        }
    }

    fn client(body: Value) -> BetsApiClient<FixedTransport> {
        let config = ClientConfig::new("TOK")
            .with_endpoint_base("https://api.b365api.com/v1/")
            .with_retries(0);
        BetsApiClient::with_transport(config, FixedTransport::new(body)).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sports_table() {
        let table = sports_table();
        let rows = table.as_array().unwrap();
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[0], json!({ "name": "soccer", "id": 1 }));
    }

    #[test]
    fn test_resolve_date() {
        let today = day(2024, 3, 1);
        assert_eq!(resolve_date("today", today), "20240301");
        assert_eq!(resolve_date("Yesterday", today), "20240229");
        assert_eq!(resolve_date("2023-12-25", today), "20231225");
        assert_eq!(resolve_date("20231225", today), "20231225");
    }

    #[test]
    fn test_needs_client() {
        assert!(!Command::Sports.needs_client());
        assert!(Command::Odds { event_id: 1 }.needs_client());
    }

    #[tokio::test]
    async fn test_run_leagues() {
        let client = client(json!({
            "pager": { "page": 1, "per_page": 50, "total": 1 },
            "results": [{ "id": "94", "name": "England Premier League" }]
        }));

        let output = run(
            &client,
            &Command::Leagues {
                sport: Sport::Soccer,
                country: Some("gb".to_string()),
            },
        )
        .await
        .unwrap();

        assert_eq!(output[0]["name"], "England Premier League");
    }

    #[test]
    fn test_run_ended_events_with_date() {
        let client = client(json!({
            "pager": { "page": 1, "per_page": 50, "total": 0 },
            "results": []
        }));

        let output = tokio_test::block_on(run(
            &client,
            &Command::EndedEvents {
                sport: Sport::Tennis,
                league_id: 7,
                date: Some("2024-01-02".to_string()),
            },
        ))
        .unwrap();

        assert_eq!(output, json!([]));
    }

    #[tokio::test]
    async fn test_run_odds() {
        let client = client(json!({
            "results": {
                "bet365": { "end": { "1_1": { "home_od": "1.50", "draw_od": "3.20", "away_od": "4.10" } } }
            }
        }));

        let output = run(&client, &Command::Odds { event_id: 9 }).await.unwrap();

        assert_eq!(
            output,
            json!({ "bookmaker": "bet365", "result": { "home": 1.5, "draw": 3.2, "away": 4.1 } })
        );
    }
}
