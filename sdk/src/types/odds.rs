//! Odds types.
//!
//! Provides the match-winner odds extracted from an odds summary response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Market key for full-time match winner (1X2) odds.
pub const MATCH_WINNER_MARKET: &str = "1_1";

/// Full-time 1X2 odds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchOdds {
    /// Home win odds.
    pub home: Option<f64>,

    /// Draw odds.
    pub draw: Option<f64>,

    /// Away win odds.
    pub away: Option<f64>,
}

impl MatchOdds {
    /// Returns true if all three prices are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.home.is_some() && self.draw.is_some() && self.away.is_some()
    }
}

/// Odds for an event, taken from a single bookmaker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OddsResult {
    /// Bookmaker the odds were taken from, if any qualified.
    pub bookmaker: Option<String>,

    /// The 1X2 prices.
    pub result: MatchOdds,
}

impl OddsResult {
    /// Extracts odds from an `event/odds/summary` response.
    ///
    /// Bookmakers are scanned in document order and the first one whose
    /// closing (`end`) 1X2 market carries home, draw and away prices wins.
    /// No price comparison is made between bookmakers. When none qualifies
    /// every field is `None`.
    #[must_use]
    pub fn from_summary(response: &Value) -> Self {
        let Some(bookmakers) = response.get("results").and_then(Value::as_object) else {
            return Self::default();
        };

        bookmakers
            .iter()
            .find_map(|(bookmaker, odds)| {
                let market = odds.get("end")?.get(MATCH_WINNER_MARKET)?;
                let result = MatchOdds {
                    home: price(market.get("home_od")),
                    draw: price(market.get("draw_od")),
                    away: price(market.get("away_od")),
                };

                result.is_complete().then(|| Self {
                    bookmaker: Some(bookmaker.clone()),
                    result,
                })
            })
            .unwrap_or_default()
    }
}

/// Reads a price that the API may send either as a number or as a decimal
/// string (e.g. `"1.833"`).
fn price(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
