//! Per-request options.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Day filter format expected by the `events/ended` route.
pub const DAY_FORMAT: &str = "%Y%m%d";

/// Optional filters applied to a single request.
///
/// Options are passed to each call rather than stored on the client, so one
/// client can serve concurrent callers with different filters.
///
/// ```rust
/// use betsapi_sdk::RequestOptions;
///
/// let options = RequestOptions::new().for_country("gb").for_date("20240315");
/// assert_eq!(options.country.as_deref(), Some("gb"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// Country code filter (`cc`), used by league listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Day filter (`day`), used by ended-event listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the country code.
    #[must_use]
    pub fn for_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the day filter as a raw string.
    #[must_use]
    pub fn for_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Sets the day filter from a calendar date.
    #[must_use]
    pub fn for_day(self, day: NaiveDate) -> Self {
        self.for_date(day.format(DAY_FORMAT).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = RequestOptions::new();
        assert!(options.country.is_none());
        assert!(options.date.is_none());
    }

    #[test]
    fn test_options_builder_last_write_wins() {
        let options = RequestOptions::new()
            .for_country("de")
            .for_country("gb")
            .for_date("20240101");

        assert_eq!(options.country.as_deref(), Some("gb"));
        assert_eq!(options.date.as_deref(), Some("20240101"));
    }

    #[test]
    fn test_options_for_day() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let options = RequestOptions::new().for_day(day);
        assert_eq!(options.date.as_deref(), Some("20240305"));
    }
}
