//! Endpoint construction.
//!
//! A [`Route`] describes one request against the API: the route path, an
//! optional page, an optional API version override and extra query
//! parameters. [`Route::build`] turns it into a full URL for a given base and
//! token.

use std::fmt;

/// API version a route can be pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// Version 1.
    V1,
    /// Version 2.
    V2,
}

impl ApiVersion {
    /// Returns the path segment for this version (e.g., "v2").
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// A request route with its query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: &'static str,
    page: Option<u32>,
    version: Option<ApiVersion>,
    params: Vec<(&'static str, String)>,
}

impl Route {
    /// Creates a route for the given path (e.g., "league").
    #[must_use]
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            page: None,
            version: None,
            params: Vec::new(),
        }
    }

    /// Sets the page number. Page `0` is treated as no page.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Pins the route to an API version regardless of the base URL.
    #[must_use]
    pub fn version(mut self, version: ApiVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    /// Appends a query parameter when a value is present.
    #[must_use]
    pub fn param_opt(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Returns the route path.
    #[must_use]
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Builds the full endpoint URL.
    ///
    /// The result is `<base><path>?token=<token>`, followed by `&page=<n>`
    /// for a positive page and then every extra parameter in insertion order.
    #[must_use]
    pub fn build(&self, base: &str, token: &str) -> String {
        let base = match self.version {
            Some(version) => replace_version_segment(base, version),
            None => base.to_string(),
        };

        let mut endpoint = format!("{}{}?token={}", base, self.path, token);

        if let Some(page) = self.page.filter(|p| *p > 0) {
            endpoint.push_str(&format!("&page={}", page));
        }

        for (key, value) in &self.params {
            endpoint.push('&');
            endpoint.push_str(key);
            endpoint.push('=');
            endpoint.push_str(value);
        }

        endpoint
    }
}

/// Replaces the first `v<digits>` path segment of `base` with `version`.
///
/// Bases without a version segment are returned unchanged.
#[must_use]
pub fn replace_version_segment(base: &str, version: ApiVersion) -> String {
    let path_start = base
        .find("://")
        .and_then(|scheme_end| {
            let host_start = scheme_end + 3;
            base[host_start..].find('/').map(|i| host_start + i)
        })
        .unwrap_or(base.len());

    let (origin, path) = base.split_at(path_start);

    let mut replaced = false;
    let segments: Vec<&str> = path
        .split('/')
        .map(|segment| {
            if !replaced && is_version_segment(segment) {
                replaced = true;
                version.segment()
            } else {
                segment
            }
        })
        .collect();

    format!("{}{}", origin, segments.join("/"))
}

fn is_version_segment(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}

/// Masks the token value in an endpoint so it can be logged.
#[must_use]
pub fn redact_token(endpoint: &str) -> String {
    let Some(start) = endpoint.find("token=").map(|i| i + "token=".len()) else {
        return endpoint.to_string();
    };

    let end = endpoint[start..]
        .find('&')
        .map_or(endpoint.len(), |i| start + i);

    format!("{}***{}", &endpoint[..start], &endpoint[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_V1: &str = "https://api.b365api.com/v1/";

    #[test]
    fn test_build_minimal() {
        let endpoint = Route::new("league").build(BASE_V1, "TOK");
        assert_eq!(endpoint, "https://api.b365api.com/v1/league?token=TOK");
        assert!(endpoint.ends_with("league?token=TOK"));
    }

    #[test]
    fn test_build_with_page() {
        let endpoint = Route::new("league").page(2).build(BASE_V1, "TOK");
        assert_eq!(endpoint, "https://api.b365api.com/v1/league?token=TOK&page=2");
    }

    #[test]
    fn test_build_page_zero_is_no_page() {
        let endpoint = Route::new("league").page(0).build(BASE_V1, "TOK");
        assert_eq!(endpoint, "https://api.b365api.com/v1/league?token=TOK");
        assert!(!endpoint.contains("page="));
    }

    #[test]
    fn test_build_version_override() {
        let endpoint = Route::new("events/upcoming")
            .version(ApiVersion::V2)
            .build(BASE_V1, "TOK");
        assert_eq!(
            endpoint,
            "https://api.b365api.com/v2/events/upcoming?token=TOK"
        );
    }

    #[test]
    fn test_build_version_override_same_version() {
        let endpoint = Route::new("league")
            .version(ApiVersion::V2)
            .build("https://api.b365api.com/v2/", "TOK");
        assert_eq!(endpoint, "https://api.b365api.com/v2/league?token=TOK");
    }

    #[test]
    fn test_build_params_in_order() {
        let endpoint = Route::new("league")
            .page(3)
            .param("sport_id", 1)
            .param_opt("cc", Some("gb"))
            .param_opt("day", None)
            .build(BASE_V1, "TOK");
        assert_eq!(
            endpoint,
            "https://api.b365api.com/v1/league?token=TOK&page=3&sport_id=1&cc=gb"
        );
    }

    #[test]
    fn test_build_idempotent() {
        let route = Route::new("events/ended")
            .page(4)
            .version(ApiVersion::V2)
            .param("sport_id", 18)
            .param("league_id", 42);

        assert_eq!(route.build(BASE_V1, "TOK"), route.build(BASE_V1, "TOK"));
    }

    #[test]
    fn test_replace_version_segment() {
        assert_eq!(
            replace_version_segment("https://api.b365api.com/v1/", ApiVersion::V2),
            "https://api.b365api.com/v2/"
        );
        assert_eq!(
            replace_version_segment("https://api.b365api.com/v2", ApiVersion::V1),
            "https://api.b365api.com/v1"
        );
        assert_eq!(
            replace_version_segment("http://localhost:8080/proxy/v1/", ApiVersion::V2),
            "http://localhost:8080/proxy/v2/"
        );
    }

    #[test]
    fn test_replace_version_segment_ignores_host() {
        assert_eq!(
            replace_version_segment("https://v1.example.com/api/", ApiVersion::V2),
            "https://v1.example.com/api/"
        );
    }

    #[test]
    fn test_redact_token() {
        assert_eq!(
            redact_token("https://api.b365api.com/v1/league?token=SECRET&page=2"),
            "https://api.b365api.com/v1/league?token=***&page=2"
        );
        assert_eq!(
            redact_token("https://api.b365api.com/v1/league?token=SECRET"),
            "https://api.b365api.com/v1/league?token=***"
        );
        assert_eq!(redact_token("https://example.com/"), "https://example.com/");
    }
}
