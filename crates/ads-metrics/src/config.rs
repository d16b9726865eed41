//! Configuration for the ADS metrics aggregator.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the ADS API (v1).
    pub const BASE_URL: &str = "https://api.adsabs.harvard.edu/v1";

    /// Search endpoint, relative to the base URL.
    pub const SEARCH_PATH: &str = "search/query";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Rows requested in the single search (ADS caps a page at 2000).
    pub const MAX_ROWS: u32 = 2000;

    /// Default name of the development key file.
    pub const KEY_FILE: &str = "ADS_DEV_KEY.txt";
}

/// The fixed lookup performed by the binary.
pub mod lookup {
    /// Author searched when the binary runs without configuration.
    pub const AUTHOR: &str = "Lacaille, K";

    /// Fields requested for each publication.
    pub const METRICS: &[&str] = &["citation_count", "read_count", "pub"];
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the ADS API (for testing with mock servers).
    pub api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Rows requested in the search.
    pub rows: u32,
}

impl Config {
    /// Create a configuration pointing at the public ADS API.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            rows: api::MAX_ROWS,
        }
    }

    /// Create a test configuration with a custom URL for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: format!("{}/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            rows: api::MAX_ROWS,
        }
    }

    /// Full URL of the search endpoint.
    #[must_use]
    pub fn search_url(&self) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), api::SEARCH_PATH)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.rows, 2000);
        assert_eq!(
            config.search_url(),
            "https://api.adsabs.harvard.edu/v1/search/query"
        );
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(
            config.search_url(),
            "http://127.0.0.1:9999/v1/search/query"
        );
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup::AUTHOR, "Lacaille, K");
        assert_eq!(
            lookup::METRICS,
            &["citation_count", "read_count", "pub"]
        );
    }
}
