//! Endpoint and timing configuration.

use std::time::Duration;

/// Public open-data endpoint for household counts by household type and sex.
pub const DEFAULT_ENDPOINT: &str = "https://www.ris.gov.tw/rs-opendata/api/v1/datastore/ODRP019";

/// Environment variable naming the endpoint, read at build time by the web
/// app and at runtime by the CLI.
pub const ENDPOINT_ENV: &str = "CENSUS_API_ENDPOINT";

/// Delays used by the UI. None of them signal data availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// How long a request must be in flight before the loading view appears.
    pub loading_debounce: Duration,
    /// How long after a request completes the submit button stays disabled.
    pub control_debounce: Duration,
    /// How long the cosmetic "submitting" flag stays raised.
    pub presentation_delay: Duration,
    /// In-flight requests older than this become errors.
    pub fetch_timeout: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            loading_debounce: Duration::from_millis(1200),
            control_debounce: Duration::from_millis(450),
            presentation_delay: Duration::from_millis(2000),
            fetch_timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub timings: Timings,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }
}

impl Config {
    pub fn with_endpoint(endpoint: &str) -> Self {
        let endpoint = endpoint.trim().trim_end_matches('/');
        let endpoint = if endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            endpoint
        };
        Self {
            endpoint: endpoint.to_string(),
            timings: Timings::default(),
        }
    }

    /// Endpoint baked in at compile time (`CENSUS_API_ENDPOINT`), for WASM builds.
    pub fn from_build_env() -> Self {
        Self::with_endpoint(option_env!("CENSUS_API_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT))
    }

    /// Endpoint from the process environment, for native builds.
    pub fn from_env() -> Self {
        match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) => Self::with_endpoint(&endpoint),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_is_trimmed() {
        let config = Config::with_endpoint(" https://example.test/api/ ");
        assert_eq!(config.endpoint, "https://example.test/api");
    }

    #[test]
    fn test_blank_endpoint_uses_default() {
        assert_eq!(Config::with_endpoint("").endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_loading_debounce_outlasts_control_debounce() {
        let timings = Timings::default();
        assert!(timings.loading_debounce > timings.control_debounce);
        assert!(timings.fetch_timeout > timings.presentation_delay);
    }
}
