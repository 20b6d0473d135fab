//! Native HTTP client for the statistics API.

use crate::config::Config;
use crate::error::FetchError;
use crate::fetch::FetchResult;
use crate::query::QueryKey;
use crate::response::classify_body;
use log::{info, warn};
use reqwest::{Client, StatusCode};
use std::time::Duration;

const MAX_TRIES: u32 = 3;

pub struct CensusClient {
    client: Client,
    endpoint: String,
    timeout_ms: u64,
}

impl CensusClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timings.fetch_timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout_ms: config.timings.fetch_timeout.as_millis() as u64,
        })
    }

    /// Fetch and classify the rows for `key`, retrying transport failures
    /// with exponential backoff.
    ///
    /// A classified payload (success, no data, unknown message) is returned
    /// as-is; only the last transport error is surfaced as `Err`.
    pub async fn fetch(&self, key: &QueryKey) -> Result<FetchResult, FetchError> {
        let url = key.url(&self.endpoint);
        let mut sleep_millis: u64 = 1000;
        let mut last_error = FetchError::Transport("no attempt made".to_string());

        for attempt in 1..=MAX_TRIES {
            match self.fetch_once(&url).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    warn!("Attempt {}/{}: {} for {}", attempt, MAX_TRIES, e, url);
                    last_error = e;
                }
            }

            if attempt < MAX_TRIES {
                info!("Sleeping for {} milliseconds before retry", sleep_millis);
                tokio::time::sleep(Duration::from_millis(sleep_millis)).await;
                sleep_millis *= 2;
            }
        }

        warn!("All attempts failed for {}", url);
        Err(last_error)
    }

    async fn fetch_once(&self, url: &str) -> Result<FetchResult, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout_ms)
            } else {
                FetchError::Transport(e.to_string())
            }
        })?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(classify_body(&body))
    }
}
