use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use super::{StationProvider, prepare_records};
use crate::config::SourceConfig;
use crate::models::StationRecord;
use crate::{FuelRankError, Result};

/// Client for the hosted price table's REST interface
pub struct SupabaseSource {
    client: ClientWithMiddleware,
    api_key: Option<String>,
    url: String,
}

impl SupabaseSource {
    /// Create a new client; endpoint, key and table come from `config`
    pub fn new(config: &SourceConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(FuelRankError::config(
                "Station table base URL is not set (source.base_url / FUELRANK_SOURCE__BASE_URL)",
            ));
        }

        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("FuelRank/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FuelRankError::config(format!("Failed to create HTTP client: {e}")))?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let client = ClientBuilder::new(inner)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            url: Self::table_url(&config.base_url, &config.table),
        })
    }

    /// Rows ordered by city then station name, the order users expect for ties
    fn table_url(base_url: &str, table: &str) -> String {
        format!(
            "{}/rest/v1/{}?select=*&order=city.asc,station_name.asc",
            base_url.trim_end_matches('/'),
            urlencoding::encode(table)
        )
    }

    #[instrument(name = "fetch_table", level = "debug", skip(self))]
    async fn fetch_rows(&self) -> Result<Vec<StationRecord>> {
        let start_time = Instant::now();
        debug!("Station table request URL: {}", self.url);

        let mut request = self.client.get(&self.url);
        if let Some(api_key) = &self.api_key {
            request = request.header("apikey", api_key).bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FuelRankError::api(format!("Station table request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FuelRankError::api(format!("Failed to read station table response: {e}")))?;

        if !status.is_success() {
            return Err(FuelRankError::api(format!(
                "Station table returned {status}: {}",
                body.trim()
            )));
        }

        let rows: Vec<StationRecord> = serde_json::from_str(&body).map_err(|e| {
            FuelRankError::parse(format!("Failed to parse station table response: {e}"))
        })?;

        let elapsed = start_time.elapsed();
        if elapsed.as_secs() > 5 {
            warn!("Slow station table response: {:.3}s", elapsed.as_secs_f64());
        }
        info!(
            "Fetched {} station rows in {:.3}s",
            rows.len(),
            elapsed.as_secs_f64()
        );

        Ok(rows)
    }
}

#[async_trait]
impl StationProvider for SupabaseSource {
    async fn fetch_stations(&self) -> Result<Vec<StationRecord>> {
        let rows = self.fetch_rows().await?;
        Ok(prepare_records(rows))
    }
}
