//! Best-effort remote city lookup with a static fallback.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

use super::{fallback_cities, normalize_cities, parse_city_payload};
use crate::config::CityLookupConfig;
use crate::error::HomeLoanError;
use crate::HomeLoanResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitySource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityList {
    pub cities: Vec<String>,
    pub source: CitySource,
}

pub struct CityLookup {
    client: reqwest::Client,
    config: CityLookupConfig,
}

impl CityLookup {
    pub fn new(config: CityLookupConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: CityLookupConfig) -> Self {
        Self { client, config }
    }

    /// Remote list when it arrives in time and in shape; the fallback table
    /// otherwise. Never fails.
    pub async fn load(&self) -> CityList {
        match self.fetch_remote().await {
            Ok(cities) => {
                debug!(count = cities.len(), "loaded cities from remote lookup");
                CityList {
                    cities,
                    source: CitySource::Remote,
                }
            }
            Err(e) => {
                warn!(error = %e, "city lookup failed, using fallback list");
                CityList {
                    cities: fallback_cities(),
                    source: CitySource::Fallback,
                }
            }
        }
    }

    /// One POST to the lookup endpoint, raced against the configured timeout.
    /// The names come back normalized; a list with no usable name is an error.
    pub async fn fetch_remote(&self) -> HomeLoanResult<Vec<String>> {
        let timeout = Duration::from_millis(self.config.timeout_ms);
        let raw = tokio::time::timeout(timeout, self.request())
            .await
            .map_err(|_| {
                HomeLoanError::CityLookup(format!(
                    "no response within {} ms",
                    self.config.timeout_ms
                ))
            })??;
        let cities = normalize_cities(raw);
        if cities.is_empty() {
            return Err(HomeLoanError::CityLookup("no usable city names in response".into()));
        }
        Ok(cities)
    }

    async fn request(&self) -> HomeLoanResult<Vec<String>> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&json!({ "country": self.config.country }))
            .send()
            .await
            .map_err(|e| HomeLoanError::CityLookup(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HomeLoanError::CityLookup(format!("HTTP {}", status.as_u16())));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| HomeLoanError::CityLookup(format!("malformed body: {e}")))?;
        parse_city_payload(&body)
    }
}
