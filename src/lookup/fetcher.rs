//! Country-name lookups over HTTP
//!
//! One GET per call, parsed into a flat list of display names. Overlapping
//! calls are independent: nothing here de-duplicates, cancels, caches or
//! retries.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use super::query::build_lookup_url;
use crate::config::ApiConfig;
use crate::error::AppError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur during a lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Connection, DNS, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// Body was not a list of entries with a `name.common` string
    #[error("Unexpected response: {0}")]
    Parse(String),
}

#[derive(Debug, Deserialize)]
struct CountryEntry {
    name: CountryName,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: String,
}

/// HTTP client bound to a lookup service
#[derive(Debug, Clone)]
pub struct LookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl LookupClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Build a client from the `[api]` configuration section
    pub fn from_config(config: &ApiConfig) -> Result<Self, AppError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self::new(http, config.base_url.trim()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up country names matching `text`
    pub async fn fetch(&self, text: &str) -> Result<Vec<String>, LookupError> {
        fetch_country_names(&self.http, &self.base_url, text).await
    }
}

/// Issue one lookup and extract the common name of every entry, in order
///
/// The HTTP status is not inspected. A 404 from the service carries an error
/// object, which then fails to parse as a list; a non-2xx status with a list
/// body would be accepted.
pub async fn fetch_country_names(
    client: &reqwest::Client,
    base_url: &str,
    text: &str,
) -> Result<Vec<String>, LookupError> {
    let url = build_lookup_url(base_url, text);
    log::debug!("Lookup GET {}", url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;

    log::debug!("Lookup for {:?} returned {}", text, response.status());

    let body = response
        .text()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;

    parse_country_names(&body)
}

/// Parse a lookup response body into display names
pub fn parse_country_names(body: &str) -> Result<Vec<String>, LookupError> {
    let entries: Vec<CountryEntry> =
        serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    Ok(entries.into_iter().map(|entry| entry.name.common).collect())
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod fetcher_tests;
