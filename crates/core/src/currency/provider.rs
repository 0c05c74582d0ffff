//! Exchange rate providers.
//!
//! A provider returns the latest rates quoted against USD. The cache turns
//! them into a [`RateMatrix`](super::RateMatrix) and never lets a provider
//! error reach a client.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use convertly_shared::AppError;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::code::Currency;

/// Errors raised while fetching or interpreting provider rates.
#[derive(Debug, Error)]
pub enum RateProviderError {
    /// The request could not be sent or the connection failed.
    #[error("rate request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status.
    #[error("rate provider returned status {0}")]
    Status(u16),

    /// The body was not the expected `{ "rates": { ... } }` shape.
    #[error("malformed rate response: {0}")]
    MalformedResponse(String),

    /// A supported currency was absent from the response.
    #[error("rate response has no rate for {0}")]
    MissingRate(Currency),

    /// A rate was zero, negative or not finite.
    #[error("rate response has invalid rate {rate} for {currency}")]
    InvalidRate {
        /// Currency with the bad rate.
        currency: Currency,
        /// Rate as received.
        rate: f64,
    },
}

impl From<RateProviderError> for AppError {
    fn from(err: RateProviderError) -> Self {
        Self::UpstreamUnavailable(err.to_string())
    }
}

/// Source of the latest exchange rates relative to USD.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the latest rates, keyed by ISO code, as units per 1 USD.
    async fn latest_usd_rates(&self) -> Result<HashMap<String, f64>, RateProviderError>;
}

/// Response body of the "latest rates" endpoint.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

/// Default HTTP request timeout.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Provider backed by a public "latest rates relative to USD" HTTP endpoint.
///
/// No authentication; the endpoint is read with a plain GET.
pub struct HttpRateProvider {
    client: Client,
    url: String,
}

impl HttpRateProvider {
    /// Creates a provider for `url` with the default timeout.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Creates a provider for `url` whose requests give up after `timeout`.
    #[must_use]
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
        }
    }

    /// The endpoint this provider reads.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RateProvider for HttpRateProvider {
    async fn latest_usd_rates(&self) -> Result<HashMap<String, f64>, RateProviderError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| RateProviderError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateProviderError::Status(status.as_u16()));
        }

        let body: LatestRatesResponse = response
            .json()
            .await
            .map_err(|e| RateProviderError::MalformedResponse(e.to_string()))?;

        Ok(body.rates)
    }
}
