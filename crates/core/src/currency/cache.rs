//! Exchange rate cache using Moka.
//!
//! Holds exactly one rate snapshot. A snapshot is replaced wholesale when it
//! expires: live rates after `live_ttl`, fallback rates after `fallback_ttl`.
//! Concurrent callers that find the snapshot missing or expired share a
//! single refresh instead of each calling the provider.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use moka::Expiry;
use moka::future::Cache;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::rounding::round_dp;

use super::code::Currency;
use super::error::CurrencyError;
use super::matrix::RateMatrix;
use super::provider::RateProvider;

/// Default time-to-live for live rates (1 hour).
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Decimal places of a converted amount.
const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Where a snapshot's rates came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    /// Fetched from the provider.
    Live,
    /// The fixed fallback matrix, after a failed fetch.
    Fallback,
}

/// A complete set of rates and the time it was populated.
#[derive(Debug, Clone)]
pub struct RateSnapshot {
    /// Rates for every supported pair.
    pub matrix: RateMatrix,
    /// When the snapshot was populated.
    pub fetched_at: DateTime<Utc>,
    /// Live or fallback.
    pub source: RateSource,
}

impl RateSnapshot {
    fn new(matrix: RateMatrix, source: RateSource) -> Self {
        Self {
            matrix,
            fetched_at: Utc::now(),
            source,
        }
    }
}

/// Result of a currency conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyConversion {
    /// Converted amount.
    pub result: f64,
    /// Rate applied (1 for identical currencies).
    pub rate: f64,
    /// Population time of the snapshot used; `None` when no lookup was needed.
    pub last_updated: Option<DateTime<Utc>>,
}

/// Gives live and fallback snapshots their own lifetimes.
struct SnapshotExpiry {
    live_ttl: Duration,
    fallback_ttl: Duration,
}

impl Expiry<(), Arc<RateSnapshot>> for SnapshotExpiry {
    fn expire_after_create(
        &self,
        _key: &(),
        value: &Arc<RateSnapshot>,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(match value.source {
            RateSource::Live => self.live_ttl,
            RateSource::Fallback => self.fallback_ttl,
        })
    }
}

/// Cache for the exchange rate matrix.
///
/// Cheap to clone; clones share the same snapshot and provider.
#[derive(Clone)]
pub struct RateCache {
    provider: Arc<dyn RateProvider>,
    cache: Cache<(), Arc<RateSnapshot>>,
}

impl RateCache {
    /// Creates a cache with the default 1 hour TTL for live and fallback rates.
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self::with_ttl(provider, DEFAULT_TTL, DEFAULT_TTL)
    }

    /// Creates a cache with custom lifetimes.
    ///
    /// # Arguments
    ///
    /// * `provider` - Source of live rates
    /// * `live_ttl` - How long fetched rates are served
    /// * `fallback_ttl` - How long fallback rates are served before retrying the provider
    pub fn with_ttl(
        provider: Arc<dyn RateProvider>,
        live_ttl: Duration,
        fallback_ttl: Duration,
    ) -> Self {
        let cache = Cache::builder()
            .expire_after(SnapshotExpiry {
                live_ttl,
                fallback_ttl,
            })
            .build();

        Self { provider, cache }
    }

    /// Returns the current snapshot, refreshing first if it is missing or stale.
    ///
    /// Never fails: a failed refresh yields the fallback matrix.
    pub async fn rates(&self) -> Arc<RateSnapshot> {
        self.cache.get_with((), self.refresh()).await
    }

    /// Converts `value` between two currency codes.
    ///
    /// Identical codes return `value` untouched with rate 1, without
    /// validating the code or touching the cache. Otherwise the amount is
    /// rounded to 2 decimal places.
    ///
    /// # Errors
    ///
    /// - [`CurrencyError::MissingParameter`] if a code is empty or `value` is not finite.
    /// - [`CurrencyError::InvalidConversion`] if a code is not a supported currency.
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        value: f64,
    ) -> Result<CurrencyConversion, CurrencyError> {
        if from.is_empty() || to.is_empty() || !value.is_finite() {
            return Err(CurrencyError::MissingParameter);
        }

        if from == to {
            return Ok(CurrencyConversion {
                result: value,
                rate: 1.0,
                last_updated: None,
            });
        }

        let (Ok(from), Ok(to)) = (from.parse::<Currency>(), to.parse::<Currency>()) else {
            return Err(CurrencyError::InvalidConversion {
                from: from.to_string(),
                to: to.to_string(),
            });
        };

        let snapshot = self.rates().await;
        let rate = snapshot.matrix.rate(from, to);

        debug!(%from, %to, rate, source = ?snapshot.source, "Converted currency");

        Ok(CurrencyConversion {
            result: round_dp(value * rate, AMOUNT_DECIMAL_PLACES),
            rate,
            last_updated: Some(snapshot.fetched_at),
        })
    }

    /// Drops the current snapshot so the next call refreshes.
    pub async fn invalidate(&self) {
        self.cache.invalidate(&()).await;
    }

    /// Fetches live rates, substituting the fallback matrix on any failure.
    async fn refresh(&self) -> Arc<RateSnapshot> {
        let fetched = self
            .provider
            .latest_usd_rates()
            .await
            .and_then(|rates| RateMatrix::from_usd_rates(&rates));

        let snapshot = match fetched {
            Ok(matrix) => {
                info!("Exchange rates refreshed");
                RateSnapshot::new(matrix, RateSource::Live)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch exchange rates, using fallback rates");
                RateSnapshot::new(RateMatrix::fallback(), RateSource::Fallback)
            }
        };

        Arc::new(snapshot)
    }
}
