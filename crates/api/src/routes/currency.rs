//! Currency conversion and exchange rate routes.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use convertly_core::currency::{RateMatrix, RateSource};
use convertly_shared::AppError;
use serde::Serialize;

use crate::{
    AppState,
    error::{ApiError, Operation},
    extractors::ConversionInput,
};

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currency", post(convert_currency))
        .route("/currency/rates", get(get_rates))
}

/// Response for a currency conversion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyConversionResponse {
    /// Converted amount, rounded to 2 decimal places.
    pub result: f64,
    /// Rate applied.
    pub rate: f64,
    /// Millisecond timestamp of the rates used; absent for identical currencies.
    #[serde(
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Response for the current exchange rates.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesResponse {
    /// `base -> target -> rate` for every supported pair.
    pub rates: RateMatrix,
    /// Millisecond timestamp of when the rates were populated.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_updated: DateTime<Utc>,
    /// Whether the rates are live or the fallback table.
    pub source: RateSource,
}

/// POST `/currency` - Converts between USD, EUR, MXN and CHF.
async fn convert_currency(
    State(state): State<AppState>,
    input: ConversionInput,
) -> Result<Json<CurrencyConversionResponse>, ApiError> {
    let conversion = state
        .rates
        .convert(&input.from, &input.to, input.value)
        .await
        .map_err(|e| ApiError::new(Operation::Currency, e))?;

    if !conversion.result.is_finite() {
        return Err(ApiError::new(
            Operation::Currency,
            AppError::Internal(format!(
                "currency conversion of {} from {} to {} is not finite",
                input.value, input.from, input.to
            )),
        ));
    }

    Ok(Json(CurrencyConversionResponse {
        result: conversion.result,
        rate: conversion.rate,
        last_updated: conversion.last_updated,
    }))
}

/// GET `/currency/rates` - Returns the current exchange rates.
async fn get_rates(State(state): State<AppState>) -> Json<RatesResponse> {
    let snapshot = state.rates.rates().await;

    Json(RatesResponse {
        rates: snapshot.matrix.clone(),
        last_updated: snapshot.fetched_at,
        source: snapshot.source,
    })
}
