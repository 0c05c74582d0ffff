//! Time, weight and temperature conversion routes.

use axum::{Json, Router, routing::post};
use convertly_core::units::{self, Category};
use convertly_shared::AppError;
use serde::Serialize;

use crate::{
    AppState,
    error::{ApiError, Operation},
    extractors::ConversionInput,
};

/// Creates the unit conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/time", post(convert_time))
        .route("/weight", post(convert_weight))
        .route("/temperature", post(convert_temperature))
}

/// Response for a unit conversion.
#[derive(Debug, Serialize)]
pub struct UnitConversionResponse {
    /// Converted value.
    pub result: f64,
}

/// POST `/time` - Converts between seconds, minutes, hours, days, months and years.
async fn convert_time(input: ConversionInput) -> Result<Json<UnitConversionResponse>, ApiError> {
    convert(Category::Time, &input)
}

/// POST `/weight` - Converts between grams, kilograms and pounds.
async fn convert_weight(input: ConversionInput) -> Result<Json<UnitConversionResponse>, ApiError> {
    convert(Category::Weight, &input)
}

/// POST `/temperature` - Converts between celsius, fahrenheit and kelvin.
async fn convert_temperature(
    input: ConversionInput,
) -> Result<Json<UnitConversionResponse>, ApiError> {
    convert(Category::Temperature, &input)
}

fn convert(
    category: Category,
    input: &ConversionInput,
) -> Result<Json<UnitConversionResponse>, ApiError> {
    let result = units::convert(category, &input.from, &input.to, input.value)
        .map_err(|e| ApiError::new(category.into(), e))?;

    // Large inputs can overflow; JSON has no representation for infinity.
    if !result.is_finite() {
        return Err(ApiError::new(
            Operation::from(category),
            AppError::Internal(format!(
                "{category} conversion of {} from {} to {} is not finite",
                input.value, input.from, input.to
            )),
        ));
    }

    Ok(Json(UnitConversionResponse { result }))
}
