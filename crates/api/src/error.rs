//! Error responses.
//!
//! Every failure is rendered as `{"error": "<message>"}`. Client messages are
//! fixed per operation; details of server errors are only logged.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use convertly_core::units::Category;
use convertly_shared::AppError;
use serde_json::json;
use tracing::{debug, error};

/// Message for absent, empty or non-numeric parameters.
pub const MISSING_PARAMETERS: &str = "Faltan parámetros requeridos";

/// Operation a request was performing, used to pick the client message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Time conversion.
    Time,
    /// Weight conversion.
    Weight,
    /// Temperature conversion.
    Temperature,
    /// Currency conversion.
    Currency,
    /// Rate listing.
    Rates,
}

impl Operation {
    /// Message for an unknown unit or currency pair.
    #[must_use]
    pub const fn invalid_message(self) -> &'static str {
        match self {
            Self::Currency | Self::Rates => "Conversión de moneda no válida",
            Self::Time | Self::Weight | Self::Temperature => "Conversión no válida",
        }
    }

    /// Generic message for server-side failures.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Time => "Error en la conversión de tiempo",
            Self::Weight => "Error en la conversión de peso",
            Self::Temperature => "Error en la conversión de temperatura",
            Self::Currency => "Error en la conversión de moneda",
            Self::Rates => "Error obteniendo tasas de cambio",
        }
    }
}

impl From<Category> for Operation {
    fn from(category: Category) -> Self {
        match category {
            Category::Time => Self::Time,
            Category::Weight => Self::Weight,
            Category::Temperature => Self::Temperature,
        }
    }
}

/// An [`AppError`] raised while handling a given operation.
#[derive(Debug)]
pub struct ApiError {
    operation: Operation,
    error: AppError,
}

impl ApiError {
    /// Wraps an error raised by `operation`.
    pub fn new(operation: Operation, error: impl Into<AppError>) -> Self {
        Self {
            operation,
            error: error.into(),
        }
    }

    /// The underlying error.
    #[must_use]
    pub fn error(&self) -> &AppError {
        &self.error
    }

    /// Message sent to the client.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self.error {
            AppError::MissingParameter => MISSING_PARAMETERS,
            AppError::InvalidConversion(_) => self.operation.invalid_message(),
            AppError::UpstreamUnavailable(_) | AppError::Internal(_) => {
                self.operation.failure_message()
            }
        }
    }

    /// HTTP status of the response.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.error.is_client_error() {
            debug!(operation = ?self.operation, error = %self.error, "Rejected conversion request");
        } else {
            error!(operation = ?self.operation, error = %self.error, "Conversion request failed");
        }

        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Operation::Time, AppError::MissingParameter, 400, "Faltan parámetros requeridos")]
    #[case(Operation::Currency, AppError::MissingParameter, 400, "Faltan parámetros requeridos")]
    #[case(Operation::Weight, AppError::InvalidConversion(String::new()), 400, "Conversión no válida")]
    #[case(
        Operation::Currency,
        AppError::InvalidConversion(String::new()),
        400,
        "Conversión de moneda no válida"
    )]
    #[case(Operation::Time, AppError::Internal(String::new()), 500, "Error en la conversión de tiempo")]
    #[case(Operation::Weight, AppError::Internal(String::new()), 500, "Error en la conversión de peso")]
    #[case(
        Operation::Temperature,
        AppError::Internal(String::new()),
        500,
        "Error en la conversión de temperatura"
    )]
    #[case(Operation::Currency, AppError::Internal(String::new()), 500, "Error en la conversión de moneda")]
    #[case(Operation::Rates, AppError::Internal(String::new()), 500, "Error obteniendo tasas de cambio")]
    fn test_status_and_message(
        #[case] operation: Operation,
        #[case] error: AppError,
        #[case] status: u16,
        #[case] message: &str,
    ) {
        let api_error = ApiError::new(operation, error);
        assert_eq!(api_error.status().as_u16(), status);
        assert_eq!(api_error.message(), message);
    }

    #[test]
    fn test_internal_detail_is_not_sent() {
        let api_error = ApiError::new(
            Operation::Time,
            AppError::Internal("result is not finite".into()),
        );
        assert!(!api_error.message().contains("finite"));
        assert_eq!(api_error.error().error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_operation_from_category() {
        assert_eq!(Operation::from(Category::Time), Operation::Time);
        assert_eq!(Operation::from(Category::Weight), Operation::Weight);
        assert_eq!(
            Operation::from(Category::Temperature),
            Operation::Temperature
        );
    }
}
