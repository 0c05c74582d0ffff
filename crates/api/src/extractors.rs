//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::MISSING_PARAMETERS;

/// Raw `{value, from, to}` body before validation.
#[derive(Debug, Deserialize)]
struct ConversionBody {
    value: Option<Value>,
    from: Option<String>,
    to: Option<String>,
}

/// A validated conversion request body.
///
/// `value` may be sent as a JSON number or a numeric string. The body is
/// rejected with 400 `Faltan parámetros requeridos` when it is not JSON,
/// a field is absent or empty, or `value` is not a finite number.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionInput {
    /// Amount to convert.
    pub value: f64,
    /// Source unit or currency code.
    pub from: String,
    /// Target unit or currency code.
    pub to: String,
}

/// Parses a JSON number or numeric string into a finite `f64`.
#[must_use]
pub fn parse_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

impl ConversionInput {
    /// Validates a raw body; `None` if any field is missing.
    fn from_body(body: ConversionBody) -> Option<Self> {
        Some(Self {
            value: body.value.as_ref().and_then(parse_value)?,
            from: body.from.filter(|s| !s.is_empty())?,
            to: body.to.filter(|s| !s.is_empty())?,
        })
    }
}

impl<S> FromRequest<S> for ConversionInput
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let missing = || {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": MISSING_PARAMETERS })),
            )
        };

        let Json(body) = Json::<ConversionBody>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(error = %rejection, "Unreadable conversion body");
                missing()
            })?;

        Self::from_body(body).ok_or_else(missing)
    }
}
