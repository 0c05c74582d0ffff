//! End-to-end tests of the conversion API through the router.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
};
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;

use convertly_api::{AppState, create_router, middleware::handle_panic};
use convertly_core::currency::{RateCache, RateProvider, RateProviderError};

/// Provider stub that counts calls and either answers or fails.
struct StubProvider {
    calls: AtomicUsize,
    rates: Option<HashMap<String, f64>>,
}

impl StubProvider {
    fn live() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            rates: Some(HashMap::from([
                ("USD".to_string(), 1.0),
                ("EUR".to_string(), 0.9),
                ("MXN".to_string(), 18.0),
                ("CHF".to_string(), 0.8),
            ])),
        })
    }

    fn down() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            rates: None,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateProvider for StubProvider {
    async fn latest_usd_rates(&self) -> Result<HashMap<String, f64>, RateProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.rates
            .clone()
            .ok_or_else(|| RateProviderError::Request("connection refused".to_string()))
    }
}

fn app(provider: Arc<StubProvider>) -> Router {
    create_router(AppState::new(RateCache::new(provider)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn post(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

fn number(json: &Value, field: &str) -> f64 {
    json[field]
        .as_f64()
        .unwrap_or_else(|| panic!("{field} is not a number in {json}"))
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// =========================================================================
// Root and health
// =========================================================================

#[tokio::test]
async fn test_root_message() {
    let (status, json) = get_json(app(StubProvider::live()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "message": "API de Conversión de Unidades funcionando correctamente" })
    );
}

#[tokio::test]
async fn test_health() {
    let (status, json) = get_json(app(StubProvider::live()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, json) = get_json(app(StubProvider::live()), "/api/conversion/length").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "error": "Ruta no encontrada" }));
}

// =========================================================================
// Unit conversions
// =========================================================================

#[rstest]
#[case("/api/conversion/time", json!({"value": 3600, "from": "segundos", "to": "horas"}), 1.0)]
#[case("/api/conversion/weight", json!({"value": 1, "from": "kilogramos", "to": "libras"}), 2.20462)]
#[case("/api/conversion/temperature", json!({"value": 0, "from": "celsius", "to": "fahrenheit"}), 32.0)]
#[case("/api/conversion/temperature", json!({"value": 100, "from": "celsius", "to": "kelvin"}), 373.15)]
#[case("/api/conversion/time", json!({"value": "2", "from": "dias", "to": "horas"}), 48.0)]
#[case("/api/conversion/weight", json!({"value": "1500", "from": "gramos", "to": "kilogramos"}), 1.5)]
#[tokio::test]
async fn test_unit_conversions(#[case] uri: &str, #[case] body: Value, #[case] expected: f64) {
    let (status, json) = post(app(StubProvider::live()), uri, &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_close(number(&json, "result"), expected);
    assert_eq!(json.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_value() {
    let (status, json) = post(
        app(StubProvider::live()),
        "/api/conversion/time",
        &json!({"from": "segundos", "to": "horas"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "error": "Faltan parámetros requeridos" }));
}

#[rstest]
#[case(json!({"value": 1, "to": "horas"}))]
#[case(json!({"value": 1, "from": "segundos"}))]
#[case(json!({"value": 1, "from": "", "to": "horas"}))]
#[case(json!({"value": "abc", "from": "segundos", "to": "horas"}))]
#[case(json!({"value": null, "from": "segundos", "to": "horas"}))]
#[tokio::test]
async fn test_missing_or_invalid_parameters(#[case] body: Value) {
    let (status, json) = post(app(StubProvider::live()), "/api/conversion/time", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Faltan parámetros requeridos");
}

#[tokio::test]
async fn test_malformed_body_is_missing_parameters() {
    let (status, json) = send(
        app(StubProvider::live()),
        Request::builder()
            .method("POST")
            .uri("/api/conversion/weight")
            .header("Content-Type", "application/json")
            .body(Body::from("{ not json"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Faltan parámetros requeridos");
}

#[rstest]
#[case("/api/conversion/time", "segundos", "libras")]
#[case("/api/conversion/weight", "kilogramos", "onzas")]
#[case("/api/conversion/temperature", "Celsius", "kelvin")]
#[tokio::test]
async fn test_invalid_unit_pair(#[case] uri: &str, #[case] from: &str, #[case] to: &str) {
    let (status, json) = post(
        app(StubProvider::live()),
        uri,
        &json!({"value": 1, "from": from, "to": to}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "error": "Conversión no válida" }));
}

#[tokio::test]
async fn test_identity_returns_value_for_unknown_unit() {
    let (status, json) = post(
        app(StubProvider::live()),
        "/api/conversion/weight",
        &json!({"value": 1.234_567_890_123, "from": "onzas", "to": "onzas"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(number(&json, "result"), 1.234_567_890_123);
}

#[tokio::test]
async fn test_overflowing_result_is_server_error() {
    let (status, json) = post(
        app(StubProvider::live()),
        "/api/conversion/time",
        &json!({"value": 1e308, "from": "años", "to": "segundos"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "Error en la conversión de tiempo" }));
}

// =========================================================================
// Currency
// =========================================================================

#[tokio::test]
async fn test_currency_with_fallback() {
    let provider = StubProvider::down();
    let (status, json) = post(
        app(provider.clone()),
        "/api/conversion/currency",
        &json!({"value": 10, "from": "USD", "to": "EUR"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(number(&json, "result"), 8.5);
    assert_close(number(&json, "rate"), 0.85);
    assert!(json["lastUpdated"].as_i64().unwrap() > 0);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_currency_with_live_rates() {
    let (status, json) = post(
        app(StubProvider::live()),
        "/api/conversion/currency",
        &json!({"value": "100", "from": "EUR", "to": "MXN"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(number(&json, "rate"), 20.0);
    assert_close(number(&json, "result"), 2000.0);
}

#[tokio::test]
async fn test_currency_identity() {
    let provider = StubProvider::live();
    let (status, json) = post(
        app(provider.clone()),
        "/api/conversion/currency",
        &json!({"value": 10.123, "from": "CHF", "to": "CHF"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(number(&json, "result"), 10.123);
    assert_close(number(&json, "rate"), 1.0);
    assert!(json.get("lastUpdated").is_none());
    assert_eq!(provider.calls(), 0);
}

#[rstest]
#[case("USD", "GBP")]
#[case("usd", "EUR")]
#[case("JPY", "MXN")]
#[tokio::test]
async fn test_invalid_currency(#[case] from: &str, #[case] to: &str) {
    let (status, json) = post(
        app(StubProvider::live()),
        "/api/conversion/currency",
        &json!({"value": 1, "from": from, "to": to}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "error": "Conversión de moneda no válida" }));
}

#[tokio::test]
async fn test_currency_missing_value() {
    let (status, json) = post(
        app(StubProvider::live()),
        "/api/conversion/currency",
        &json!({"from": "USD", "to": "EUR"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Faltan parámetros requeridos");
}

#[tokio::test]
async fn test_rates() {
    let (status, json) = get_json(app(StubProvider::live()), "/api/conversion/currency/rates").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], "live");
    assert!(json["lastUpdated"].as_i64().unwrap() > 0);

    let rates = json["rates"].as_object().unwrap();
    assert_eq!(rates.len(), 4);
    assert_close(json["rates"]["USD"]["EUR"].as_f64().unwrap(), 0.9);
    assert_close(json["rates"]["CHF"]["USD"].as_f64().unwrap(), 1.25);
    assert!(json["rates"]["MXN"].get("MXN").is_none());
}

#[tokio::test]
async fn test_rates_with_fallback() {
    let (status, json) = get_json(app(StubProvider::down()), "/api/conversion/currency/rates").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], "fallback");
    assert_close(json["rates"]["MXN"]["USD"].as_f64().unwrap(), 0.057);
}

#[tokio::test]
async fn test_rates_are_cached_across_requests() {
    let provider = StubProvider::live();
    let app = app(provider.clone());

    let (_, first) = get_json(app.clone(), "/api/conversion/currency/rates").await;
    let (_, conversion) = post(
        app.clone(),
        "/api/conversion/currency",
        &json!({"value": 1, "from": "USD", "to": "CHF"}),
    )
    .await;
    let (_, second) = get_json(app, "/api/conversion/currency/rates").await;

    assert_eq!(provider.calls(), 1);
    assert_eq!(first["lastUpdated"], second["lastUpdated"]);
    assert_eq!(first["lastUpdated"], conversion["lastUpdated"]);
}

// =========================================================================
// Unhandled errors
// =========================================================================

#[tokio::test]
async fn test_panic_becomes_server_error() {
    async fn explode() -> &'static str {
        panic!("handler exploded")
    }

    let app = Router::new()
        .route("/explode", get(explode))
        .layer(CatchPanicLayer::custom(handle_panic));

    let (status, json) = get_json(app, "/explode").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "Algo salió mal!" }));
}
