use axum::{
    http::{header, Request, StatusCode},
    routing::{delete, post},
    Router,
};
use http_body_util::BodyExt;
use mongodb::Client;
use tower::ServiceExt;

use bistwatch::{
    config,
    controllers::{alerts_controller, notifications_controller},
    routes, services, AppState,
};

async fn test_state() -> AppState {
    let mut settings = config::load();
    settings.finnhub_api_key = String::new();
    settings.telegram_bot_token = None;

    // The Mongo client connects lazily, so validation-path tests run
    // without a live server.
    let client = Client::with_uri_str(&settings.mongodb_uri)
        .await
        .expect("mongodb client");
    let db = client.database(&settings.mongodb_db);

    let finnhub = services::finnhub::FinnhubClient::new(settings.finnhub_api_key.clone());

    AppState {
        db,
        settings,
        finnhub,
        telegram: None,
    }
}

async fn response_body_string(res: axum::response::Response) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}

fn json_request(uri: &str, body: &str) -> Request<axum::body::Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn post_create_alert_rejects_unknown_kind() {
    let state = test_state().await;
    let app = Router::new()
        .route("/alerts", post(alerts_controller::post_create_alert))
        .with_state(state);

    let req = json_request(
        "/alerts",
        r#"{"symbol":"THYAO.IS","alert_type":"price_sideways","value":1.0,"chat_id":"1"}"#,
    );

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn post_create_alert_requires_symbol() {
    let state = test_state().await;
    let app = Router::new()
        .route("/alerts", post(alerts_controller::post_create_alert))
        .with_state(state);

    let req = json_request(
        "/alerts",
        r#"{"symbol":"  ","alert_type":"price_above","value":100.0,"chat_id":"1"}"#,
    );

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("symbol is required"));
}

#[tokio::test]
async fn post_create_alert_requires_chat_id() {
    let state = test_state().await;
    let app = Router::new()
        .route("/alerts", post(alerts_controller::post_create_alert))
        .with_state(state);

    let req = json_request(
        "/alerts",
        r#"{"symbol":"THYAO.IS","alert_type":"price_above","value":100.0,"chat_id":""}"#,
    );

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("chat_id is required"));
}

#[tokio::test]
async fn post_create_alert_rejects_non_positive_price_target() {
    let state = test_state().await;
    let app = Router::new()
        .route("/alerts", post(alerts_controller::post_create_alert))
        .with_state(state);

    let req = json_request(
        "/alerts",
        r#"{"symbol":"THYAO.IS","alert_type":"price_below","value":0.0,"chat_id":"1"}"#,
    );

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("positive price"));
}

#[tokio::test]
async fn delete_alert_rejects_malformed_id() {
    let state = test_state().await;
    let app = Router::new()
        .route("/alerts/:id", delete(alerts_controller::delete_alert))
        .with_state(state);

    let req = Request::builder()
        .method("DELETE")
        .uri("/alerts/not-an-object-id")
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("bad id"));
}

#[tokio::test]
async fn test_telegram_without_configuration_is_rejected() {
    let state = test_state().await;
    let app = Router::new()
        .route(
            "/test-telegram",
            post(notifications_controller::post_test_telegram),
        )
        .with_state(state);

    let req = json_request("/test-telegram", r#"{"chat_id":"123456"}"#);

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("not configured"));
}

#[tokio::test]
async fn get_symbols_lists_the_catalog() {
    let app = routes::app(test_state().await);

    let req = Request::builder()
        .method("GET")
        .uri("/api/symbols")
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_body_string(res).await;
    assert!(body.contains("XU100.IS"));
    assert!(body.contains("BIST 100"));
}

#[tokio::test]
async fn root_reports_running() {
    let app = routes::app(test_state().await);

    let req = Request::builder()
        .method("GET")
        .uri("/api/")
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_body_string(res).await;
    assert!(body.contains("running"));
}
