use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;

const TEST_MESSAGE: &str =
    "✅ Telegram connection successful! Your BIST notifications will arrive in this chat.";

#[derive(Deserialize)]
pub struct TestMessageRequest {
    pub chat_id: String,
}

// POST /api/test-telegram
pub async fn post_test_telegram(
    State(state): State<AppState>,
    Json(req): Json<TestMessageRequest>,
) -> Response {
    let Some(telegram) = state.telegram.as_ref() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Telegram is not configured" })),
        )
            .into_response();
    };

    let chat_id = req.chat_id.trim();
    if chat_id.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "chat_id is required" })),
        )
            .into_response();
    }

    match telegram.send_message(chat_id, TEST_MESSAGE).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Test message sent" })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": format!("telegram error: {e}") })),
        )
            .into_response(),
    }
}
