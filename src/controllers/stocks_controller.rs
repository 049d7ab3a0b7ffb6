use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;

use crate::{models::BIST_SYMBOLS, services::finnhub::QuoteError, AppState};

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// GET /api/symbols
pub async fn get_symbols() -> Response {
    (StatusCode::OK, Json(BIST_SYMBOLS.to_vec())).into_response()
}

// GET /api/price/:symbol
pub async fn get_price(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Response {
    match state.finnhub.sample(&symbol).await {
        Ok(sample) => {
            let body = json!({
                "symbol": sample.symbol,
                "price": round2(sample.current_price),
                "change_percent": round2(sample.change_percent()),
                "timestamp": Utc::now().to_rfc3339(),
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(QuoteError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Symbol not found" })),
        )
            .into_response(),
        Err(QuoteError::Transient(e)) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": format!("quote provider error: {e}") })),
        )
            .into_response(),
    }
}
