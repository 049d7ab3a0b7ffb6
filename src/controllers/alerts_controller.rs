use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use serde_json::json;

use crate::{
    models::{Alert, AlertKind},
    services::alerts_service,
    AppState,
};

fn error_json(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn alert_json(a: &Alert) -> serde_json::Value {
    json!({
        "id": a.id.to_hex(),
        "symbol": a.symbol,
        "alert_type": a.kind,
        "value": a.threshold,
        "chat_id": a.chat_id,
        "is_active": a.is_active,
        "created_at": a.created_at,
        "triggered_at": a.triggered_at,
    })
}

#[derive(Deserialize)]
pub struct CreateAlertRequest {
    pub symbol: String,

    // "price_above" | "price_below" | "percent_up" | "percent_down"
    pub alert_type: AlertKind,

    pub value: f64,
    pub chat_id: String,
}

// POST /api/alerts
pub async fn post_create_alert(
    State(state): State<AppState>,
    Json(req): Json<CreateAlertRequest>,
) -> Response {
    let symbol = req.symbol.trim().to_string();
    if symbol.is_empty() {
        return error_json(StatusCode::BAD_REQUEST, "symbol is required");
    }

    let chat_id = req.chat_id.trim().to_string();
    if chat_id.is_empty() {
        return error_json(StatusCode::BAD_REQUEST, "chat_id is required");
    }

    if !req.value.is_finite() {
        return error_json(StatusCode::BAD_REQUEST, "value must be a finite number");
    }

    if req.alert_type.is_price_kind() && req.value <= 0.0 {
        return error_json(StatusCode::BAD_REQUEST, "value must be a positive price");
    }

    let alert =
        match alerts_service::create_alert(&state, &symbol, req.alert_type, req.value, &chat_id)
            .await
        {
            Ok(a) => a,
            Err(e) => {
                return error_json(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &format!("db error: {e}"),
                );
            }
        };

    let mut body = alert_json(&alert);
    if !req.alert_type.is_price_kind() && req.value <= 0.0 {
        // With no previous close the change percent reads as 0, which a
        // non-positive percent threshold already satisfies.
        body["warning"] = json!(
            "a percent alert with a non-positive threshold can fire on a day with no previous close"
        );
    }

    (StatusCode::OK, Json(body)).into_response()
}

#[derive(Deserialize)]
pub struct ListAlertsQuery {
    pub chat_id: Option<String>,
    pub active_only: Option<bool>,
}

// GET /api/alerts
pub async fn get_alerts(
    State(state): State<AppState>,
    Query(query): Query<ListAlertsQuery>,
) -> Response {
    let active_only = query.active_only.unwrap_or(true);

    let alerts =
        match alerts_service::list_alerts(&state, query.chat_id.as_deref(), active_only).await {
            Ok(items) => items,
            Err(e) => {
                return error_json(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &format!("db error: {e}"),
                );
            }
        };

    let items: Vec<serde_json::Value> = alerts.iter().map(alert_json).collect();

    (StatusCode::OK, Json(items)).into_response()
}

// DELETE /api/alerts/:id
pub async fn delete_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let oid = match ObjectId::parse_str(&id) {
        Ok(x) => x,
        Err(_) => return error_json(StatusCode::BAD_REQUEST, "bad id"),
    };

    match alerts_service::delete_alert(&state, oid).await {
        Ok(true) => (StatusCode::OK, Json(json!({ "message": "Alert deleted" }))).into_response(),
        Ok(false) => error_json(StatusCode::NOT_FOUND, "Alert not found"),
        Err(e) => error_json(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("db error: {e}"),
        ),
    }
}
