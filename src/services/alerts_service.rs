use chrono::Utc;
use futures_util::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::FindOptions;
use mongodb::Database;

use crate::models::{Alert, AlertKind};
use crate::AppState;

pub async fn create_alert(
    state: &AppState,
    symbol: &str,
    kind: AlertKind,
    threshold: f64,
    chat_id: &str,
) -> Result<Alert, String> {
    let alerts = state.db.collection::<Alert>("alerts");
    let now = Utc::now().timestamp();

    let alert = Alert {
        id: ObjectId::new(),
        symbol: symbol.to_uppercase(),
        kind,
        threshold,
        chat_id: chat_id.to_string(),
        is_active: true,
        created_at: now,
        triggered_at: None,
    };

    alerts
        .insert_one(&alert, None)
        .await
        .map_err(|e| e.to_string())?;

    Ok(alert)
}

pub async fn list_alerts(
    state: &AppState,
    chat_id: Option<&str>,
    active_only: bool,
) -> Result<Vec<Alert>, String> {
    let alerts = state.db.collection::<Alert>("alerts");

    let mut filter = Document::new();
    if let Some(chat_id) = chat_id {
        filter.insert("chat_id", chat_id);
    }
    if active_only {
        filter.insert("is_active", true);
    }

    let find_opts = FindOptions::builder()
        .sort(doc! { "created_at": -1 })
        .build();

    let mut cursor = alerts
        .find(filter, find_opts)
        .await
        .map_err(|e| e.to_string())?;

    let mut items: Vec<Alert> = Vec::new();
    while let Some(res) = cursor.next().await {
        items.push(res.map_err(|e| e.to_string())?);
    }

    Ok(items)
}

/// Returns true if an alert was actually deleted.
pub async fn delete_alert(state: &AppState, alert_id: ObjectId) -> Result<bool, String> {
    let alerts = state.db.collection::<Alert>("alerts");

    let res = alerts
        .delete_one(doc! { "_id": alert_id }, None)
        .await
        .map_err(|e| e.to_string())?;

    Ok(res.deleted_count > 0)
}

/// Mongo-backed store the monitor reads snapshots from and commits trigger
/// transitions to.
#[derive(Clone)]
pub struct MongoAlertStore {
    db: Database,
}

impl MongoAlertStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list_active(&self) -> Result<Vec<Alert>, String> {
        let alerts = self.db.collection::<Alert>("alerts");

        let mut cursor = alerts
            .find(doc! { "is_active": true }, None)
            .await
            .map_err(|e| e.to_string())?;

        let mut items: Vec<Alert> = Vec::new();
        while let Some(res) = cursor.next().await {
            items.push(res.map_err(|e| e.to_string())?);
        }

        Ok(items)
    }

    /// Returns true if this call performed the transition. The filter on
    /// `is_active` makes the commit idempotent: a concurrently deleted or
    /// already-fired alert matches nothing and yields false.
    pub async fn mark_triggered(&self, id: ObjectId, at: i64) -> Result<bool, String> {
        let alerts = self.db.collection::<Alert>("alerts");

        let res = alerts
            .update_one(
                doc! { "_id": id, "is_active": true },
                doc! { "$set": { "is_active": false, "triggered_at": at } },
                None,
            )
            .await
            .map_err(|e| e.to_string())?;

        Ok(res.matched_count > 0)
    }
}
