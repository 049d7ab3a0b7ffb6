use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;
use tokio::sync::watch;
use tokio::time;

use crate::models::{Alert, PriceSample};
use crate::services::alerts_service::MongoAlertStore;
use crate::services::evaluator;
use crate::services::finnhub::{FinnhubClient, QuoteError};
use crate::services::telegram::{NotifyError, TelegramClient};
use crate::AppState;

/// Source of the active-alert snapshot and sink for trigger commits.
pub trait AlertStore {
    fn list_active(&self) -> impl Future<Output = Result<Vec<Alert>, String>> + Send;

    /// Commit the fired transition. `Ok(false)` means the alert no longer
    /// exists or already fired (concurrent delete); callers treat that as a
    /// no-op, not a failure.
    fn mark_triggered(
        &self,
        id: ObjectId,
        at: i64,
    ) -> impl Future<Output = Result<bool, String>> + Send;
}

pub trait MarketData {
    fn sample(&self, symbol: &str) -> impl Future<Output = Result<PriceSample, QuoteError>> + Send;
}

pub trait Notifier {
    fn send(
        &self,
        chat_id: &str,
        text: &str,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

impl AlertStore for MongoAlertStore {
    async fn list_active(&self) -> Result<Vec<Alert>, String> {
        self.list_active().await
    }

    async fn mark_triggered(&self, id: ObjectId, at: i64) -> Result<bool, String> {
        self.mark_triggered(id, at).await
    }
}

impl MarketData for FinnhubClient {
    async fn sample(&self, symbol: &str) -> Result<PriceSample, QuoteError> {
        self.sample(symbol).await
    }
}

impl Notifier for TelegramClient {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), NotifyError> {
        self.send_message(chat_id, text).await
    }
}

/// Failure while handling one alert. None of these abort the cycle; the
/// alert stays active and is retried on the next snapshot.
#[derive(Debug, Error)]
enum CheckError {
    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error("store error: {0}")]
    Store(String),
}

pub struct AlertMonitor<S, M, N> {
    store: S,
    market: M,
    // None => notification channel unconfigured; cycles become idle no-ops.
    notifier: Option<N>,
    interval: Duration,
}

impl<S, M, N> AlertMonitor<S, M, N>
where
    S: AlertStore,
    M: MarketData,
    N: Notifier,
{
    pub fn new(store: S, market: M, notifier: Option<N>, interval: Duration) -> Self {
        Self {
            store,
            market,
            notifier,
            interval,
        }
    }

    /// Run cycles until `shutdown` flips to true (or its sender is dropped).
    /// Fixed delay: the next cycle starts `interval` after the previous one
    /// finished, so cycles never overlap.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        loop {
            if *shutdown.borrow() {
                break;
            }

            if let Err(e) = self.run_cycle().await {
                tracing::error!(error = %e, "alert check cycle failed");
            }

            tokio::select! {
                _ = time::sleep(self.interval) => {}
                res = shutdown.changed() => {
                    if res.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        tracing::info!("alert monitor stopped");
    }

    /// One pass over the current snapshot of active alerts. A failing alert
    /// never aborts the rest of the snapshot; only the snapshot read itself
    /// can fail this function.
    pub async fn run_cycle(&self) -> Result<(), String> {
        let Some(notifier) = self.notifier.as_ref() else {
            tracing::debug!("notification channel not configured; skipping cycle");
            return Ok(());
        };

        let alerts = self.store.list_active().await?;

        for alert in &alerts {
            if let Err(e) = self.check_alert(notifier, alert).await {
                tracing::warn!(
                    alert_id = %alert.id,
                    symbol = %alert.symbol,
                    error = %e,
                    "alert check failed; will retry next cycle"
                );
            }
        }

        Ok(())
    }

    async fn check_alert(&self, notifier: &N, alert: &Alert) -> Result<(), CheckError> {
        let sample = self.market.sample(&alert.symbol).await?;

        let Some(message) = evaluator::evaluate(alert, &sample) else {
            return Ok(());
        };

        // Notify first, commit second. A failed send leaves the alert
        // active, so it is re-evaluated (and possibly re-sent) next cycle:
        // at-least-once delivery.
        notifier.send(&alert.chat_id, &message).await?;

        let committed = self
            .store
            .mark_triggered(alert.id, Utc::now().timestamp())
            .await
            .map_err(CheckError::Store)?;

        if committed {
            tracing::info!(symbol = %alert.symbol, alert_id = %alert.id, "alert triggered");
        } else {
            // Deleted between snapshot and commit; the notification already
            // went out, nothing left to do.
            tracing::debug!(alert_id = %alert.id, "alert gone before commit");
        }

        Ok(())
    }
}

/// Wire the production collaborators and spawn the monitor task.
pub fn spawn_price_alert_monitor(
    state: &AppState,
    shutdown: watch::Receiver<bool>,
) -> tokio::task::JoinHandle<()> {
    let monitor = AlertMonitor::new(
        MongoAlertStore::new(state.db.clone()),
        state.finnhub.clone(),
        state.telegram.clone(),
        Duration::from_secs(state.settings.check_interval_secs),
    );

    tokio::spawn(monitor.run(shutdown))
}
