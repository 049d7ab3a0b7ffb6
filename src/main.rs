use std::net::SocketAddr;

use mongodb::Client;
use tokio::sync::watch;

use bistwatch::services::finnhub::FinnhubClient;
use bistwatch::services::telegram::TelegramClient;
use bistwatch::{config, routes, services, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    // Mongo connection
    let client = Client::with_uri_str(&settings.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");
    let db = client.database(&settings.mongodb_db);

    if let Err(e) = services::db_init::ensure_indexes(&db).await {
        tracing::warn!(error = %e, "failed to ensure indexes");
    }

    let telegram = settings.telegram_bot_token.clone().map(TelegramClient::new);
    if telegram.is_none() {
        tracing::warn!("TELEGRAM_BOT_TOKEN not set; alert monitor will idle");
    }

    let state = AppState {
        db,
        settings: settings.clone(),
        finnhub: FinnhubClient::new(settings.finnhub_api_key.clone()),
        telegram,
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let monitor = services::alert_monitor::spawn_price_alert_monitor(&state, shutdown_rx);

    let app = routes::app(state);

    let addr = SocketAddr::from((
        settings.host.parse::<std::net::IpAddr>().unwrap(),
        settings.port,
    ));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    // HTTP server has drained; stop the monitor between cycles.
    let _ = shutdown_tx.send(true);
    let _ = monitor.await;
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
