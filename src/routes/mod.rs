use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::{AppState, handlers};

pub mod alerts_routes;
pub mod notifications_routes;
pub mod stocks_routes;

pub fn api_router() -> Router<AppState> {
    let router = Router::<AppState>::new().route("/", get(handlers::root));

    let router = alerts_routes::add_routes(router);
    let router = stocks_routes::add_routes(router);
    let router = notifications_routes::add_routes(router);

    router
}

pub fn app(state: AppState) -> Router {
    // The frontend is served separately; mirror its permissive CORS setup.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_router())
        // The nested `/` route only matches `/api`; also serve the banner at
        // `/api/` (trailing slash) as specified.
        .route("/api/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/health/db", get(handlers::health_db))
        .layer(cors)
        .with_state(state)
}
