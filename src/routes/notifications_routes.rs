use axum::{Router, routing::post};
use crate::{AppState, controllers::notifications_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route(
        "/test-telegram",
        post(notifications_controller::post_test_telegram),
    )
}
