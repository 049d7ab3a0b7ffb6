use axum::{Router, routing::get};
use crate::{AppState, controllers::stocks_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/symbols", get(stocks_controller::get_symbols))
        .route("/price/:symbol", get(stocks_controller::get_price))
}
