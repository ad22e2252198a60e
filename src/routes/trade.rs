use axum::{routing::get, Router};

use crate::handlers::trade::*;
use crate::state::AppState;
use crate::store::Database;

pub fn trade_routes<D: Database>() -> Router<AppState<D>> {
    Router::new()
        .route(
            "/api/trade-offers",
            get(list_trade_offers::<D>).post(propose_trade::<D>),
        )
        .route(
            "/api/trade-offers/:id",
            get(get_trade_offer::<D>).delete(cancel_trade_offer::<D>),
        )
}
