use axum::{routing::get, Router};

use crate::handlers::card::*;
use crate::state::AppState;
use crate::store::Database;

pub fn card_routes<D: Database>() -> Router<AppState<D>> {
    Router::new()
        .route("/api/cards", get(list_cards::<D>).post(create_card::<D>))
        .route("/api/cards/random", get(random_card::<D>))
        .route(
            "/api/cards/:id",
            get(get_card::<D>)
                .put(update_card::<D>)
                .delete(delete_card::<D>),
        )
}
