use axum::{routing::get, Router};

use crate::handlers::rarity::*;
use crate::state::AppState;
use crate::store::Database;

pub fn rarity_routes<D: Database>() -> Router<AppState<D>> {
    Router::new()
        .route(
            "/api/rarities",
            get(list_rarities::<D>).post(create_rarity::<D>),
        )
        .route(
            "/api/rarities/:id",
            get(get_rarity::<D>)
                .put(update_rarity::<D>)
                .delete(delete_rarity::<D>),
        )
}
