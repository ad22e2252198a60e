use axum::{routing::get, Router};

use crate::handlers::collection::*;
use crate::state::AppState;
use crate::store::Database;

pub fn collection_routes<D: Database>() -> Router<AppState<D>> {
    Router::new()
        .route(
            "/api/collection",
            get(list_collection::<D>).post(grant_card::<D>),
        )
        .route(
            "/api/collection/:id",
            get(get_ownership::<D>).delete(remove_ownership::<D>),
        )
}
