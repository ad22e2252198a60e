use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::pack::open_pack;
use crate::handlers::profile::*;
use crate::state::AppState;
use crate::store::Database;

pub fn profile_routes<D: Database>() -> Router<AppState<D>> {
    Router::new()
        .route(
            "/api/profiles",
            get(list_profiles::<D>).post(create_profile::<D>),
        )
        .route(
            "/api/profiles/:id",
            get(get_profile::<D>)
                .put(update_profile::<D>)
                .delete(delete_profile::<D>),
        )
        .route(
            "/api/profiles/:id/collection",
            get(get_profile_collection::<D>),
        )
        .route(
            "/api/profiles/:id/collection/:card_id",
            get(get_profile_card_holdings::<D>),
        )
        .route("/api/profiles/:id/packs", post(open_pack::<D>))
}
