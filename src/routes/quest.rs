use axum::{routing::get, Router};

use crate::handlers::quest::*;
use crate::state::AppState;
use crate::store::Database;

pub fn quest_routes<D: Database>() -> Router<AppState<D>> {
    Router::new()
        .route("/api/quests", get(list_quests::<D>).post(create_quest::<D>))
        .route(
            "/api/quests/:id",
            get(get_quest::<D>)
                .put(update_quest::<D>)
                .delete(delete_quest::<D>),
        )
}
