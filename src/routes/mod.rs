//! Route definitions for the card collector API

mod card;
mod collection;
mod profile;
mod quest;
mod rarity;
mod trade;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::handlers::health::{health_check, root};
use crate::middleware;
use crate::state::AppState;
use crate::store::Database;

pub use card::card_routes;
pub use collection::collection_routes;
pub use profile::profile_routes;
pub use quest::quest_routes;
pub use rarity::rarity_routes;
pub use trade::trade_routes;

/// Full application router with tracing and the given CORS policy
pub fn build_router<D: Database>(state: AppState<D>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check::<D>))
        .merge(rarity_routes())
        .merge(card_routes())
        .merge(profile_routes())
        .merge(collection_routes())
        .merge(trade_routes())
        .merge(quest_routes())
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .layer(cors)
}
