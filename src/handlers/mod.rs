//! API handlers
//!
//! Thin adapters: extract, call one service method, wrap the result in
//! [`ApiResponse`](crate::models::ApiResponse). Missing entities become 404 here.

pub mod card;
pub mod collection;
pub mod health;
pub mod pack;
pub mod profile;
pub mod quest;
pub mod rarity;
pub mod trade;

use crate::error::ApiError;

pub(crate) fn not_found(what: &str, id: i64) -> ApiError {
    ApiError::NotFound(format!("{} {}", what, id))
}
