//! Card collector backend library
//!
//! Collection ledger, trade settlement, quests and pack opening behind an
//! axum JSON API. Storage is pluggable through [`store::Database`].

pub mod card;
pub mod collection;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pack;
pub mod profile;
pub mod quest;
pub mod rarity;
pub mod routes;
pub mod state;
pub mod store;
pub mod trade;
