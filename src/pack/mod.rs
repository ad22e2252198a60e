//! Pack opening: uniform draws granted through the collection ledger

pub mod draw;
mod model;
mod service;

pub use model::*;
pub use service::PackService;
