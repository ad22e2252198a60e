//! Trade engine: offers, mirror matching and settlement

pub mod matching;
mod model;
pub mod offers;
mod service;
pub mod settlement;

pub use model::*;
pub use service::TradeService;
