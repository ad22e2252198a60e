//! Collection domain: who owns which copies of which card

pub mod ledger;
mod model;
mod service;

pub use ledger::Acquisition;
pub use model::*;
pub use service::CollectionService;
