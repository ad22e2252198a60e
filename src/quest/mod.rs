//! Quest tracking
//!
//! Progress itself is driven by the collection ledger on every card gain.

mod model;
mod progress;
mod service;

pub use model::*;
pub use progress::QuestProgress;
pub use service::QuestService;
