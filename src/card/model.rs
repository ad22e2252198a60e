//! Card catalog models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Card in the catalog
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: i64,
    pub name: String,
    pub rarity_id: i64,
}

/// Request DTO for creating or editing a card
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CardInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub rarity_id: i64,
}

/// Query parameters for catalog listings and random draws
#[derive(Debug, Default, Deserialize)]
pub struct CardQuery {
    pub rarity_id: Option<i64>,
}
