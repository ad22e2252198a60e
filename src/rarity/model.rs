//! Rarity tiers

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A rarity tier; every card references exactly one
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone, PartialEq, Eq)]
pub struct Rarity {
    pub id: i64,
    pub name: String,
}

/// Request DTO for creating or renaming a rarity
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct RarityInput {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}
