//! Quest models

use serde::{Deserialize, Serialize};

use crate::error::{CollectionError, CollectionResult};

/// Progress toward a reward card
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone, PartialEq, Eq)]
pub struct Quest {
    pub id: i64,
    pub profile_id: i64,
    pub cards_collected: i32,
    pub cards_needed: i32,
    pub reward: i64,
    /// When set, only gains of cards with this rarity count
    pub rarity_needed: Option<i64>,
}

/// Request DTO for creating or editing a quest
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct QuestInput {
    pub profile_id: i64,
    #[serde(default)]
    pub cards_collected: i32,
    pub cards_needed: i32,
    pub reward: i64,
    #[serde(default)]
    pub rarity_needed: Option<i64>,
}

impl QuestInput {
    pub fn new(profile_id: i64, cards_needed: i32, reward: i64) -> Self {
        Self {
            profile_id,
            cards_collected: 0,
            cards_needed,
            reward,
            rarity_needed: None,
        }
    }

    /// Check counters: a stored quest must still be short of its target
    pub fn check_progress(&self) -> CollectionResult<()> {
        if self.cards_needed <= 0 {
            return Err(CollectionError::invalid(
                "cards_needed must be greater than 0",
            ));
        }
        if self.cards_collected < 0 {
            return Err(CollectionError::invalid(
                "cards_collected must not be negative",
            ));
        }
        if self.cards_collected >= self.cards_needed {
            return Err(CollectionError::invalid(
                "cards_collected must be below cards_needed",
            ));
        }
        Ok(())
    }
}

/// Query parameters for listing quests
#[derive(Debug, Default, Deserialize)]
pub struct QuestQuery {
    pub profile_id: Option<i64>,
    pub reward: Option<i64>,
}
