use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::collection::OwnershipRecord;

/// Request body for opening a pack
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PackRequest {
    pub amount: i64,
    #[serde(default)]
    pub rarity_id: Option<i64>,
}

/// Cards drawn in draw order, plus any quest rewards the grants triggered
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct OpenedPack {
    pub profile_id: i64,
    pub cards: Vec<Card>,
    pub rewards: Vec<OwnershipRecord>,
}
