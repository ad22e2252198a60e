//! Ownership records and collection DTOs

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};

/// One owned copy of a card. Three copies of the same card are three rows.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone, PartialEq, Eq)]
pub struct OwnershipRecord {
    pub id: i64,
    pub profile_id: i64,
    pub card_id: i64,
    pub acquired_at: DateTime<Utc>,
}

/// Request DTO for granting a card to a profile
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct GrantRequest {
    pub profile_id: i64,
    pub card_id: i64,
}

/// Query parameters for listing ownership records
#[derive(Debug, Default, Deserialize)]
pub struct CollectionQuery {
    pub card_id: Option<i64>,
}

/// How many copies of one card a profile holds, with the backing records
#[derive(Debug, Serialize, Clone)]
pub struct CardHoldings {
    pub profile_id: i64,
    pub card_id: i64,
    pub count: i64,
    pub records: Vec<OwnershipRecord>,
}
