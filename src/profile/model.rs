//! Collector profiles

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A collector
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct ProfileInput {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}
