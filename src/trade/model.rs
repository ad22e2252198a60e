//! Trade offer models

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};

/// "profile_posted gives one card_offered for one card_wanted"
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone, PartialEq, Eq)]
pub struct TradeOffer {
    pub id: i64,
    pub profile_posted: i64,
    pub card_offered: i64,
    pub card_wanted: i64,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for proposing a trade
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TradeOfferInput {
    pub profile_posted: i64,
    pub card_offered: i64,
    pub card_wanted: i64,
}

/// What happened to a proposal
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "outcome", content = "offer", rename_all = "lowercase")]
pub enum ProposalOutcome {
    /// No mirror existed; the proposal now waits as a new offer
    Posted(TradeOffer),
    /// A mirror existed and both sides swapped; this is the consumed offer
    Settled(TradeOffer),
}

impl ProposalOutcome {
    pub fn offer(&self) -> &TradeOffer {
        match self {
            ProposalOutcome::Posted(offer) | ProposalOutcome::Settled(offer) => offer,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, ProposalOutcome::Settled(_))
    }
}

/// Query parameters for listing offers
#[derive(Debug, Default, Deserialize)]
pub struct TradeOfferQuery {
    pub card_offered: Option<i64>,
    pub card_wanted: Option<i64>,
    pub profile_id: Option<i64>,
}
