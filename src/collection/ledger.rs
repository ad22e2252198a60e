//! Collection ledger
//!
//! Every ownership change goes through here so that quest progress and trade
//! offer validity follow the inventory. The functions run on a caller-owned
//! unit of work; committing is the caller's job.

use std::collections::VecDeque;

use serde::Serialize;

use crate::collection::OwnershipRecord;
use crate::error::{CollectionError, CollectionResult};
use crate::quest::QuestProgress;
use crate::store::{
    require_card, CardRepository, OwnershipRepository, QuestRepository, TradeOfferRepository,
};
use crate::trade::offers;

/// Result of one ownership gain, including quest rewards it cascaded into
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Acquisition {
    pub record: OwnershipRecord,
    /// Reward copies granted by quests the gain completed, in grant order
    pub rewards: Vec<OwnershipRecord>,
}

/// Give `profile_id` one copy of `card_id` and advance the profile's quests.
///
/// Completed quests are deleted and their rewards are queued as further gains,
/// which advance the remaining quests in turn. Each queued reward consumes a
/// quest, so the loop ends after at most one pass per quest.
pub async fn add_ownership<R>(
    repo: &mut R,
    profile_id: i64,
    card_id: i64,
) -> CollectionResult<Acquisition>
where
    R: CardRepository + OwnershipRepository + QuestRepository,
{
    let mut pending = VecDeque::new();

    let record = acquire(repo, profile_id, card_id, &mut pending).await?;

    let mut rewards = Vec::new();
    while let Some(reward) = pending.pop_front() {
        rewards.push(acquire(repo, profile_id, reward, &mut pending).await?);
    }

    Ok(Acquisition { record, rewards })
}

async fn acquire<R>(
    repo: &mut R,
    profile_id: i64,
    card_id: i64,
    pending: &mut VecDeque<i64>,
) -> CollectionResult<OwnershipRecord>
where
    R: CardRepository + OwnershipRepository + QuestRepository,
{
    let card = require_card(repo, card_id).await?;
    let record = repo.insert_ownership(profile_id, card.id).await?;

    tracing::debug!(
        record_id = record.id,
        profile_id,
        card_id = card.id,
        "Ownership record created"
    );

    for quest in repo.list_quests_by_profile(profile_id).await? {
        match quest.progress_on(&card) {
            QuestProgress::Unaffected => {}
            QuestProgress::Advanced { cards_collected } => {
                repo.set_quest_progress(quest.id, cards_collected).await?;
            }
            QuestProgress::Completed { reward } => {
                repo.delete_quest(quest.id).await?;
                tracing::info!(
                    quest_id = quest.id,
                    profile_id,
                    reward,
                    "Quest completed, granting reward"
                );
                pending.push_back(reward);
            }
        }
    }

    Ok(record)
}

/// Delete one ownership record.
///
/// Returns false when the record does not exist. When the owner has no copy of
/// the card left, every offer in which they give that card away is withdrawn.
pub async fn remove_ownership<R>(repo: &mut R, record_id: i64) -> CollectionResult<bool>
where
    R: OwnershipRepository + TradeOfferRepository,
{
    let Some(record) = repo.find_ownership(record_id).await? else {
        return Ok(false);
    };

    if !repo.delete_ownership(record.id).await? {
        return Ok(false);
    }

    tracing::debug!(
        record_id = record.id,
        profile_id = record.profile_id,
        card_id = record.card_id,
        "Ownership record removed"
    );

    let remaining = repo
        .count_ownership(record.profile_id, record.card_id)
        .await?;

    if remaining == 0 {
        let withdrawn =
            offers::delete_all_by_profile_and_card_offered(repo, record.profile_id, record.card_id)
                .await?;
        if !withdrawn.is_empty() {
            tracing::info!(
                profile_id = record.profile_id,
                card_id = record.card_id,
                count = withdrawn.len(),
                "Last copy gone, withdrew trade offers"
            );
        }
    }

    Ok(true)
}

/// Oldest ownership record backing a (profile, card) pair.
///
/// Used where the caller has already established that a copy must exist, so a
/// miss is reported as an invariant violation rather than NotFound.
pub async fn first_copy<R>(
    repo: &mut R,
    profile_id: i64,
    card_id: i64,
) -> CollectionResult<OwnershipRecord>
where
    R: OwnershipRepository,
{
    repo.list_ownership_by_profile_and_card(profile_id, card_id)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| {
            tracing::error!(profile_id, card_id, "Expected ownership record is missing");
            CollectionError::InvariantViolation(format!(
                "profile {} owns no copy of card {}",
                profile_id, card_id
            ))
        })
}
