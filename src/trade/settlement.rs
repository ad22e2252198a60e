//! Trade settlement
//!
//! A proposal either waits as a new offer or, when an opposite offer already
//! exists, settles immediately: both sides give up one copy and receive the
//! other's card. Every step runs on one unit of work, so a failure part way
//! through leaves nothing behind once the caller drops it.

use crate::collection::ledger;
use crate::error::{CollectionError, CollectionResult};
use crate::store::{
    require_card, require_profile, OwnershipRepository, Repositories, TradeOfferRepository,
};
use crate::trade::{matching, offers, ProposalOutcome, TradeOffer, TradeOfferInput};

/// Validate a proposal, then settle it against the oldest mirror or post it
pub async fn propose_offer<R: Repositories>(
    repo: &mut R,
    proposal: &TradeOfferInput,
) -> CollectionResult<ProposalOutcome> {
    validate_proposal(repo, proposal).await?;

    match find_mirror(repo, proposal).await? {
        Some(existing) => settle(repo, existing, proposal)
            .await
            .map(ProposalOutcome::Settled),
        None => offers::create_offer(repo, proposal)
            .await
            .map(ProposalOutcome::Posted),
    }
}

async fn validate_proposal<R: Repositories>(
    repo: &mut R,
    proposal: &TradeOfferInput,
) -> CollectionResult<()> {
    if proposal.card_offered == proposal.card_wanted {
        return Err(CollectionError::invalid(
            "card_offered and card_wanted must differ",
        ));
    }

    require_profile(repo, proposal.profile_posted).await?;
    require_card(repo, proposal.card_offered).await?;
    require_card(repo, proposal.card_wanted).await?;

    let owned = repo
        .count_ownership(proposal.profile_posted, proposal.card_offered)
        .await?;
    if owned == 0 {
        return Err(CollectionError::invalid(format!(
            "profile {} does not own card {}",
            proposal.profile_posted, proposal.card_offered
        )));
    }

    Ok(())
}

async fn find_mirror<R: Repositories>(
    repo: &mut R,
    proposal: &TradeOfferInput,
) -> CollectionResult<Option<TradeOffer>> {
    let candidates = repo
        .list_offers_by_cards(proposal.card_wanted, proposal.card_offered)
        .await?;

    Ok(matching::pick_mirror(&candidates, proposal).cloned())
}

async fn settle<R: Repositories>(
    repo: &mut R,
    existing: TradeOffer,
    proposal: &TradeOfferInput,
) -> CollectionResult<TradeOffer> {
    // Locate both copies before touching anything
    let original_copy =
        ledger::first_copy(repo, existing.profile_posted, existing.card_offered).await?;
    let new_copy = ledger::first_copy(repo, proposal.profile_posted, proposal.card_offered).await?;

    if !repo.delete_offer(existing.id).await? {
        return Err(CollectionError::InvariantViolation(format!(
            "trade offer {} vanished during settlement",
            existing.id
        )));
    }

    for record_id in [original_copy.id, new_copy.id] {
        if !ledger::remove_ownership(repo, record_id).await? {
            return Err(CollectionError::InvariantViolation(format!(
                "ownership record {} vanished during settlement",
                record_id
            )));
        }
    }

    ledger::add_ownership(repo, proposal.profile_posted, existing.card_offered).await?;
    ledger::add_ownership(repo, existing.profile_posted, proposal.card_offered).await?;

    tracing::info!(
        offer_id = existing.id,
        original_poster = existing.profile_posted,
        new_poster = proposal.profile_posted,
        card_offered = proposal.card_offered,
        card_received = existing.card_offered,
        "Trade settled"
    );

    Ok(existing)
}
