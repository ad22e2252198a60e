//! Trade offer primitives used by settlement and the ledger's cleanup.
//! Nothing here validates ownership; callers do.

use crate::error::CollectionResult;
use crate::store::TradeOfferRepository;
use crate::trade::{TradeOffer, TradeOfferInput};

pub async fn create_offer<R: TradeOfferRepository>(
    repo: &mut R,
    input: &TradeOfferInput,
) -> CollectionResult<TradeOffer> {
    let offer = repo.insert_offer(input).await?;

    tracing::debug!(
        offer_id = offer.id,
        profile_id = offer.profile_posted,
        card_offered = offer.card_offered,
        card_wanted = offer.card_wanted,
        "Trade offer stored"
    );

    Ok(offer)
}

/// Oldest offer giving `card_offered` for `card_wanted`
pub async fn get_by_offer<R: TradeOfferRepository>(
    repo: &mut R,
    card_offered: i64,
    card_wanted: i64,
) -> CollectionResult<Option<TradeOffer>> {
    let offers = repo.list_offers_by_cards(card_offered, card_wanted).await?;
    Ok(offers.into_iter().next())
}

/// Delete every offer `profile_id` posted giving away `card_id`.
/// One flag per matched offer.
pub async fn delete_all_by_profile_and_card_offered<R: TradeOfferRepository>(
    repo: &mut R,
    profile_id: i64,
    card_id: i64,
) -> CollectionResult<Vec<bool>> {
    let offers = repo
        .list_offers_by_profile_and_card_offered(profile_id, card_id)
        .await?;

    let mut deleted = Vec::with_capacity(offers.len());
    for offer in offers {
        deleted.push(repo.delete_offer(offer.id).await?);
    }

    Ok(deleted)
}
