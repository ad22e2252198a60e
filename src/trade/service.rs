//! Trade service

use crate::error::CollectionResult;
use crate::store::{Database, TradeOfferRepository, UnitOfWork};
use crate::trade::{offers, settlement, ProposalOutcome, TradeOffer, TradeOfferInput, TradeOfferQuery};

/// Service for proposing, cancelling and browsing trade offers
#[derive(Clone)]
pub struct TradeService<D> {
    db: D,
}

impl<D: Database> TradeService<D> {
    pub fn new(db: D) -> Self {
        Self { db }
    }

    /// Post an offer, or settle it right away against a waiting mirror offer
    pub async fn propose(&self, proposal: TradeOfferInput) -> CollectionResult<ProposalOutcome> {
        let mut work = self.db.begin().await?;
        let outcome = settlement::propose_offer(&mut work, &proposal).await?;
        work.commit().await?;

        match &outcome {
            ProposalOutcome::Posted(offer) => tracing::info!(
                offer_id = offer.id,
                profile_id = offer.profile_posted,
                "Trade offer posted"
            ),
            ProposalOutcome::Settled(offer) => tracing::info!(
                offer_id = offer.id,
                profile_id = proposal.profile_posted,
                counterparty = offer.profile_posted,
                "Trade proposal settled"
            ),
        }

        Ok(outcome)
    }

    /// Withdraw an offer. False when it does not exist.
    pub async fn cancel(&self, offer_id: i64) -> CollectionResult<bool> {
        let mut work = self.db.begin().await?;
        let deleted = work.delete_offer(offer_id).await?;
        if deleted {
            work.commit().await?;
            tracing::info!(offer_id, "Trade offer cancelled");
        }
        Ok(deleted)
    }

    pub async fn get_by_id(&self, offer_id: i64) -> CollectionResult<Option<TradeOffer>> {
        let mut work = self.db.begin().await?;
        work.find_offer(offer_id).await
    }

    /// Listing filtered by whichever query fields are set
    pub async fn list(&self, query: &TradeOfferQuery) -> CollectionResult<Vec<TradeOffer>> {
        let mut work = self.db.begin().await?;

        let offers = match (query.profile_id, query.card_offered, query.card_wanted) {
            (Some(profile_id), Some(card_offered), _) => {
                work.list_offers_by_profile_and_card_offered(profile_id, card_offered)
                    .await?
            }
            (Some(profile_id), None, _) => work.list_offers_by_profile(profile_id).await?,
            (None, Some(card_offered), Some(card_wanted)) => {
                work.list_offers_by_cards(card_offered, card_wanted).await?
            }
            (None, Some(card_offered), None) => {
                work.list_offers_by_card_offered(card_offered).await?
            }
            (None, None, Some(card_wanted)) => work.list_offers_by_card_wanted(card_wanted).await?,
            (None, None, None) => work.list_offers().await?,
        };

        // Remaining filters that the chosen lookup did not apply
        Ok(offers
            .into_iter()
            .filter(|offer| query.card_wanted.map_or(true, |c| offer.card_wanted == c))
            .collect())
    }

    /// Oldest offer giving `card_offered` for `card_wanted`
    pub async fn get_by_offer(
        &self,
        card_offered: i64,
        card_wanted: i64,
    ) -> CollectionResult<Option<TradeOffer>> {
        let mut work = self.db.begin().await?;
        offers::get_by_offer(&mut work, card_offered, card_wanted).await
    }

    pub async fn get_all_by_card_offered(&self, card_id: i64) -> CollectionResult<Vec<TradeOffer>> {
        let mut work = self.db.begin().await?;
        work.list_offers_by_card_offered(card_id).await
    }

    pub async fn get_all_by_card_wanted(&self, card_id: i64) -> CollectionResult<Vec<TradeOffer>> {
        let mut work = self.db.begin().await?;
        work.list_offers_by_card_wanted(card_id).await
    }

    pub async fn get_all_by_profile_and_card_offered(
        &self,
        profile_id: i64,
        card_id: i64,
    ) -> CollectionResult<Vec<TradeOffer>> {
        let mut work = self.db.begin().await?;
        work.list_offers_by_profile_and_card_offered(profile_id, card_id)
            .await
    }

    pub async fn delete_all_by_profile_and_card_offered(
        &self,
        profile_id: i64,
        card_id: i64,
    ) -> CollectionResult<Vec<bool>> {
        let mut work = self.db.begin().await?;
        let deleted =
            offers::delete_all_by_profile_and_card_offered(&mut work, profile_id, card_id).await?;
        work.commit().await?;
        Ok(deleted)
    }
}
