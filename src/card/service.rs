//! Card catalog service

use rand::seq::SliceRandom;
use validator::Validate;

use crate::card::{Card, CardInput};
use crate::collection::ledger;
use crate::error::{CollectionError, CollectionResult};
use crate::store::{
    require_rarity, CardRepository, Database, OwnershipRepository, QuestRepository,
    TradeOfferRepository, UnitOfWork,
};

#[derive(Clone)]
pub struct CardService<D> {
    db: D,
}

impl<D: Database> CardService<D> {
    pub fn new(db: D) -> Self {
        Self { db }
    }

    pub async fn add(&self, input: CardInput) -> CollectionResult<Card> {
        input.validate()?;

        let mut work = self.db.begin().await?;
        require_rarity(&mut work, input.rarity_id).await?;
        let card = work.insert_card(&input).await?;
        work.commit().await?;

        tracing::info!(card_id = card.id, rarity_id = card.rarity_id, name = %card.name, "Card created");
        Ok(card)
    }

    pub async fn get_by_id(&self, id: i64) -> CollectionResult<Option<Card>> {
        let mut work = self.db.begin().await?;
        work.find_card(id).await
    }

    /// Whole catalog, ordered by name
    pub async fn get_all(&self) -> CollectionResult<Vec<Card>> {
        let mut work = self.db.begin().await?;
        work.list_cards().await
    }

    pub async fn get_all_by_rarity(&self, rarity_id: i64) -> CollectionResult<Vec<Card>> {
        let mut work = self.db.begin().await?;
        work.list_cards_by_rarity(rarity_id).await
    }

    /// Uniform pick from the catalog, optionally restricted to one rarity
    pub async fn get_random(&self, rarity_id: Option<i64>) -> CollectionResult<Card> {
        let pool = match rarity_id {
            Some(rarity_id) => self.get_all_by_rarity(rarity_id).await?,
            None => self.get_all().await?,
        };

        pool.choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| CollectionError::not_found("Card"))
    }

    /// Replace a card's name and rarity; None when the card does not exist
    pub async fn update(&self, id: i64, input: CardInput) -> CollectionResult<Option<Card>> {
        input.validate()?;

        let mut work = self.db.begin().await?;
        require_rarity(&mut work, input.rarity_id).await?;
        let updated = work.update_card(id, &input).await?;
        if updated.is_some() {
            work.commit().await?;
            tracing::info!(card_id = id, "Card updated");
        }
        Ok(updated)
    }

    /// Remove a card together with every copy of it and every offer involving it.
    ///
    /// Rejected while a quest still promises the card as its reward.
    pub async fn delete(&self, id: i64) -> CollectionResult<bool> {
        let mut work = self.db.begin().await?;

        if work.find_card(id).await?.is_none() {
            return Ok(false);
        }

        let quests = work.list_quests_by_reward(id).await?;
        if !quests.is_empty() {
            tracing::warn!(card_id = id, quests = quests.len(), "Card is a quest reward");
            return Err(CollectionError::Conflict(format!(
                "card {} is the reward of {} quest(s)",
                id,
                quests.len()
            )));
        }

        // Copies go through the ledger so offers backed by them are withdrawn
        let copies = work.list_ownership_by_card(id).await?;
        for copy in &copies {
            ledger::remove_ownership(&mut work, copy.id).await?;
        }

        let mut offers = work.list_offers_by_card_wanted(id).await?;
        offers.extend(work.list_offers_by_card_offered(id).await?);
        for offer in &offers {
            work.delete_offer(offer.id).await?;
        }

        let deleted = work.delete_card(id).await?;
        work.commit().await?;

        tracing::info!(
            card_id = id,
            copies = copies.len(),
            offers = offers.len(),
            "Card deleted"
        );
        Ok(deleted)
    }
}
