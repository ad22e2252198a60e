//! Rarity store

use validator::Validate;

use crate::error::{CollectionError, CollectionResult};
use crate::rarity::{Rarity, RarityInput};
use crate::store::{CardRepository, Database, QuestRepository, RarityRepository, UnitOfWork};

#[derive(Clone)]
pub struct RarityService<D> {
    db: D,
}

impl<D: Database> RarityService<D> {
    pub fn new(db: D) -> Self {
        Self { db }
    }

    pub async fn add(&self, input: RarityInput) -> CollectionResult<Rarity> {
        input.validate()?;

        let mut work = self.db.begin().await?;
        let rarity = work.insert_rarity(&input).await?;
        work.commit().await?;

        tracing::info!(rarity_id = rarity.id, name = %rarity.name, "Rarity created");
        Ok(rarity)
    }

    pub async fn get_by_id(&self, id: i64) -> CollectionResult<Option<Rarity>> {
        let mut work = self.db.begin().await?;
        work.find_rarity(id).await
    }

    pub async fn get_all(&self) -> CollectionResult<Vec<Rarity>> {
        let mut work = self.db.begin().await?;
        work.list_rarities().await
    }

    /// Rename a rarity; None when it does not exist
    pub async fn update(&self, id: i64, input: RarityInput) -> CollectionResult<Option<Rarity>> {
        input.validate()?;

        let mut work = self.db.begin().await?;
        let updated = work.update_rarity(id, &input).await?;
        if updated.is_some() {
            work.commit().await?;
        }
        Ok(updated)
    }

    /// Delete an unused rarity. Conflict while cards or quests still refer to it.
    pub async fn delete(&self, id: i64) -> CollectionResult<bool> {
        let mut work = self.db.begin().await?;

        if work.find_rarity(id).await?.is_none() {
            return Ok(false);
        }

        let cards = work.list_cards_by_rarity(id).await?.len();
        let quests = work.list_quests_by_rarity(id).await?.len();
        if cards > 0 || quests > 0 {
            tracing::warn!(rarity_id = id, cards, quests, "Rarity still in use");
            return Err(CollectionError::Conflict(format!(
                "rarity {} is used by {} card(s) and {} quest(s)",
                id, cards, quests
            )));
        }

        let deleted = work.delete_rarity(id).await?;
        work.commit().await?;

        tracing::info!(rarity_id = id, "Rarity deleted");
        Ok(deleted)
    }
}
