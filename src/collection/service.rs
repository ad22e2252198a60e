//! Collection service - unit-of-work boundary around the ledger

use crate::collection::{ledger, Acquisition, CardHoldings, GrantRequest, OwnershipRecord};
use crate::error::CollectionResult;
use crate::store::{require_card, require_profile, Database, OwnershipRepository, UnitOfWork};

/// Service for granting, removing and listing owned cards
#[derive(Clone)]
pub struct CollectionService<D> {
    db: D,
}

impl<D: Database> CollectionService<D> {
    pub fn new(db: D) -> Self {
        Self { db }
    }

    /// Grant one copy of a card, cascading into quest progress
    pub async fn grant(&self, request: GrantRequest) -> CollectionResult<Acquisition> {
        let mut work = self.db.begin().await?;

        require_profile(&mut work, request.profile_id).await?;
        require_card(&mut work, request.card_id).await?;

        let acquisition =
            ledger::add_ownership(&mut work, request.profile_id, request.card_id).await?;
        work.commit().await?;

        tracing::info!(
            record_id = acquisition.record.id,
            profile_id = request.profile_id,
            card_id = request.card_id,
            rewards = acquisition.rewards.len(),
            "Card granted"
        );

        Ok(acquisition)
    }

    /// Grant one copy and return only the new record
    pub async fn add_ownership(
        &self,
        profile_id: i64,
        card_id: i64,
    ) -> CollectionResult<OwnershipRecord> {
        let acquisition = self.grant(GrantRequest { profile_id, card_id }).await?;
        Ok(acquisition.record)
    }

    /// Remove one owned copy. False when the record does not exist.
    pub async fn remove_ownership(&self, record_id: i64) -> CollectionResult<bool> {
        let mut work = self.db.begin().await?;
        let removed = ledger::remove_ownership(&mut work, record_id).await?;
        if removed {
            work.commit().await?;
            tracing::info!(record_id, "Ownership record removed");
        }
        Ok(removed)
    }

    pub async fn get_by_id(&self, record_id: i64) -> CollectionResult<Option<OwnershipRecord>> {
        let mut work = self.db.begin().await?;
        work.find_ownership(record_id).await
    }

    pub async fn list_all(&self) -> CollectionResult<Vec<OwnershipRecord>> {
        let mut work = self.db.begin().await?;
        work.list_ownership().await
    }

    pub async fn list_by_profile(
        &self,
        profile_id: i64,
    ) -> CollectionResult<Vec<OwnershipRecord>> {
        let mut work = self.db.begin().await?;
        work.list_ownership_by_profile(profile_id).await
    }

    pub async fn list_by_card(&self, card_id: i64) -> CollectionResult<Vec<OwnershipRecord>> {
        let mut work = self.db.begin().await?;
        work.list_ownership_by_card(card_id).await
    }

    pub async fn list_by_profile_and_card(
        &self,
        profile_id: i64,
        card_id: i64,
    ) -> CollectionResult<Vec<OwnershipRecord>> {
        let mut work = self.db.begin().await?;
        work.list_ownership_by_profile_and_card(profile_id, card_id)
            .await
    }

    pub async fn count_by_profile_and_card(
        &self,
        profile_id: i64,
        card_id: i64,
    ) -> CollectionResult<i64> {
        let mut work = self.db.begin().await?;
        work.count_ownership(profile_id, card_id).await
    }

    /// Copies of one card held by one profile; NotFound for unknown ids
    pub async fn holdings(&self, profile_id: i64, card_id: i64) -> CollectionResult<CardHoldings> {
        let mut work = self.db.begin().await?;

        require_profile(&mut work, profile_id).await?;
        require_card(&mut work, card_id).await?;

        let records = work
            .list_ownership_by_profile_and_card(profile_id, card_id)
            .await?;

        Ok(CardHoldings {
            profile_id,
            card_id,
            count: records.len() as i64,
            records,
        })
    }
}
