//! Profile store

use validator::Validate;

use crate::error::CollectionResult;
use crate::profile::{Profile, ProfileInput};
use crate::store::{
    Database, OwnershipRepository, ProfileRepository, QuestRepository, TradeOfferRepository,
    UnitOfWork,
};

#[derive(Clone)]
pub struct ProfileService<D> {
    db: D,
}

impl<D: Database> ProfileService<D> {
    pub fn new(db: D) -> Self {
        Self { db }
    }

    pub async fn add(&self, input: ProfileInput) -> CollectionResult<Profile> {
        input.validate()?;

        let mut work = self.db.begin().await?;
        let profile = work.insert_profile(&input).await?;
        work.commit().await?;

        tracing::info!(profile_id = profile.id, name = %profile.name, "Profile created");
        Ok(profile)
    }

    pub async fn get_by_id(&self, id: i64) -> CollectionResult<Option<Profile>> {
        let mut work = self.db.begin().await?;
        work.find_profile(id).await
    }

    pub async fn get_all(&self) -> CollectionResult<Vec<Profile>> {
        let mut work = self.db.begin().await?;
        work.list_profiles().await
    }

    pub async fn update(&self, id: i64, input: ProfileInput) -> CollectionResult<Option<Profile>> {
        input.validate()?;

        let mut work = self.db.begin().await?;
        let updated = work.update_profile(id, &input).await?;
        if updated.is_some() {
            work.commit().await?;
        }
        Ok(updated)
    }

    /// Delete a profile with its collection, quests and posted offers
    pub async fn delete(&self, id: i64) -> CollectionResult<bool> {
        let mut work = self.db.begin().await?;

        if work.find_profile(id).await?.is_none() {
            return Ok(false);
        }

        let offers = work.delete_offers_by_profile(id).await?;
        let quests = work.delete_quests_by_profile(id).await?;
        let copies = work.delete_ownership_by_profile(id).await?;
        let deleted = work.delete_profile(id).await?;
        work.commit().await?;

        tracing::info!(profile_id = id, copies, quests, offers, "Profile deleted");
        Ok(deleted)
    }
}
