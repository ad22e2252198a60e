//! Storage ports
//!
//! Services never talk to a connection directly. They ask a [`Database`] for a
//! [`UnitOfWork`], which is one relational transaction exposing the narrow
//! per-entity repositories below. Nothing a unit of work does is visible to
//! anyone else until [`UnitOfWork::commit`]; dropping it rolls back.

use async_trait::async_trait;

use crate::card::{Card, CardInput};
use crate::collection::OwnershipRecord;
use crate::error::{CollectionError, CollectionResult};
use crate::profile::{Profile, ProfileInput};
use crate::quest::{Quest, QuestInput};
use crate::rarity::{Rarity, RarityInput};
use crate::trade::{TradeOffer, TradeOfferInput};

pub mod memory;
pub mod postgres;

pub use memory::MemoryDatabase;
pub use postgres::PgDatabase;

#[async_trait]
pub trait RarityRepository: Send {
    async fn insert_rarity(&mut self, input: &RarityInput) -> CollectionResult<Rarity>;
    async fn find_rarity(&mut self, id: i64) -> CollectionResult<Option<Rarity>>;
    async fn list_rarities(&mut self) -> CollectionResult<Vec<Rarity>>;
    async fn update_rarity(
        &mut self,
        id: i64,
        input: &RarityInput,
    ) -> CollectionResult<Option<Rarity>>;
    async fn delete_rarity(&mut self, id: i64) -> CollectionResult<bool>;
}

#[async_trait]
pub trait CardRepository: Send {
    async fn insert_card(&mut self, input: &CardInput) -> CollectionResult<Card>;
    async fn find_card(&mut self, id: i64) -> CollectionResult<Option<Card>>;
    /// Ordered by name, then id
    async fn list_cards(&mut self) -> CollectionResult<Vec<Card>>;
    async fn list_cards_by_rarity(&mut self, rarity_id: i64) -> CollectionResult<Vec<Card>>;
    async fn update_card(&mut self, id: i64, input: &CardInput)
        -> CollectionResult<Option<Card>>;
    async fn delete_card(&mut self, id: i64) -> CollectionResult<bool>;
}

#[async_trait]
pub trait ProfileRepository: Send {
    async fn insert_profile(&mut self, input: &ProfileInput) -> CollectionResult<Profile>;
    async fn find_profile(&mut self, id: i64) -> CollectionResult<Option<Profile>>;
    async fn list_profiles(&mut self) -> CollectionResult<Vec<Profile>>;
    async fn update_profile(
        &mut self,
        id: i64,
        input: &ProfileInput,
    ) -> CollectionResult<Option<Profile>>;
    async fn delete_profile(&mut self, id: i64) -> CollectionResult<bool>;
}

/// Ownership rows. All listings are ordered by id.
#[async_trait]
pub trait OwnershipRepository: Send {
    async fn insert_ownership(
        &mut self,
        profile_id: i64,
        card_id: i64,
    ) -> CollectionResult<OwnershipRecord>;
    async fn find_ownership(&mut self, id: i64) -> CollectionResult<Option<OwnershipRecord>>;
    async fn list_ownership(&mut self) -> CollectionResult<Vec<OwnershipRecord>>;
    async fn list_ownership_by_profile(
        &mut self,
        profile_id: i64,
    ) -> CollectionResult<Vec<OwnershipRecord>>;
    async fn list_ownership_by_card(&mut self, card_id: i64)
        -> CollectionResult<Vec<OwnershipRecord>>;
    async fn list_ownership_by_profile_and_card(
        &mut self,
        profile_id: i64,
        card_id: i64,
    ) -> CollectionResult<Vec<OwnershipRecord>>;
    async fn count_ownership(&mut self, profile_id: i64, card_id: i64) -> CollectionResult<i64>;
    async fn delete_ownership(&mut self, id: i64) -> CollectionResult<bool>;
    async fn delete_ownership_by_profile(&mut self, profile_id: i64) -> CollectionResult<u64>;
}

/// Trade offers. All listings are ordered by id, so the first entry is the oldest.
#[async_trait]
pub trait TradeOfferRepository: Send {
    async fn insert_offer(&mut self, input: &TradeOfferInput) -> CollectionResult<TradeOffer>;
    async fn find_offer(&mut self, id: i64) -> CollectionResult<Option<TradeOffer>>;
    async fn list_offers(&mut self) -> CollectionResult<Vec<TradeOffer>>;
    async fn list_offers_by_card_offered(
        &mut self,
        card_offered: i64,
    ) -> CollectionResult<Vec<TradeOffer>>;
    async fn list_offers_by_card_wanted(
        &mut self,
        card_wanted: i64,
    ) -> CollectionResult<Vec<TradeOffer>>;
    async fn list_offers_by_cards(
        &mut self,
        card_offered: i64,
        card_wanted: i64,
    ) -> CollectionResult<Vec<TradeOffer>>;
    async fn list_offers_by_profile(&mut self, profile_id: i64)
        -> CollectionResult<Vec<TradeOffer>>;
    async fn list_offers_by_profile_and_card_offered(
        &mut self,
        profile_id: i64,
        card_offered: i64,
    ) -> CollectionResult<Vec<TradeOffer>>;
    async fn delete_offer(&mut self, id: i64) -> CollectionResult<bool>;
    async fn delete_offers_by_profile(&mut self, profile_id: i64) -> CollectionResult<u64>;
}

/// Quests. All listings are ordered by id.
#[async_trait]
pub trait QuestRepository: Send {
    async fn insert_quest(&mut self, input: &QuestInput) -> CollectionResult<Quest>;
    async fn find_quest(&mut self, id: i64) -> CollectionResult<Option<Quest>>;
    async fn list_quests(&mut self) -> CollectionResult<Vec<Quest>>;
    async fn list_quests_by_profile(&mut self, profile_id: i64) -> CollectionResult<Vec<Quest>>;
    async fn list_quests_by_reward(&mut self, card_id: i64) -> CollectionResult<Vec<Quest>>;
    async fn list_quests_by_rarity(&mut self, rarity_id: i64) -> CollectionResult<Vec<Quest>>;
    async fn update_quest(&mut self, id: i64, input: &QuestInput)
        -> CollectionResult<Option<Quest>>;
    async fn set_quest_progress(
        &mut self,
        id: i64,
        cards_collected: i32,
    ) -> CollectionResult<Option<Quest>>;
    async fn delete_quest(&mut self, id: i64) -> CollectionResult<bool>;
    async fn delete_quests_by_profile(&mut self, profile_id: i64) -> CollectionResult<u64>;
}

/// Every repository at once; what a unit of work hands to the services
pub trait Repositories:
    RarityRepository
    + CardRepository
    + ProfileRepository
    + OwnershipRepository
    + TradeOfferRepository
    + QuestRepository
{
}

impl<T> Repositories for T where
    T: RarityRepository
        + CardRepository
        + ProfileRepository
        + OwnershipRepository
        + TradeOfferRepository
        + QuestRepository
{
}

/// One transaction over every repository
#[async_trait]
pub trait UnitOfWork: Repositories + Sized {
    async fn commit(self) -> CollectionResult<()>;
}

/// Source of units of work
#[async_trait]
pub trait Database: Clone + Send + Sync + 'static {
    type Work: UnitOfWork + 'static;

    async fn begin(&self) -> CollectionResult<Self::Work>;

    /// Cheap liveness probe for the health endpoint
    async fn ping(&self) -> CollectionResult<()>;
}

/// Load a profile or fail with NotFound
pub async fn require_profile<R: ProfileRepository>(
    repo: &mut R,
    id: i64,
) -> CollectionResult<Profile> {
    repo.find_profile(id)
        .await?
        .ok_or_else(|| CollectionError::not_found(format!("Profile {}", id)))
}

/// Load a card or fail with NotFound
pub async fn require_card<R: CardRepository>(repo: &mut R, id: i64) -> CollectionResult<Card> {
    repo.find_card(id)
        .await?
        .ok_or_else(|| CollectionError::not_found(format!("Card {}", id)))
}

/// Load a rarity or fail with NotFound
pub async fn require_rarity<R: RarityRepository>(
    repo: &mut R,
    id: i64,
) -> CollectionResult<Rarity> {
    repo.find_rarity(id)
        .await?
        .ok_or_else(|| CollectionError::not_found(format!("Rarity {}", id)))
}
