//! In-process storage
//!
//! Tables live behind one async mutex. A unit of work holds the lock for its
//! whole lifetime and mutates a private copy, so units of work are fully
//! serialised and a dropped one leaves the tables untouched.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::card::{Card, CardInput};
use crate::collection::OwnershipRecord;
use crate::error::CollectionResult;
use crate::profile::{Profile, ProfileInput};
use crate::quest::{Quest, QuestInput};
use crate::rarity::{Rarity, RarityInput};
use crate::store::{
    CardRepository, Database, OwnershipRepository, ProfileRepository, QuestRepository,
    RarityRepository, TradeOfferRepository, UnitOfWork,
};
use crate::trade::{TradeOffer, TradeOfferInput};

#[derive(Debug, Clone, Default)]
struct Tables {
    /// Shared sequence; ids are never reused
    last_id: i64,
    rarities: BTreeMap<i64, Rarity>,
    cards: BTreeMap<i64, Card>,
    profiles: BTreeMap<i64, Profile>,
    ownership: BTreeMap<i64, OwnershipRecord>,
    offers: BTreeMap<i64, TradeOffer>,
    quests: BTreeMap<i64, Quest>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

fn select<T: Clone>(table: &BTreeMap<i64, T>, pred: impl Fn(&T) -> bool) -> Vec<T> {
    table.values().filter(|row| pred(row)).cloned().collect()
}

fn purge<T>(table: &mut BTreeMap<i64, T>, pred: impl Fn(&T) -> bool) -> u64 {
    let before = table.len();
    table.retain(|_, row| !pred(row));
    (before - table.len()) as u64
}

/// Shared in-memory database
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Database for MemoryDatabase {
    type Work = MemoryUnitOfWork;

    async fn begin(&self) -> CollectionResult<MemoryUnitOfWork> {
        let guard = self.tables.clone().lock_owned().await;
        let working = guard.clone();
        Ok(MemoryUnitOfWork { guard, working })
    }

    async fn ping(&self) -> CollectionResult<()> {
        Ok(())
    }
}

/// Exclusive working copy of the tables
pub struct MemoryUnitOfWork {
    guard: OwnedMutexGuard<Tables>,
    working: Tables,
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn commit(self) -> CollectionResult<()> {
        let MemoryUnitOfWork { mut guard, working } = self;
        *guard = working;
        Ok(())
    }
}

#[async_trait]
impl RarityRepository for MemoryUnitOfWork {
    async fn insert_rarity(&mut self, input: &RarityInput) -> CollectionResult<Rarity> {
        let rarity = Rarity {
            id: self.working.next_id(),
            name: input.name.clone(),
        };
        self.working.rarities.insert(rarity.id, rarity.clone());
        Ok(rarity)
    }

    async fn find_rarity(&mut self, id: i64) -> CollectionResult<Option<Rarity>> {
        Ok(self.working.rarities.get(&id).cloned())
    }

    async fn list_rarities(&mut self) -> CollectionResult<Vec<Rarity>> {
        Ok(select(&self.working.rarities, |_| true))
    }

    async fn update_rarity(
        &mut self,
        id: i64,
        input: &RarityInput,
    ) -> CollectionResult<Option<Rarity>> {
        Ok(self.working.rarities.get_mut(&id).map(|rarity| {
            rarity.name = input.name.clone();
            rarity.clone()
        }))
    }

    async fn delete_rarity(&mut self, id: i64) -> CollectionResult<bool> {
        Ok(self.working.rarities.remove(&id).is_some())
    }
}

#[async_trait]
impl CardRepository for MemoryUnitOfWork {
    async fn insert_card(&mut self, input: &CardInput) -> CollectionResult<Card> {
        let card = Card {
            id: self.working.next_id(),
            name: input.name.clone(),
            rarity_id: input.rarity_id,
        };
        self.working.cards.insert(card.id, card.clone());
        Ok(card)
    }

    async fn find_card(&mut self, id: i64) -> CollectionResult<Option<Card>> {
        Ok(self.working.cards.get(&id).cloned())
    }

    async fn list_cards(&mut self) -> CollectionResult<Vec<Card>> {
        let mut cards = select(&self.working.cards, |_| true);
        cards.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(cards)
    }

    async fn list_cards_by_rarity(&mut self, rarity_id: i64) -> CollectionResult<Vec<Card>> {
        let mut cards = select(&self.working.cards, |card| card.rarity_id == rarity_id);
        cards.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(cards)
    }

    async fn update_card(
        &mut self,
        id: i64,
        input: &CardInput,
    ) -> CollectionResult<Option<Card>> {
        Ok(self.working.cards.get_mut(&id).map(|card| {
            card.name = input.name.clone();
            card.rarity_id = input.rarity_id;
            card.clone()
        }))
    }

    async fn delete_card(&mut self, id: i64) -> CollectionResult<bool> {
        Ok(self.working.cards.remove(&id).is_some())
    }
}

#[async_trait]
impl ProfileRepository for MemoryUnitOfWork {
    async fn insert_profile(&mut self, input: &ProfileInput) -> CollectionResult<Profile> {
        let profile = Profile {
            id: self.working.next_id(),
            name: input.name.clone(),
        };
        self.working.profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn find_profile(&mut self, id: i64) -> CollectionResult<Option<Profile>> {
        Ok(self.working.profiles.get(&id).cloned())
    }

    async fn list_profiles(&mut self) -> CollectionResult<Vec<Profile>> {
        Ok(select(&self.working.profiles, |_| true))
    }

    async fn update_profile(
        &mut self,
        id: i64,
        input: &ProfileInput,
    ) -> CollectionResult<Option<Profile>> {
        Ok(self.working.profiles.get_mut(&id).map(|profile| {
            profile.name = input.name.clone();
            profile.clone()
        }))
    }

    async fn delete_profile(&mut self, id: i64) -> CollectionResult<bool> {
        Ok(self.working.profiles.remove(&id).is_some())
    }
}

#[async_trait]
impl OwnershipRepository for MemoryUnitOfWork {
    async fn insert_ownership(
        &mut self,
        profile_id: i64,
        card_id: i64,
    ) -> CollectionResult<OwnershipRecord> {
        let record = OwnershipRecord {
            id: self.working.next_id(),
            profile_id,
            card_id,
            acquired_at: Utc::now(),
        };
        self.working.ownership.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_ownership(&mut self, id: i64) -> CollectionResult<Option<OwnershipRecord>> {
        Ok(self.working.ownership.get(&id).cloned())
    }

    async fn list_ownership(&mut self) -> CollectionResult<Vec<OwnershipRecord>> {
        Ok(select(&self.working.ownership, |_| true))
    }

    async fn list_ownership_by_profile(
        &mut self,
        profile_id: i64,
    ) -> CollectionResult<Vec<OwnershipRecord>> {
        Ok(select(&self.working.ownership, |r| r.profile_id == profile_id))
    }

    async fn list_ownership_by_card(
        &mut self,
        card_id: i64,
    ) -> CollectionResult<Vec<OwnershipRecord>> {
        Ok(select(&self.working.ownership, |r| r.card_id == card_id))
    }

    async fn list_ownership_by_profile_and_card(
        &mut self,
        profile_id: i64,
        card_id: i64,
    ) -> CollectionResult<Vec<OwnershipRecord>> {
        Ok(select(&self.working.ownership, |r| {
            r.profile_id == profile_id && r.card_id == card_id
        }))
    }

    async fn count_ownership(&mut self, profile_id: i64, card_id: i64) -> CollectionResult<i64> {
        let count = self
            .working
            .ownership
            .values()
            .filter(|r| r.profile_id == profile_id && r.card_id == card_id)
            .count();
        Ok(count as i64)
    }

    async fn delete_ownership(&mut self, id: i64) -> CollectionResult<bool> {
        Ok(self.working.ownership.remove(&id).is_some())
    }

    async fn delete_ownership_by_profile(&mut self, profile_id: i64) -> CollectionResult<u64> {
        Ok(purge(&mut self.working.ownership, |r| r.profile_id == profile_id))
    }
}

#[async_trait]
impl TradeOfferRepository for MemoryUnitOfWork {
    async fn insert_offer(&mut self, input: &TradeOfferInput) -> CollectionResult<TradeOffer> {
        let offer = TradeOffer {
            id: self.working.next_id(),
            profile_posted: input.profile_posted,
            card_offered: input.card_offered,
            card_wanted: input.card_wanted,
            created_at: Utc::now(),
        };
        self.working.offers.insert(offer.id, offer.clone());
        Ok(offer)
    }

    async fn find_offer(&mut self, id: i64) -> CollectionResult<Option<TradeOffer>> {
        Ok(self.working.offers.get(&id).cloned())
    }

    async fn list_offers(&mut self) -> CollectionResult<Vec<TradeOffer>> {
        Ok(select(&self.working.offers, |_| true))
    }

    async fn list_offers_by_card_offered(
        &mut self,
        card_offered: i64,
    ) -> CollectionResult<Vec<TradeOffer>> {
        Ok(select(&self.working.offers, |o| o.card_offered == card_offered))
    }

    async fn list_offers_by_card_wanted(
        &mut self,
        card_wanted: i64,
    ) -> CollectionResult<Vec<TradeOffer>> {
        Ok(select(&self.working.offers, |o| o.card_wanted == card_wanted))
    }

    async fn list_offers_by_cards(
        &mut self,
        card_offered: i64,
        card_wanted: i64,
    ) -> CollectionResult<Vec<TradeOffer>> {
        Ok(select(&self.working.offers, |o| {
            o.card_offered == card_offered && o.card_wanted == card_wanted
        }))
    }

    async fn list_offers_by_profile(
        &mut self,
        profile_id: i64,
    ) -> CollectionResult<Vec<TradeOffer>> {
        Ok(select(&self.working.offers, |o| o.profile_posted == profile_id))
    }

    async fn list_offers_by_profile_and_card_offered(
        &mut self,
        profile_id: i64,
        card_offered: i64,
    ) -> CollectionResult<Vec<TradeOffer>> {
        Ok(select(&self.working.offers, |o| {
            o.profile_posted == profile_id && o.card_offered == card_offered
        }))
    }

    async fn delete_offer(&mut self, id: i64) -> CollectionResult<bool> {
        Ok(self.working.offers.remove(&id).is_some())
    }

    async fn delete_offers_by_profile(&mut self, profile_id: i64) -> CollectionResult<u64> {
        Ok(purge(&mut self.working.offers, |o| o.profile_posted == profile_id))
    }
}

#[async_trait]
impl QuestRepository for MemoryUnitOfWork {
    async fn insert_quest(&mut self, input: &QuestInput) -> CollectionResult<Quest> {
        let quest = Quest {
            id: self.working.next_id(),
            profile_id: input.profile_id,
            cards_collected: input.cards_collected,
            cards_needed: input.cards_needed,
            reward: input.reward,
            rarity_needed: input.rarity_needed,
        };
        self.working.quests.insert(quest.id, quest.clone());
        Ok(quest)
    }

    async fn find_quest(&mut self, id: i64) -> CollectionResult<Option<Quest>> {
        Ok(self.working.quests.get(&id).cloned())
    }

    async fn list_quests(&mut self) -> CollectionResult<Vec<Quest>> {
        Ok(select(&self.working.quests, |_| true))
    }

    async fn list_quests_by_profile(&mut self, profile_id: i64) -> CollectionResult<Vec<Quest>> {
        Ok(select(&self.working.quests, |q| q.profile_id == profile_id))
    }

    async fn list_quests_by_reward(&mut self, card_id: i64) -> CollectionResult<Vec<Quest>> {
        Ok(select(&self.working.quests, |q| q.reward == card_id))
    }

    async fn list_quests_by_rarity(&mut self, rarity_id: i64) -> CollectionResult<Vec<Quest>> {
        Ok(select(&self.working.quests, |q| q.rarity_needed == Some(rarity_id)))
    }

    async fn update_quest(
        &mut self,
        id: i64,
        input: &QuestInput,
    ) -> CollectionResult<Option<Quest>> {
        Ok(self.working.quests.get_mut(&id).map(|quest| {
            quest.profile_id = input.profile_id;
            quest.cards_collected = input.cards_collected;
            quest.cards_needed = input.cards_needed;
            quest.reward = input.reward;
            quest.rarity_needed = input.rarity_needed;
            quest.clone()
        }))
    }

    async fn set_quest_progress(
        &mut self,
        id: i64,
        cards_collected: i32,
    ) -> CollectionResult<Option<Quest>> {
        Ok(self.working.quests.get_mut(&id).map(|quest| {
            quest.cards_collected = cards_collected;
            quest.clone()
        }))
    }

    async fn delete_quest(&mut self, id: i64) -> CollectionResult<bool> {
        Ok(self.working.quests.remove(&id).is_some())
    }

    async fn delete_quests_by_profile(&mut self, profile_id: i64) -> CollectionResult<u64> {
        Ok(purge(&mut self.working.quests, |q| q.profile_id == profile_id))
    }
}
