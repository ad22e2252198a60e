//! Shared fixtures for the integration tests

#![allow(dead_code)]

use card_collector_server::card::{Card, CardInput, CardService};
use card_collector_server::collection::{CollectionService, OwnershipRecord};
use card_collector_server::pack::PackService;
use card_collector_server::profile::{Profile, ProfileInput, ProfileService};
use card_collector_server::quest::{Quest, QuestInput, QuestService};
use card_collector_server::rarity::{Rarity, RarityInput, RarityService};
use card_collector_server::store::MemoryDatabase;
use card_collector_server::trade::{TradeOffer, TradeService};

pub const MAX_PACK_SIZE: i64 = 10;

/// Every service wired onto one in-memory database
pub struct Fixture {
    pub db: MemoryDatabase,
    pub rarities: RarityService<MemoryDatabase>,
    pub cards: CardService<MemoryDatabase>,
    pub profiles: ProfileService<MemoryDatabase>,
    pub collection: CollectionService<MemoryDatabase>,
    pub trades: TradeService<MemoryDatabase>,
    pub quests: QuestService<MemoryDatabase>,
    pub packs: PackService<MemoryDatabase>,
}

impl Fixture {
    pub fn new() -> Self {
        let db = MemoryDatabase::new();
        Self {
            rarities: RarityService::new(db.clone()),
            cards: CardService::new(db.clone()),
            profiles: ProfileService::new(db.clone()),
            collection: CollectionService::new(db.clone()),
            trades: TradeService::new(db.clone()),
            quests: QuestService::new(db.clone()),
            packs: PackService::new(db.clone(), MAX_PACK_SIZE),
            db,
        }
    }

    pub async fn rarity(&self, name: &str) -> Rarity {
        self.rarities
            .add(RarityInput {
                name: name.to_string(),
            })
            .await
            .expect("Failed to create rarity")
    }

    pub async fn card(&self, name: &str, rarity: &Rarity) -> Card {
        self.cards
            .add(CardInput {
                name: name.to_string(),
                rarity_id: rarity.id,
            })
            .await
            .expect("Failed to create card")
    }

    pub async fn profile(&self, name: &str) -> Profile {
        self.profiles
            .add(ProfileInput {
                name: name.to_string(),
            })
            .await
            .expect("Failed to create profile")
    }

    pub async fn give(&self, profile: &Profile, card: &Card) -> OwnershipRecord {
        self.collection
            .add_ownership(profile.id, card.id)
            .await
            .expect("Failed to grant card")
    }

    pub async fn quest(&self, input: QuestInput) -> Quest {
        self.quests
            .add_quest(input)
            .await
            .expect("Failed to create quest")
    }

    pub async fn count(&self, profile: &Profile, card: &Card) -> i64 {
        self.collection
            .count_by_profile_and_card(profile.id, card.id)
            .await
            .expect("Failed to count copies")
    }

    pub async fn offers(&self) -> Vec<TradeOffer> {
        self.trades
            .list(&Default::default())
            .await
            .expect("Failed to list offers")
    }
}
