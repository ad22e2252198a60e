//! PostgreSQL-backed repositories
//!
//! A [`PgUnitOfWork`] wraps one sqlx transaction; every query below runs on it.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::card::{Card, CardInput};
use crate::db;
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

/// Pool wrapper handing out transactions
#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Database for PgDatabase {
    type Work = PgUnitOfWork;

    async fn begin(&self) -> CollectionResult<PgUnitOfWork> {
        let tx = self.pool.begin().await?;
        Ok(PgUnitOfWork { tx })
    }

    async fn ping(&self) -> CollectionResult<()> {
        db::check_health(&self.pool).await?;
        Ok(())
    }
}

/// One open transaction
pub struct PgUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn commit(self) -> CollectionResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl RarityRepository for PgUnitOfWork {
    async fn insert_rarity(&mut self, input: &RarityInput) -> CollectionResult<Rarity> {
        let rarity =
            sqlx::query_as::<_, Rarity>("INSERT INTO rarity (name) VALUES ($1) RETURNING *")
                .bind(&input.name)
                .fetch_one(&mut *self.tx)
                .await?;

        Ok(rarity)
    }

    async fn find_rarity(&mut self, id: i64) -> CollectionResult<Option<Rarity>> {
        let rarity = sqlx::query_as::<_, Rarity>("SELECT * FROM rarity WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;

        Ok(rarity)
    }

    async fn list_rarities(&mut self) -> CollectionResult<Vec<Rarity>> {
        let rarities = sqlx::query_as::<_, Rarity>("SELECT * FROM rarity ORDER BY id")
            .fetch_all(&mut *self.tx)
            .await?;

        Ok(rarities)
    }

    async fn update_rarity(
        &mut self,
        id: i64,
        input: &RarityInput,
    ) -> CollectionResult<Option<Rarity>> {
        let rarity = sqlx::query_as::<_, Rarity>(
            "UPDATE rarity SET name = $1 WHERE id = $2 RETURNING *",
        )
        .bind(&input.name)
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(rarity)
    }

    async fn delete_rarity(&mut self, id: i64) -> CollectionResult<bool> {
        let result = sqlx::query("DELETE FROM rarity WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CardRepository for PgUnitOfWork {
    async fn insert_card(&mut self, input: &CardInput) -> CollectionResult<Card> {
        let card = sqlx::query_as::<_, Card>(
            "INSERT INTO card (name, rarity_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(&input.name)
        .bind(input.rarity_id)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(card)
    }

    async fn find_card(&mut self, id: i64) -> CollectionResult<Option<Card>> {
        let card = sqlx::query_as::<_, Card>("SELECT * FROM card WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;

        Ok(card)
    }

    async fn list_cards(&mut self) -> CollectionResult<Vec<Card>> {
        let cards = sqlx::query_as::<_, Card>("SELECT * FROM card ORDER BY name ASC, id ASC")
            .fetch_all(&mut *self.tx)
            .await?;

        Ok(cards)
    }

    async fn list_cards_by_rarity(&mut self, rarity_id: i64) -> CollectionResult<Vec<Card>> {
        let cards = sqlx::query_as::<_, Card>(
            "SELECT * FROM card WHERE rarity_id = $1 ORDER BY name ASC, id ASC",
        )
        .bind(rarity_id)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(cards)
    }

    async fn update_card(
        &mut self,
        id: i64,
        input: &CardInput,
    ) -> CollectionResult<Option<Card>> {
        let card = sqlx::query_as::<_, Card>(
            "UPDATE card SET name = $1, rarity_id = $2 WHERE id = $3 RETURNING *",
        )
        .bind(&input.name)
        .bind(input.rarity_id)
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(card)
    }

    async fn delete_card(&mut self, id: i64) -> CollectionResult<bool> {
        let result = sqlx::query("DELETE FROM card WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ProfileRepository for PgUnitOfWork {
    async fn insert_profile(&mut self, input: &ProfileInput) -> CollectionResult<Profile> {
        let profile =
            sqlx::query_as::<_, Profile>("INSERT INTO profile (name) VALUES ($1) RETURNING *")
                .bind(&input.name)
                .fetch_one(&mut *self.tx)
                .await?;

        Ok(profile)
    }

    async fn find_profile(&mut self, id: i64) -> CollectionResult<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profile WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;

        Ok(profile)
    }

    async fn list_profiles(&mut self) -> CollectionResult<Vec<Profile>> {
        let profiles = sqlx::query_as::<_, Profile>("SELECT * FROM profile ORDER BY id")
            .fetch_all(&mut *self.tx)
            .await?;

        Ok(profiles)
    }

    async fn update_profile(
        &mut self,
        id: i64,
        input: &ProfileInput,
    ) -> CollectionResult<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            "UPDATE profile SET name = $1 WHERE id = $2 RETURNING *",
        )
        .bind(&input.name)
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(profile)
    }

    async fn delete_profile(&mut self, id: i64) -> CollectionResult<bool> {
        let result = sqlx::query("DELETE FROM profile WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl OwnershipRepository for PgUnitOfWork {
    async fn insert_ownership(
        &mut self,
        profile_id: i64,
        card_id: i64,
    ) -> CollectionResult<OwnershipRecord> {
        let record = sqlx::query_as::<_, OwnershipRecord>(
            r#"
            INSERT INTO profile_collection (profile_id, card_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(profile_id)
        .bind(card_id)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(record)
    }

    async fn find_ownership(&mut self, id: i64) -> CollectionResult<Option<OwnershipRecord>> {
        let record = sqlx::query_as::<_, OwnershipRecord>(
            "SELECT * FROM profile_collection WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(record)
    }

    async fn list_ownership(&mut self) -> CollectionResult<Vec<OwnershipRecord>> {
        let records =
            sqlx::query_as::<_, OwnershipRecord>("SELECT * FROM profile_collection ORDER BY id")
                .fetch_all(&mut *self.tx)
                .await?;

        Ok(records)
    }

    async fn list_ownership_by_profile(
        &mut self,
        profile_id: i64,
    ) -> CollectionResult<Vec<OwnershipRecord>> {
        let records = sqlx::query_as::<_, OwnershipRecord>(
            "SELECT * FROM profile_collection WHERE profile_id = $1 ORDER BY id",
        )
        .bind(profile_id)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(records)
    }

    async fn list_ownership_by_card(
        &mut self,
        card_id: i64,
    ) -> CollectionResult<Vec<OwnershipRecord>> {
        let records = sqlx::query_as::<_, OwnershipRecord>(
            "SELECT * FROM profile_collection WHERE card_id = $1 ORDER BY id",
        )
        .bind(card_id)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(records)
    }

    async fn list_ownership_by_profile_and_card(
        &mut self,
        profile_id: i64,
        card_id: i64,
    ) -> CollectionResult<Vec<OwnershipRecord>> {
        let records = sqlx::query_as::<_, OwnershipRecord>(
            r#"
            SELECT * FROM profile_collection
            WHERE profile_id = $1 AND card_id = $2
            ORDER BY id
            "#,
        )
        .bind(profile_id)
        .bind(card_id)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(records)
    }

    async fn count_ownership(&mut self, profile_id: i64, card_id: i64) -> CollectionResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM profile_collection WHERE profile_id = $1 AND card_id = $2",
        )
        .bind(profile_id)
        .bind(card_id)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(count)
    }

    async fn delete_ownership(&mut self, id: i64) -> CollectionResult<bool> {
        let result = sqlx::query("DELETE FROM profile_collection WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_ownership_by_profile(&mut self, profile_id: i64) -> CollectionResult<u64> {
        let result = sqlx::query("DELETE FROM profile_collection WHERE profile_id = $1")
            .bind(profile_id)
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl TradeOfferRepository for PgUnitOfWork {
    async fn insert_offer(&mut self, input: &TradeOfferInput) -> CollectionResult<TradeOffer> {
        let offer = sqlx::query_as::<_, TradeOffer>(
            r#"
            INSERT INTO trade_offer (profile_posted, card_offered, card_wanted)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(input.profile_posted)
        .bind(input.card_offered)
        .bind(input.card_wanted)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(offer)
    }

    async fn find_offer(&mut self, id: i64) -> CollectionResult<Option<TradeOffer>> {
        let offer = sqlx::query_as::<_, TradeOffer>("SELECT * FROM trade_offer WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;

        Ok(offer)
    }

    async fn list_offers(&mut self) -> CollectionResult<Vec<TradeOffer>> {
        let offers = sqlx::query_as::<_, TradeOffer>("SELECT * FROM trade_offer ORDER BY id")
            .fetch_all(&mut *self.tx)
            .await?;

        Ok(offers)
    }

    async fn list_offers_by_card_offered(
        &mut self,
        card_offered: i64,
    ) -> CollectionResult<Vec<TradeOffer>> {
        let offers = sqlx::query_as::<_, TradeOffer>(
            "SELECT * FROM trade_offer WHERE card_offered = $1 ORDER BY id",
        )
        .bind(card_offered)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(offers)
    }

    async fn list_offers_by_card_wanted(
        &mut self,
        card_wanted: i64,
    ) -> CollectionResult<Vec<TradeOffer>> {
        let offers = sqlx::query_as::<_, TradeOffer>(
            "SELECT * FROM trade_offer WHERE card_wanted = $1 ORDER BY id",
        )
        .bind(card_wanted)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(offers)
    }

    async fn list_offers_by_cards(
        &mut self,
        card_offered: i64,
        card_wanted: i64,
    ) -> CollectionResult<Vec<TradeOffer>> {
        let offers = sqlx::query_as::<_, TradeOffer>(
            r#"
            SELECT * FROM trade_offer
            WHERE card_offered = $1 AND card_wanted = $2
            ORDER BY id
            "#,
        )
        .bind(card_offered)
        .bind(card_wanted)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(offers)
    }

    async fn list_offers_by_profile(
        &mut self,
        profile_id: i64,
    ) -> CollectionResult<Vec<TradeOffer>> {
        let offers = sqlx::query_as::<_, TradeOffer>(
            "SELECT * FROM trade_offer WHERE profile_posted = $1 ORDER BY id",
        )
        .bind(profile_id)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(offers)
    }

    async fn list_offers_by_profile_and_card_offered(
        &mut self,
        profile_id: i64,
        card_offered: i64,
    ) -> CollectionResult<Vec<TradeOffer>> {
        let offers = sqlx::query_as::<_, TradeOffer>(
            r#"
            SELECT * FROM trade_offer
            WHERE profile_posted = $1 AND card_offered = $2
            ORDER BY id
            "#,
        )
        .bind(profile_id)
        .bind(card_offered)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(offers)
    }

    async fn delete_offer(&mut self, id: i64) -> CollectionResult<bool> {
        let result = sqlx::query("DELETE FROM trade_offer WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_offers_by_profile(&mut self, profile_id: i64) -> CollectionResult<u64> {
        let result = sqlx::query("DELETE FROM trade_offer WHERE profile_posted = $1")
            .bind(profile_id)
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl QuestRepository for PgUnitOfWork {
    async fn insert_quest(&mut self, input: &QuestInput) -> CollectionResult<Quest> {
        let quest = sqlx::query_as::<_, Quest>(
            r#"
            INSERT INTO quest (profile_id, cards_collected, cards_needed, reward, rarity_needed)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(input.profile_id)
        .bind(input.cards_collected)
        .bind(input.cards_needed)
        .bind(input.reward)
        .bind(input.rarity_needed)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(quest)
    }

    async fn find_quest(&mut self, id: i64) -> CollectionResult<Option<Quest>> {
        let quest = sqlx::query_as::<_, Quest>("SELECT * FROM quest WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;

        Ok(quest)
    }

    async fn list_quests(&mut self) -> CollectionResult<Vec<Quest>> {
        let quests = sqlx::query_as::<_, Quest>("SELECT * FROM quest ORDER BY id")
            .fetch_all(&mut *self.tx)
            .await?;

        Ok(quests)
    }

    async fn list_quests_by_profile(&mut self, profile_id: i64) -> CollectionResult<Vec<Quest>> {
        let quests =
            sqlx::query_as::<_, Quest>("SELECT * FROM quest WHERE profile_id = $1 ORDER BY id")
                .bind(profile_id)
                .fetch_all(&mut *self.tx)
                .await?;

        Ok(quests)
    }

    async fn list_quests_by_reward(&mut self, card_id: i64) -> CollectionResult<Vec<Quest>> {
        let quests =
            sqlx::query_as::<_, Quest>("SELECT * FROM quest WHERE reward = $1 ORDER BY id")
                .bind(card_id)
                .fetch_all(&mut *self.tx)
                .await?;

        Ok(quests)
    }

    async fn list_quests_by_rarity(&mut self, rarity_id: i64) -> CollectionResult<Vec<Quest>> {
        let quests = sqlx::query_as::<_, Quest>(
            "SELECT * FROM quest WHERE rarity_needed = $1 ORDER BY id",
        )
        .bind(rarity_id)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(quests)
    }

    async fn update_quest(
        &mut self,
        id: i64,
        input: &QuestInput,
    ) -> CollectionResult<Option<Quest>> {
        let quest = sqlx::query_as::<_, Quest>(
            r#"
            UPDATE quest
            SET profile_id = $1, cards_collected = $2, cards_needed = $3,
                reward = $4, rarity_needed = $5
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(input.profile_id)
        .bind(input.cards_collected)
        .bind(input.cards_needed)
        .bind(input.reward)
        .bind(input.rarity_needed)
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(quest)
    }

    async fn set_quest_progress(
        &mut self,
        id: i64,
        cards_collected: i32,
    ) -> CollectionResult<Option<Quest>> {
        let quest = sqlx::query_as::<_, Quest>(
            "UPDATE quest SET cards_collected = $1 WHERE id = $2 RETURNING *",
        )
        .bind(cards_collected)
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(quest)
    }

    async fn delete_quest(&mut self, id: i64) -> CollectionResult<bool> {
        let result = sqlx::query("DELETE FROM quest WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_quests_by_profile(&mut self, profile_id: i64) -> CollectionResult<u64> {
        let result = sqlx::query("DELETE FROM quest WHERE profile_id = $1")
            .bind(profile_id)
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected())
    }
}
