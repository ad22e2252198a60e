//! Quest service

use crate::error::{CollectionError, CollectionResult};
use crate::quest::{Quest, QuestInput, QuestQuery};
use crate::store::{
    require_card, require_profile, require_rarity, Database, QuestRepository, Repositories,
    UnitOfWork,
};

/// Service for creating, editing and browsing quests
#[derive(Clone)]
pub struct QuestService<D> {
    db: D,
}

impl<D: Database> QuestService<D> {
    pub fn new(db: D) -> Self {
        Self { db }
    }

    pub async fn add_quest(&self, input: QuestInput) -> CollectionResult<Quest> {
        let mut work = self.db.begin().await?;

        validate_quest(&mut work, &input).await?;
        let quest = work.insert_quest(&input).await?;
        work.commit().await?;

        tracing::info!(
            quest_id = quest.id,
            profile_id = quest.profile_id,
            cards_needed = quest.cards_needed,
            reward = quest.reward,
            "Quest created"
        );

        Ok(quest)
    }

    /// Replace a quest's fields. NotFound when the quest does not exist.
    pub async fn update_quest(&self, id: i64, input: QuestInput) -> CollectionResult<Quest> {
        let mut work = self.db.begin().await?;

        validate_quest(&mut work, &input).await?;
        let quest = work
            .update_quest(id, &input)
            .await?
            .ok_or_else(|| CollectionError::not_found(format!("Quest {}", id)))?;
        work.commit().await?;

        tracing::info!(quest_id = quest.id, "Quest updated");
        Ok(quest)
    }

    pub async fn delete_quest(&self, id: i64) -> CollectionResult<bool> {
        let mut work = self.db.begin().await?;
        let deleted = work.delete_quest(id).await?;
        if deleted {
            work.commit().await?;
            tracing::info!(quest_id = id, "Quest deleted");
        }
        Ok(deleted)
    }

    pub async fn get_by_id(&self, id: i64) -> CollectionResult<Option<Quest>> {
        let mut work = self.db.begin().await?;
        work.find_quest(id).await
    }

    pub async fn get_all(&self) -> CollectionResult<Vec<Quest>> {
        let mut work = self.db.begin().await?;
        work.list_quests().await
    }

    pub async fn get_all_by_profile(&self, profile_id: i64) -> CollectionResult<Vec<Quest>> {
        let mut work = self.db.begin().await?;
        work.list_quests_by_profile(profile_id).await
    }

    pub async fn get_all_by_reward(&self, card_id: i64) -> CollectionResult<Vec<Quest>> {
        let mut work = self.db.begin().await?;
        work.list_quests_by_reward(card_id).await
    }

    pub async fn list(&self, query: &QuestQuery) -> CollectionResult<Vec<Quest>> {
        let quests = match query.profile_id {
            Some(profile_id) => self.get_all_by_profile(profile_id).await?,
            None => self.get_all().await?,
        };

        Ok(quests
            .into_iter()
            .filter(|quest| query.reward.map_or(true, |reward| quest.reward == reward))
            .collect())
    }
}

async fn validate_quest<R: Repositories>(repo: &mut R, input: &QuestInput) -> CollectionResult<()> {
    input.check_progress()?;

    require_profile(repo, input.profile_id).await?;
    require_card(repo, input.reward).await?;
    if let Some(rarity_id) = input.rarity_needed {
        require_rarity(repo, rarity_id).await?;
    }

    Ok(())
}
