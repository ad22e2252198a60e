//! Quest progress driven by ownership gains

mod common;

#[cfg(test)]
mod tests {
    use card_collector_server::collection::GrantRequest;
    use card_collector_server::error::CollectionError;
    use card_collector_server::quest::{QuestInput, QuestQuery};

    use crate::common::Fixture;

    #[tokio::test]
    async fn test_gain_completes_quest_and_grants_reward() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        let any_card = fx.card("Goblin", &common).await;
        let reward = fx.card("Dragon", &common).await;
        let alice = fx.profile("alice").await;

        let quest = fx
            .quest(QuestInput {
                cards_collected: 2,
                ..QuestInput::new(alice.id, 3, reward.id)
            })
            .await;

        let acquisition = fx
            .collection
            .grant(GrantRequest {
                profile_id: alice.id,
                card_id: any_card.id,
            })
            .await
            .unwrap();

        assert_eq!(acquisition.rewards.len(), 1);
        assert_eq!(acquisition.rewards[0].card_id, reward.id);
        assert!(fx.quests.get_by_id(quest.id).await.unwrap().is_none());
        assert_eq!(fx.count(&alice, &any_card).await, 1);
        assert_eq!(fx.count(&alice, &reward).await, 1);
        assert_eq!(fx.collection.list_by_profile(alice.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_gain_advances_unfinished_quest() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        let card = fx.card("Goblin", &common).await;
        let reward = fx.card("Dragon", &common).await;
        let alice = fx.profile("alice").await;
        let bob = fx.profile("bob").await;

        let quest = fx.quest(QuestInput::new(alice.id, 3, reward.id)).await;
        let other = fx.quest(QuestInput::new(bob.id, 3, reward.id)).await;

        fx.give(&alice, &card).await;
        fx.give(&alice, &card).await;

        let quest = fx.quests.get_by_id(quest.id).await.unwrap().unwrap();
        assert_eq!(quest.cards_collected, 2);
        assert_eq!(fx.count(&alice, &reward).await, 0);

        // Another profile's gains never touch this quest
        let other = fx.quests.get_by_id(other.id).await.unwrap().unwrap();
        assert_eq!(other.cards_collected, 0);
    }

    #[tokio::test]
    async fn test_reward_cascades_into_remaining_quests() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        let card = fx.card("Goblin", &common).await;
        let first_reward = fx.card("Dragon", &common).await;
        let second_reward = fx.card("Phoenix", &common).await;
        let alice = fx.profile("alice").await;

        fx.quest(QuestInput::new(alice.id, 1, first_reward.id)).await;
        fx.quest(QuestInput::new(alice.id, 2, second_reward.id)).await;

        let acquisition = fx
            .collection
            .grant(GrantRequest {
                profile_id: alice.id,
                card_id: card.id,
            })
            .await
            .unwrap();

        let reward_cards: Vec<i64> = acquisition.rewards.iter().map(|r| r.card_id).collect();
        assert_eq!(reward_cards, vec![first_reward.id, second_reward.id]);
        assert!(fx.quests.get_all_by_profile(alice.id).await.unwrap().is_empty());
        assert_eq!(fx.collection.list_by_profile(alice.id).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_rarity_filter_only_counts_matching_cards() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        let rare = fx.rarity("Rare").await;
        let goblin = fx.card("Goblin", &common).await;
        let wizard = fx.card("Wizard", &rare).await;
        let reward = fx.card("Dragon", &common).await;
        let alice = fx.profile("alice").await;

        let quest = fx
            .quest(QuestInput {
                rarity_needed: Some(rare.id),
                ..QuestInput::new(alice.id, 2, reward.id)
            })
            .await;

        fx.give(&alice, &goblin).await;
        let unchanged = fx.quests.get_by_id(quest.id).await.unwrap().unwrap();
        assert_eq!(unchanged.cards_collected, 0);

        fx.give(&alice, &wizard).await;
        let advanced = fx.quests.get_by_id(quest.id).await.unwrap().unwrap();
        assert_eq!(advanced.cards_collected, 1);

        fx.give(&alice, &wizard).await;
        assert!(fx.quests.get_by_id(quest.id).await.unwrap().is_none());
        assert_eq!(fx.count(&alice, &reward).await, 1);
    }

    #[tokio::test]
    async fn test_quest_validation() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        let reward = fx.card("Dragon", &common).await;
        let alice = fx.profile("alice").await;

        let err = fx
            .quests
            .add_quest(QuestInput::new(alice.id, 0, reward.id))
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::InvalidArgument(_)));

        let err = fx
            .quests
            .add_quest(QuestInput {
                cards_collected: 3,
                ..QuestInput::new(alice.id, 3, reward.id)
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::InvalidArgument(_)));

        let err = fx
            .quests
            .add_quest(QuestInput::new(999, 3, reward.id))
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::NotFound(_)));

        let err = fx
            .quests
            .add_quest(QuestInput::new(alice.id, 3, 999))
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::NotFound(_)));

        let err = fx
            .quests
            .add_quest(QuestInput {
                rarity_needed: Some(999),
                ..QuestInput::new(alice.id, 3, reward.id)
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::NotFound(_)));

        assert!(fx.quests.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_quest() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        let reward = fx.card("Dragon", &common).await;
        let alice = fx.profile("alice").await;
        let quest = fx.quest(QuestInput::new(alice.id, 3, reward.id)).await;

        let updated = fx
            .quests
            .update_quest(
                quest.id,
                QuestInput {
                    cards_collected: 4,
                    ..QuestInput::new(alice.id, 5, reward.id)
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.cards_collected, 4);
        assert_eq!(updated.cards_needed, 5);

        let err = fx
            .quests
            .update_quest(quest.id, QuestInput::new(alice.id, -1, reward.id))
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::InvalidArgument(_)));

        let err = fx
            .quests
            .update_quest(999, QuestInput::new(alice.id, 2, reward.id))
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::NotFound(_)));

        assert!(fx.quests.delete_quest(quest.id).await.unwrap());
        assert!(!fx.quests.delete_quest(quest.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_quest_listings() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        let dragon = fx.card("Dragon", &common).await;
        let phoenix = fx.card("Phoenix", &common).await;
        let alice = fx.profile("alice").await;
        let bob = fx.profile("bob").await;

        fx.quest(QuestInput::new(alice.id, 3, dragon.id)).await;
        fx.quest(QuestInput::new(alice.id, 3, phoenix.id)).await;
        fx.quest(QuestInput::new(bob.id, 3, dragon.id)).await;

        assert_eq!(fx.quests.get_all_by_reward(dragon.id).await.unwrap().len(), 2);
        assert_eq!(fx.quests.get_all_by_profile(alice.id).await.unwrap().len(), 2);

        let filtered = fx
            .quests
            .list(&QuestQuery {
                profile_id: Some(alice.id),
                reward: Some(dragon.id),
            })
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].profile_id, alice.id);
        assert_eq!(filtered[0].reward, dragon.id);
    }
}
