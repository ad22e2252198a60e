//! Rarity, card and profile stores, including their delete cascades

mod common;

#[cfg(test)]
mod tests {
    use card_collector_server::card::CardInput;
    use card_collector_server::error::CollectionError;
    use card_collector_server::profile::ProfileInput;
    use card_collector_server::quest::QuestInput;
    use card_collector_server::rarity::RarityInput;
    use card_collector_server::trade::TradeOfferInput;

    use crate::common::Fixture;

    #[tokio::test]
    async fn test_profile_delete_cascades() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        let x = fx.card("Goblin", &common).await;
        let y = fx.card("Orc", &common).await;
        let reward = fx.card("Dragon", &common).await;
        let alice = fx.profile("alice").await;
        let bob = fx.profile("bob").await;

        fx.give(&alice, &x).await;
        fx.give(&alice, &x).await;
        fx.give(&alice, &y).await;
        fx.give(&bob, &y).await;
        fx.quest(QuestInput::new(alice.id, 5, reward.id)).await;
        fx.trades
            .propose(TradeOfferInput {
                profile_posted: alice.id,
                card_offered: x.id,
                card_wanted: reward.id,
            })
            .await
            .unwrap();

        assert!(fx.profiles.delete(alice.id).await.unwrap());

        assert!(fx.profiles.get_by_id(alice.id).await.unwrap().is_none());
        assert!(fx.collection.list_by_profile(alice.id).await.unwrap().is_empty());
        assert!(fx.quests.get_all_by_profile(alice.id).await.unwrap().is_empty());
        assert!(fx.offers().await.is_empty());

        // Other profiles keep their cards
        assert_eq!(fx.count(&bob, &y).await, 1);

        assert!(!fx.profiles.delete(alice.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_card_that_is_a_reward_cannot_be_deleted() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        let reward = fx.card("Dragon", &common).await;
        let alice = fx.profile("alice").await;
        fx.give(&alice, &reward).await;
        fx.quest(QuestInput::new(alice.id, 3, reward.id)).await;

        let err = fx.cards.delete(reward.id).await.unwrap_err();
        assert!(matches!(err, CollectionError::Conflict(_)));
        assert!(fx.cards.get_by_id(reward.id).await.unwrap().is_some());
        assert_eq!(fx.count(&alice, &reward).await, 1);
    }

    #[tokio::test]
    async fn test_card_delete_removes_copies_and_offers() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        let x = fx.card("Goblin", &common).await;
        let y = fx.card("Orc", &common).await;
        let alice = fx.profile("alice").await;
        let bob = fx.profile("bob").await;
        fx.give(&alice, &x).await;
        fx.give(&bob, &y).await;

        fx.trades
            .propose(TradeOfferInput {
                profile_posted: alice.id,
                card_offered: x.id,
                card_wanted: fx.card("Troll", &common).await.id,
            })
            .await
            .unwrap();
        fx.trades
            .propose(TradeOfferInput {
                profile_posted: bob.id,
                card_offered: y.id,
                card_wanted: x.id,
            })
            .await
            .unwrap();

        assert!(fx.cards.delete(x.id).await.unwrap());

        assert!(fx.cards.get_by_id(x.id).await.unwrap().is_none());
        assert!(fx.collection.list_by_card(x.id).await.unwrap().is_empty());
        assert!(fx.offers().await.is_empty());
        assert_eq!(fx.count(&bob, &y).await, 1);

        assert!(!fx.cards.delete(x.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_rarity_in_use_cannot_be_deleted() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        let rare = fx.rarity("Rare").await;
        let unused = fx.rarity("Mythic").await;
        let reward = fx.card("Dragon", &common).await;
        let alice = fx.profile("alice").await;
        fx.quest(QuestInput {
            rarity_needed: Some(rare.id),
            ..QuestInput::new(alice.id, 2, reward.id)
        })
        .await;

        let err = fx.rarities.delete(common.id).await.unwrap_err();
        assert!(matches!(err, CollectionError::Conflict(_)));

        let err = fx.rarities.delete(rare.id).await.unwrap_err();
        assert!(matches!(err, CollectionError::Conflict(_)));

        assert!(fx.rarities.delete(unused.id).await.unwrap());
        assert!(!fx.rarities.delete(unused.id).await.unwrap());
        assert_eq!(fx.rarities.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_card_requires_existing_rarity() {
        let fx = Fixture::new();

        let err = fx
            .cards
            .add(CardInput {
                name: "Goblin".to_string(),
                rarity_id: 999,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::NotFound(_)));

        let common = fx.rarity("Common").await;
        let card = fx.card("Goblin", &common).await;
        let err = fx
            .cards
            .update(
                card.id,
                CardInput {
                    name: "Goblin".to_string(),
                    rarity_id: 999,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::NotFound(_)));

        let rare = fx.rarity("Rare").await;
        let updated = fx
            .cards
            .update(
                card.id,
                CardInput {
                    name: "Goblin King".to_string(),
                    rarity_id: rare.id,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Goblin King");
        assert_eq!(updated.rarity_id, rare.id);
    }

    #[tokio::test]
    async fn test_catalog_listing_and_random_pick() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        let rare = fx.rarity("Rare").await;
        let empty = fx.rarity("Mythic").await;
        fx.card("Orc", &common).await;
        fx.card("Goblin", &common).await;
        let wizard = fx.card("Wizard", &rare).await;

        let names: Vec<String> = fx
            .cards
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Goblin", "Orc", "Wizard"]);

        assert_eq!(fx.cards.get_all_by_rarity(common.id).await.unwrap().len(), 2);

        let picked = fx.cards.get_random(Some(rare.id)).await.unwrap();
        assert_eq!(picked, wizard);

        let err = fx.cards.get_random(Some(empty.id)).await.unwrap_err();
        assert!(matches!(err, CollectionError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_names_are_validated() {
        let fx = Fixture::new();

        let err = fx
            .rarities
            .add(RarityInput {
                name: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::InvalidArgument(_)));

        let err = fx
            .profiles
            .add(ProfileInput {
                name: "x".repeat(65),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::InvalidArgument(_)));

        let alice = fx.profile("alice").await;
        let renamed = fx
            .profiles
            .update(
                alice.id,
                ProfileInput {
                    name: "alicia".to_string(),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.name, "alicia");
        assert!(fx
            .profiles
            .update(
                999,
                ProfileInput {
                    name: "nobody".to_string(),
                },
            )
            .await
            .unwrap()
            .is_none());
    }
}
