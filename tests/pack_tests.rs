//! Pack opening

mod common;

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use card_collector_server::error::CollectionError;
    use card_collector_server::pack::PackRequest;
    use card_collector_server::quest::QuestInput;

    use crate::common::{Fixture, MAX_PACK_SIZE};

    fn request(amount: i64, rarity_id: Option<i64>) -> PackRequest {
        PackRequest { amount, rarity_id }
    }

    #[tokio::test]
    async fn test_forced_draw_grants_card_and_completes_quest() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        let rare = fx.rarity("Rare").await;
        let x = fx.card("Goblin", &common).await;
        let reward = fx.card("Dragon", &rare).await;
        let alice = fx.profile("alice").await;
        fx.quest(QuestInput::new(alice.id, 1, reward.id)).await;

        // Only one common card exists, so the draw is forced
        let mut rng = StdRng::seed_from_u64(42);
        let pack = fx
            .packs
            .open_pack_with_rng(alice.id, request(1, Some(common.id)), &mut rng)
            .await
            .unwrap();

        assert_eq!(pack.cards, vec![x.clone()]);
        assert_eq!(pack.rewards.len(), 1);
        assert_eq!(fx.count(&alice, &x).await, 1);
        assert_eq!(fx.count(&alice, &reward).await, 1);
        assert!(fx.quests.get_all_by_profile(alice.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_every_drawn_card_is_granted_in_order() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        for name in ["Goblin", "Orc", "Troll", "Wolf"] {
            fx.card(name, &common).await;
        }
        let alice = fx.profile("alice").await;

        let mut rng = StdRng::seed_from_u64(7);
        let pack = fx
            .packs
            .open_pack_with_rng(alice.id, request(6, None), &mut rng)
            .await
            .unwrap();

        assert_eq!(pack.cards.len(), 6);
        let records = fx.collection.list_by_profile(alice.id).await.unwrap();
        let granted: Vec<i64> = records.iter().map(|r| r.card_id).collect();
        let drawn: Vec<i64> = pack.cards.iter().map(|c| c.id).collect();
        assert_eq!(granted, drawn);
    }

    #[tokio::test]
    async fn test_same_seed_draws_same_pack() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        for name in ["Goblin", "Orc", "Troll", "Wolf", "Bat"] {
            fx.card(name, &common).await;
        }
        let alice = fx.profile("alice").await;
        let bob = fx.profile("bob").await;

        let first = fx
            .packs
            .open_pack_with_rng(alice.id, request(5, None), &mut StdRng::seed_from_u64(3))
            .await
            .unwrap();
        let second = fx
            .packs
            .open_pack_with_rng(bob.id, request(5, None), &mut StdRng::seed_from_u64(3))
            .await
            .unwrap();

        assert_eq!(first.cards, second.cards);
    }

    #[tokio::test]
    async fn test_amount_out_of_range() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        fx.card("Goblin", &common).await;
        let alice = fx.profile("alice").await;

        for amount in [0, -3, MAX_PACK_SIZE + 1] {
            let err = fx.packs.open_pack(alice.id, request(amount, None)).await.unwrap_err();
            assert!(matches!(err, CollectionError::InvalidArgument(_)));
        }

        assert!(fx.collection.list_by_profile(alice.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_pool_is_rejected() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        let rare = fx.rarity("Rare").await;
        fx.card("Goblin", &common).await;
        let alice = fx.profile("alice").await;

        let err = fx
            .packs
            .open_pack(alice.id, request(1, Some(rare.id)))
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::InvalidArgument(_)));

        let err = fx
            .packs
            .open_pack(alice.id, request(1, Some(999)))
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unknown_profile() {
        let fx = Fixture::new();
        let common = fx.rarity("Common").await;
        fx.card("Goblin", &common).await;

        let err = fx.packs.open_pack(999, request(1, None)).await.unwrap_err();
        assert!(matches!(err, CollectionError::NotFound(_)));
    }
}
