//! Ledger and settlement against a real PostgreSQL database

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use card_collector_server::card::{CardInput, CardService};
    use card_collector_server::collection::CollectionService;
    use card_collector_server::profile::{ProfileInput, ProfileService};
    use card_collector_server::rarity::{RarityInput, RarityService};
    use card_collector_server::store::PgDatabase;
    use card_collector_server::trade::{ProposalOutcome, TradeOfferInput, TradeService};

    /// Helper to create a migrated test database
    async fn setup_test_db() -> PgDatabase {
        let database_url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "postgresql://localhost/card_collector_test".to_string());

        let pool: PgPool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(2)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        card_collector_server::db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        PgDatabase::new(pool)
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_settlement_round_trip() {
        let db = setup_test_db().await;
        let rarities = RarityService::new(db.clone());
        let cards = CardService::new(db.clone());
        let profiles = ProfileService::new(db.clone());
        let collection = CollectionService::new(db.clone());
        let trades = TradeService::new(db.clone());

        let rarity = rarities
            .add(RarityInput {
                name: "Common".to_string(),
            })
            .await
            .unwrap();
        let x = cards
            .add(CardInput {
                name: "Goblin".to_string(),
                rarity_id: rarity.id,
            })
            .await
            .unwrap();
        let y = cards
            .add(CardInput {
                name: "Orc".to_string(),
                rarity_id: rarity.id,
            })
            .await
            .unwrap();
        let alice = profiles
            .add(ProfileInput {
                name: "alice".to_string(),
            })
            .await
            .unwrap();
        let bob = profiles
            .add(ProfileInput {
                name: "bob".to_string(),
            })
            .await
            .unwrap();

        collection.add_ownership(alice.id, x.id).await.unwrap();
        collection.add_ownership(bob.id, y.id).await.unwrap();

        trades
            .propose(TradeOfferInput {
                profile_posted: alice.id,
                card_offered: x.id,
                card_wanted: y.id,
            })
            .await
            .unwrap();
        let outcome = trades
            .propose(TradeOfferInput {
                profile_posted: bob.id,
                card_offered: y.id,
                card_wanted: x.id,
            })
            .await
            .unwrap();

        assert!(matches!(outcome, ProposalOutcome::Settled(_)));
        assert_eq!(collection.count_by_profile_and_card(alice.id, y.id).await.unwrap(), 1);
        assert_eq!(collection.count_by_profile_and_card(bob.id, x.id).await.unwrap(), 1);

        // Clean up so reruns start fresh
        assert!(profiles.delete(alice.id).await.unwrap());
        assert!(profiles.delete(bob.id).await.unwrap());
        assert!(cards.delete(x.id).await.unwrap());
        assert!(cards.delete(y.id).await.unwrap());
        assert!(rarities.delete(rarity.id).await.unwrap());
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_health_ping() {
        use card_collector_server::store::Database;

        let db = setup_test_db().await;
        assert!(db.ping().await.is_ok());
    }
}
