//! Pack opener

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collection::ledger;
use crate::error::{CollectionError, CollectionResult};
use crate::pack::{draw, OpenedPack, PackRequest};
use crate::store::{require_profile, require_rarity, CardRepository, Database, UnitOfWork};

#[derive(Clone)]
pub struct PackService<D> {
    db: D,
    max_pack_size: i64,
}

impl<D: Database> PackService<D> {
    pub fn new(db: D, max_pack_size: i64) -> Self {
        Self { db, max_pack_size }
    }

    pub async fn open_pack(
        &self,
        profile_id: i64,
        request: PackRequest,
    ) -> CollectionResult<OpenedPack> {
        let mut rng = StdRng::from_entropy();
        self.open_pack_with_rng(profile_id, request, &mut rng).await
    }

    /// Draw and grant a pack using the given RNG; every grant commits together
    pub async fn open_pack_with_rng<R: Rng + Send + ?Sized>(
        &self,
        profile_id: i64,
        request: PackRequest,
        rng: &mut R,
    ) -> CollectionResult<OpenedPack> {
        if request.amount < 1 || request.amount > self.max_pack_size {
            return Err(CollectionError::invalid(format!(
                "amount must be between 1 and {}",
                self.max_pack_size
            )));
        }

        let mut work = self.db.begin().await?;
        require_profile(&mut work, profile_id).await?;

        let pool = match request.rarity_id {
            Some(rarity_id) => {
                require_rarity(&mut work, rarity_id).await?;
                work.list_cards_by_rarity(rarity_id).await?
            }
            None => work.list_cards().await?,
        };

        let cards = draw::draw_cards(&pool, request.amount as usize, rng)
            .ok_or_else(|| CollectionError::invalid("no cards to draw from"))?;

        let mut rewards = Vec::new();
        for card in &cards {
            let acquisition = ledger::add_ownership(&mut work, profile_id, card.id).await?;
            rewards.extend(acquisition.rewards);
        }
        work.commit().await?;

        tracing::info!(
            profile_id,
            amount = cards.len(),
            rarity_id = ?request.rarity_id,
            rewards = rewards.len(),
            "Pack opened"
        );

        Ok(OpenedPack {
            profile_id,
            cards,
            rewards,
        })
    }
}
