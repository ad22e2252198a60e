//! Pack draws

use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::Card;

/// Draw `amount` cards uniformly, with replacement, in draw order.
/// None when the pool is empty.
pub fn draw_cards<R: Rng + ?Sized>(pool: &[Card], amount: usize, rng: &mut R) -> Option<Vec<Card>> {
    if pool.is_empty() {
        return None;
    }

    (0..amount).map(|_| pool.choose(rng).cloned()).collect()
}
