//! Mirror-offer matching

use crate::trade::{TradeOffer, TradeOfferInput};

/// Whether `existing` completes `proposal`: someone else already offers what
/// the proposer wants and wants what the proposer offers.
pub fn is_mirror(existing: &TradeOffer, proposal: &TradeOfferInput) -> bool {
    existing.card_offered == proposal.card_wanted
        && existing.card_wanted == proposal.card_offered
        && existing.profile_posted != proposal.profile_posted
}

/// Oldest mirror among `candidates`, which must be ordered by id
pub fn pick_mirror<'a, I>(candidates: I, proposal: &TradeOfferInput) -> Option<&'a TradeOffer>
where
    I: IntoIterator<Item = &'a TradeOffer>,
{
    candidates
        .into_iter()
        .find(|existing| is_mirror(existing, proposal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn offer(id: i64, profile_posted: i64, card_offered: i64, card_wanted: i64) -> TradeOffer {
        TradeOffer {
            id,
            profile_posted,
            card_offered,
            card_wanted,
            created_at: Utc::now(),
        }
    }

    fn proposal(profile_posted: i64, card_offered: i64, card_wanted: i64) -> TradeOfferInput {
        TradeOfferInput {
            profile_posted,
            card_offered,
            card_wanted,
        }
    }

    #[test]
    fn test_swapped_cards_match() {
        assert!(is_mirror(&offer(1, 10, 7, 8), &proposal(20, 8, 7)));
    }

    #[test]
    fn test_same_direction_does_not_match() {
        assert!(!is_mirror(&offer(1, 10, 7, 8), &proposal(20, 7, 8)));
    }

    #[test]
    fn test_half_match_does_not_match() {
        assert!(!is_mirror(&offer(1, 10, 7, 8), &proposal(20, 8, 9)));
        assert!(!is_mirror(&offer(1, 10, 7, 8), &proposal(20, 9, 7)));
    }

    #[test]
    fn test_own_offer_never_matches() {
        assert!(!is_mirror(&offer(1, 10, 7, 8), &proposal(10, 8, 7)));
    }

    #[test]
    fn test_oldest_mirror_wins() {
        let offers = vec![offer(3, 10, 7, 8), offer(5, 11, 7, 8), offer(9, 12, 7, 8)];
        let picked = pick_mirror(&offers, &proposal(20, 8, 7)).map(|o| o.id);
        assert_eq!(picked, Some(3));
    }

    #[test]
    fn test_pick_skips_own_offers() {
        let offers = vec![offer(3, 20, 7, 8), offer(5, 11, 7, 8)];
        let picked = pick_mirror(&offers, &proposal(20, 8, 7)).map(|o| o.id);
        assert_eq!(picked, Some(5));
    }
}
