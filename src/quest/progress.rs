//! One step of quest progress, independent of storage

use crate::card::Card;
use crate::quest::Quest;

/// Effect of a single card gain on one quest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestProgress {
    /// The card does not count toward this quest
    Unaffected,
    /// Still short of the target; store the new counter
    Advanced { cards_collected: i32 },
    /// Target reached; the quest is consumed and its reward granted
    Completed { reward: i64 },
}

impl Quest {
    /// Whether gaining `card` counts toward this quest
    pub fn counts(&self, card: &Card) -> bool {
        self.rarity_needed
            .map_or(true, |rarity_id| rarity_id == card.rarity_id)
    }

    pub fn progress_on(&self, card: &Card) -> QuestProgress {
        if !self.counts(card) {
            return QuestProgress::Unaffected;
        }

        let cards_collected = self.cards_collected + 1;
        if cards_collected >= self.cards_needed {
            QuestProgress::Completed {
                reward: self.reward,
            }
        } else {
            QuestProgress::Advanced { cards_collected }
        }
    }
}
