//! Enemy state
//!
//! Stats are pure functions of the tier. The vocabulary sampled at creation
//! is kept so an exhausted word list can be refilled.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{Tier, WordId};
use crate::lexicon::WordRef;

/// Tier-derived enemy stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub hp: i32,
    pub damage: i32,
    pub xp_reward: u64,
}

impl EnemyStats {
    /// hp = 2 + 3t, damage = 1 + 2t, xp = 10t
    pub fn for_tier(tier: Tier) -> Self {
        let t = tier.value();
        Self {
            hp: 2 + 3 * i32::from(t),
            damage: 1 + 2 * i32::from(t),
            xp_reward: 10 * u64::from(t),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    hp: i32,
    damage: i32,
    xp_reward: u64,
    tier: Tier,
    vocabulary: Vec<WordRef>,
    remaining_words: Vec<WordRef>,
}

impl Enemy {
    pub fn new(tier: Tier, vocabulary: Vec<WordRef>) -> Self {
        let stats = EnemyStats::for_tier(tier);
        Self {
            hp: stats.hp,
            damage: stats.damage,
            xp_reward: stats.xp_reward,
            tier,
            remaining_words: vocabulary.clone(),
            vocabulary,
        }
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn xp_reward(&self) -> u64 {
        self.xp_reward
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount.max(0);
    }

    /// Words not yet answered correctly in this encounter
    pub fn remaining_words(&self) -> &[WordRef] {
        &self.remaining_words
    }

    /// Full sample drawn at creation
    pub fn vocabulary(&self) -> &[WordRef] {
        &self.vocabulary
    }

    /// Remove a word by identity; returns false if it was not present
    pub fn remove_word(&mut self, id: WordId) -> bool {
        let before = self.remaining_words.len();
        self.remaining_words.retain(|w| w.id() != id);
        self.remaining_words.len() != before
    }

    /// Refill the remaining words from the creation sample
    pub fn replenish(&mut self) {
        self.remaining_words = self.vocabulary.clone();
    }

    /// Uniformly random remaining word
    pub fn pick_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<WordRef> {
        self.remaining_words.choose(rng).cloned()
    }
}
