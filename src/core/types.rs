//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Stable identifier assigned to a lexical record at ingestion
///
/// Two records with identical surface, readings and meaning still get
/// distinct ids, so removal from an enemy's vocabulary is an exact key lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordId(pub u32);

impl WordId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Difficulty bucket for vocabulary (1 = most common, 3 = rarest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tier {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Tier {
    /// All tiers, easiest first
    pub const ALL: [Tier; 3] = [Tier::One, Tier::Two, Tier::Three];

    /// Numeric value in 1..=3
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Tier> {
        match value {
            1 => Some(Tier::One),
            2 => Some(Tier::Two),
            3 => Some(Tier::Three),
            _ => None,
        }
    }

    /// Zero-based bucket index
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// Tiers from `self` down to `Tier::One`
    pub fn descending(self) -> impl Iterator<Item = Tier> {
        Tier::ALL.into_iter().rev().filter(move |t| *t <= self)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
