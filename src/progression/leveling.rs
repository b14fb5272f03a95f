//! Leveling curve and tier gating
//!
//! Each level costs 1.5x the previous one, starting at 50 xp for level 1 -> 2.

use serde::{Deserialize, Serialize};

use crate::core::types::Tier;

/// XP cost of leaving level 1
const BASE_LEVEL_XP: f64 = 50.0;

/// Growth factor between consecutive level costs
const LEVEL_GROWTH: f64 = 1.5;

/// Level at which tier 2 words unlock
const TIER_TWO_LEVEL: u32 = 3;

/// Level at which tier 3 words unlock
const TIER_THREE_LEVEL: u32 = 5;

/// XP needed to advance from `level` to `level + 1`
///
/// `floor(50 * 1.5^(level - 1))`; levels below 1 are treated as level 1.
/// Strictly increasing up to level 100; from level 101 on the cost no longer
/// fits in a `u64` and saturates at `u64::MAX`.
pub fn xp_for_level(level: u32) -> u64 {
    let exponent = i32::try_from(level.max(1) - 1).unwrap_or(i32::MAX);
    (BASE_LEVEL_XP * LEVEL_GROWTH.powi(exponent)).floor() as u64
}

/// Level reached with `total_xp`, and the cumulative xp at which it started
///
/// Walks the curve from level 1, adding each level's cost while the next
/// threshold does not exceed `total_xp`.
pub fn level_for_xp(total_xp: u64) -> (u32, u64) {
    let mut level = 1;
    let mut cumulative = 0u64;

    loop {
        match cumulative.checked_add(xp_for_level(level)) {
            Some(next) if next <= total_xp => {
                cumulative = next;
                level += 1;
            }
            _ => break,
        }
    }

    (level, cumulative)
}

/// Cumulative xp at which `level` begins
pub fn xp_to_reach_level(level: u32) -> u64 {
    (1..level.max(1))
        .map(xp_for_level)
        .fold(0u64, |acc, cost| acc.saturating_add(cost))
}

/// Highest vocabulary tier unlocked at `level`
pub fn max_tier_for_level(level: u32) -> Tier {
    if level >= TIER_THREE_LEVEL {
        Tier::Three
    } else if level >= TIER_TWO_LEVEL {
        Tier::Two
    } else {
        Tier::One
    }
}

/// Progress snapshot for stats display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub level: u32,
    pub total_xp: u64,
    /// XP earned since the current level began
    pub xp_into_level: u64,
    /// XP cost of the current level
    pub xp_for_next: u64,
    pub max_tier: Tier,
}

impl LevelProgress {
    pub fn from_xp(total_xp: u64) -> Self {
        let (level, level_start) = level_for_xp(total_xp);
        Self {
            level,
            total_xp,
            xp_into_level: total_xp - level_start,
            xp_for_next: xp_for_level(level),
            max_tier: max_tier_for_level(level),
        }
    }
}
