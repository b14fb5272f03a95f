//! Player progression
//!
//! Level is never stored: it is recomputed from cumulative experience, and
//! the level alone decides which vocabulary tiers an encounter may draw from.

pub mod leveling;

pub use leveling::{level_for_xp, max_tier_for_level, xp_for_level, xp_to_reach_level, LevelProgress};
