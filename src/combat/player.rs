//! Player state
//!
//! Level is not a field: it is always derived from `xp` through the
//! progression curve, so it can never drift out of sync.

use serde::{Deserialize, Serialize};

use crate::progression::{level_for_xp, LevelProgress};

/// Map position, owned by the host's overworld
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: GridPos,
    hp: i32,
    max_hp: i32,
    xp: u64,
    streak: u32,
}

impl Player {
    pub fn new(max_hp: i32) -> Self {
        Self {
            position: GridPos::default(),
            hp: max_hp,
            max_hp,
            xp: 0,
            streak: 0,
        }
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    pub fn xp(&self) -> u64 {
        self.xp
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn level(&self) -> u32 {
        level_for_xp(self.xp).0
    }

    pub fn progress(&self) -> LevelProgress {
        LevelProgress::from_xp(self.xp)
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount.max(0);
    }

    /// Restore hp up to `max_hp`, returning the amount actually restored
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount.max(0)).min(self.max_hp).max(before);
        self.hp - before
    }

    /// XP only ever grows
    pub fn gain_xp(&mut self, amount: u64) {
        self.xp = self.xp.saturating_add(amount);
    }

    /// Count a correct answer, returning the streak before it
    pub fn extend_streak(&mut self) -> u32 {
        let before = self.streak;
        self.streak += 1;
        before
    }

    pub fn reset_streak(&mut self) {
        self.streak = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_fresh() {
        let player = Player::new(30);
        assert_eq!(player.hp(), 30);
        assert_eq!(player.max_hp(), 30);
        assert_eq!(player.level(), 1);
        assert_eq!(player.streak(), 0);
    }

    #[test]
    fn test_level_follows_xp() {
        let mut player = Player::new(30);
        player.gain_xp(50);
        assert_eq!(player.level(), 2);
        player.gain_xp(74);
        assert_eq!(player.level(), 2);
        player.gain_xp(1);
        assert_eq!(player.level(), 3);
    }

    #[test]
    fn test_heal_is_capped() {
        let mut player = Player::new(30);
        player.take_damage(5);
        assert_eq!(player.heal(10), 5);
        assert_eq!(player.hp(), 30);
    }

    #[test]
    fn test_heal_from_negative_hp() {
        let mut player = Player::new(30);
        player.take_damage(33);
        assert_eq!(player.heal(10), 10);
        assert_eq!(player.hp(), 7);
    }

    #[test]
    fn test_defeat_at_zero() {
        let mut player = Player::new(3);
        player.take_damage(3);
        assert!(player.is_defeated());
    }

    #[test]
    fn test_streak() {
        let mut player = Player::new(30);
        assert_eq!(player.extend_streak(), 0);
        assert_eq!(player.extend_streak(), 1);
        assert_eq!(player.streak(), 2);
        player.reset_streak();
        assert_eq!(player.streak(), 0);
    }
}
