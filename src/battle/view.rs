//! Presentation snapshot
//!
//! Plain data for whatever display surface the host uses. Nothing here is
//! formatted for a particular screen.

use serde::{Deserialize, Serialize};

use crate::battle::session::BattlePhase;
use crate::combat::{AnswerOutcome, GridPos};
use crate::progression::LevelProgress;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub hp: i32,
    pub max_hp: i32,
    pub streak: u32,
    pub position: GridPos,
    pub progress: LevelProgress,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub hp: i32,
    pub tier: u8,
    pub damage: i32,
    pub remaining_words: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleView {
    pub phase: BattlePhase,
    pub player: PlayerView,
    /// Surface of the word being asked, while an encounter is running
    pub active_word: Option<String>,
    pub enemy: Option<EnemyView>,
    /// Feedback for the most recent answer in this encounter
    pub last_outcome: Option<AnswerOutcome>,
}
