//! Battle flow - one encounter at a time, driven by typed answers

pub mod session;
pub mod view;

pub use session::{BattlePhase, BattleSession, DefeatReport, LevelUp, Transition, WordPrompt};
pub use view::{BattleView, EnemyView, PlayerView};
