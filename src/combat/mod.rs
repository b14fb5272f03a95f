//! Combat rules
//!
//! Who fights (player, enemy), how an enemy is generated from the word pool,
//! and how a typed answer turns into damage.

pub mod answer;
pub mod encounter;
pub mod enemy;
pub mod player;

pub use answer::{answer_damage, apply_verdict, validate_answer, AnswerOutcome, Verdict};
pub use encounter::{choose_tier, create_enemy, resolve_bucket};
pub use enemy::{Enemy, EnemyStats};
pub use player::{GridPos, Player};
