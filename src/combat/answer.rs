//! Answer validation
//!
//! A wrong answer is an ordinary outcome, not an error: validation always
//! returns a verdict carrying the expected reading and meaning for feedback.

use serde::{Deserialize, Serialize};

use crate::combat::enemy::Enemy;
use crate::combat::player::Player;
use crate::core::types::WordId;
use crate::kana::Transliterator;
use crate::lexicon::LexicalRecord;

/// Damage of a correct answer with no streak
const BASE_ANSWER_DAMAGE: i32 = 2;

/// Comparison result for one typed answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub word: WordId,
    pub correct: bool,
    /// Normalized candidate that was compared
    pub candidate: String,
    /// Accepted reading the candidate matched, if any
    pub matched_reading: Option<String>,
    /// First accepted reading, shown as the answer
    pub best_reading: String,
    pub meaning: String,
}

/// Verdict plus the side effects it had on the fight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub verdict: Verdict,
    pub damage_dealt: i32,
    pub damage_taken: i32,
    pub streak: u32,
    pub player_hp: i32,
    pub enemy_hp: i32,
}

/// Damage of a correct answer given the streak before it
pub fn answer_damage(streak_before: u32) -> i32 {
    BASE_ANSWER_DAMAGE.saturating_add(i32::try_from(streak_before).unwrap_or(i32::MAX))
}

/// Compare typed input against every accepted reading of `record`
///
/// Both sides are folded to canonical script, so the readings behave as one
/// answer class: any member matches.
pub fn validate_answer<T: Transliterator + ?Sized>(
    record: &LexicalRecord,
    raw_input: &str,
    transliterator: &T,
) -> Verdict {
    let candidate = transliterator.normalize(&transliterator.romanize_candidate(raw_input));

    let matched_reading = if candidate.is_empty() {
        None
    } else {
        record
            .readings()
            .iter()
            .find(|reading| transliterator.normalize(reading) == candidate)
            .cloned()
    };

    Verdict {
        word: record.id(),
        correct: matched_reading.is_some(),
        candidate,
        matched_reading,
        best_reading: record.best_reading().to_string(),
        meaning: record.meaning().to_string(),
    }
}

/// Apply a verdict to both combatants
///
/// Correct: the enemy takes `2 + streak` damage, the streak grows and the
/// word leaves the enemy's rotation. Incorrect: the player takes the enemy's
/// damage and the streak resets.
pub fn apply_verdict(verdict: Verdict, player: &mut Player, enemy: &mut Enemy) -> AnswerOutcome {
    let (damage_dealt, damage_taken) = if verdict.correct {
        let damage = answer_damage(player.extend_streak());
        enemy.take_damage(damage);
        enemy.remove_word(verdict.word);
        (damage, 0)
    } else {
        player.take_damage(enemy.damage());
        player.reset_streak();
        (0, enemy.damage())
    };

    AnswerOutcome {
        verdict,
        damage_dealt,
        damage_taken,
        streak: player.streak(),
        player_hp: player.hp(),
        enemy_hp: enemy.hp(),
    }
}
