//! Battle session state machine
//!
//! Idle -> EncounterStart -> PresentingWord -> AwaitingAnswer -> Feedback
//! -> {PresentingWord | EncounterResolved -> Idle | Defeat}
//!
//! Every call runs to completion before the next is accepted; the session
//! owns all mutable battle state, so hosts only need to call it sequentially.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::view::{BattleView, EnemyView, PlayerView};
use crate::combat::{apply_verdict, create_enemy, validate_answer, AnswerOutcome, Enemy, GridPos, Player};
use crate::core::config::GameConfig;
use crate::core::error::{KotobaError, Result};
use crate::core::types::{Tier, WordId};
use crate::kana::Transliterator;
use crate::lexicon::{WordPool, WordRef};
use crate::progression::max_tier_for_level;

/// Battle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BattlePhase {
    #[default]
    Idle,
    EncounterStart,
    PresentingWord,
    AwaitingAnswer,
    Feedback,
    EncounterResolved,
    Defeat, // terminal
}

impl BattlePhase {
    /// An enemy exists in these phases
    pub fn in_encounter(&self) -> bool {
        matches!(
            self,
            BattlePhase::EncounterStart
                | BattlePhase::PresentingWord
                | BattlePhase::AwaitingAnswer
                | BattlePhase::Feedback
        )
    }
}

/// Word shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPrompt {
    pub word: WordId,
    pub surface: String,
    pub enemy_hp: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub from: u32,
    pub to: u32,
    pub max_tier: Tier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefeatReport {
    pub level: u32,
    pub xp: u64,
}

/// Result of leaving the Feedback phase
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Enemy still standing; `replenished` is set when its word list had
    /// run dry and was refilled from the encounter's sample
    NextWord { word: WordRef, replenished: bool },
    EncounterResolved { xp_gained: u64, level_up: Option<LevelUp> },
    Defeat(DefeatReport),
}

pub struct BattleSession<'a, T: Transliterator + ?Sized, R: Rng> {
    pool: &'a WordPool,
    transliterator: &'a T,
    config: &'a GameConfig,
    rng: R,
    player: Player,
    phase: BattlePhase,
    enemy: Option<Enemy>,
    current_word: Option<WordRef>,
    last_outcome: Option<AnswerOutcome>,
}

impl<'a, T: Transliterator + ?Sized, R: Rng> BattleSession<'a, T, R> {
    pub fn new(pool: &'a WordPool, transliterator: &'a T, config: &'a GameConfig, rng: R) -> Self {
        Self {
            pool,
            transliterator,
            config,
            rng,
            player: Player::new(config.player.max_hp),
            phase: BattlePhase::Idle,
            enemy: None,
            current_word: None,
            last_outcome: None,
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref()
    }

    pub fn current_word(&self) -> Option<&WordRef> {
        self.current_word.as_ref()
    }

    pub fn last_outcome(&self) -> Option<&AnswerOutcome> {
        self.last_outcome.as_ref()
    }

    fn expect_phase(&self, expected: BattlePhase, action: &'static str) -> Result<()> {
        if self.phase == BattlePhase::Defeat {
            return Err(KotobaError::SessionOver);
        }
        if self.phase != expected {
            return Err(KotobaError::InvalidTransition {
                phase: self.phase,
                action,
            });
        }
        Ok(())
    }

    /// Generate an enemy and draw its first word
    pub fn start_encounter(&mut self) -> Result<WordRef> {
        self.expect_phase(BattlePhase::Idle, "start an encounter")?;
        self.phase = BattlePhase::EncounterStart;

        let enemy = match create_enemy(self.pool, self.player.level(), &self.config.encounter, &mut self.rng) {
            Ok(enemy) => enemy,
            Err(e) => {
                self.phase = BattlePhase::Idle;
                return Err(e);
            }
        };

        let Some(first) = enemy.pick_word(&mut self.rng) else {
            self.phase = BattlePhase::Idle;
            return Err(KotobaError::NoVocabulary);
        };

        self.player.reset_streak();
        self.last_outcome = None;
        self.enemy = Some(enemy);
        self.current_word = Some(first.clone());
        self.phase = BattlePhase::PresentingWord;
        Ok(first)
    }

    /// Show the current word and start waiting for an answer
    pub fn present_word(&mut self) -> Result<WordPrompt> {
        self.expect_phase(BattlePhase::PresentingWord, "present a word")?;
        let (Some(word), Some(enemy)) = (&self.current_word, &self.enemy) else {
            return Err(KotobaError::InvalidTransition {
                phase: self.phase,
                action: "present a word",
            });
        };

        let prompt = WordPrompt {
            word: word.id(),
            surface: word.surface().to_string(),
            enemy_hp: enemy.hp(),
        };
        self.phase = BattlePhase::AwaitingAnswer;
        Ok(prompt)
    }

    /// Candidate the player's keystrokes currently spell
    pub fn preview(&self, input: &str) -> String {
        self.transliterator.romanize_candidate(input)
    }

    /// Validate a submitted answer and apply its effects
    pub fn submit(&mut self, input: &str) -> Result<AnswerOutcome> {
        self.expect_phase(BattlePhase::AwaitingAnswer, "submit an answer")?;
        let (Some(word), Some(enemy)) = (&self.current_word, &mut self.enemy) else {
            return Err(KotobaError::InvalidTransition {
                phase: self.phase,
                action: "submit an answer",
            });
        };

        let verdict = validate_answer(word, input, self.transliterator);
        let outcome = apply_verdict(verdict, &mut self.player, enemy);

        self.last_outcome = Some(outcome.clone());
        self.phase = BattlePhase::Feedback;
        Ok(outcome)
    }

    /// Leave Feedback: defeat, victory, or the next word
    pub fn advance(&mut self) -> Result<Transition> {
        self.expect_phase(BattlePhase::Feedback, "advance past feedback")?;

        if self.player.is_defeated() {
            let report = DefeatReport {
                level: self.player.level(),
                xp: self.player.xp(),
            };
            tracing::info!("Player defeated at level {} with {} xp", report.level, report.xp);
            self.enemy = None;
            self.current_word = None;
            self.phase = BattlePhase::Defeat;
            return Ok(Transition::Defeat(report));
        }

        let Some(enemy) = self.enemy.as_mut() else {
            return Err(KotobaError::InvalidTransition {
                phase: self.phase,
                action: "advance past feedback",
            });
        };

        if enemy.is_defeated() {
            self.phase = BattlePhase::EncounterResolved;
            let xp_gained = enemy.xp_reward();
            let old_level = self.player.level();
            self.player.gain_xp(xp_gained);
            let new_level = self.player.level();

            let level_up = (new_level > old_level).then(|| LevelUp {
                from: old_level,
                to: new_level,
                max_tier: max_tier_for_level(new_level),
            });
            if let Some(up) = &level_up {
                tracing::info!("Level up: {} -> {} (max tier {})", up.from, up.to, up.max_tier);
            }

            self.enemy = None;
            self.current_word = None;
            self.phase = BattlePhase::Idle;
            return Ok(Transition::EncounterResolved { xp_gained, level_up });
        }

        let replenished = enemy.remaining_words().is_empty();
        if replenished {
            tracing::debug!("Enemy vocabulary exhausted at {} hp, replenishing", enemy.hp());
            enemy.replenish();
        }

        let Some(word) = enemy.pick_word(&mut self.rng) else {
            return Err(KotobaError::NoVocabulary);
        };
        self.current_word = Some(word.clone());
        self.phase = BattlePhase::PresentingWord;
        Ok(Transition::NextWord { word, replenished })
    }

    /// Drop the current enemy without reward
    pub fn abort_encounter(&mut self) -> Result<()> {
        if self.phase == BattlePhase::Defeat {
            return Err(KotobaError::SessionOver);
        }
        if !self.phase.in_encounter() {
            return Err(KotobaError::InvalidTransition {
                phase: self.phase,
                action: "abort an encounter",
            });
        }
        self.enemy = None;
        self.current_word = None;
        self.player.reset_streak();
        self.phase = BattlePhase::Idle;
        Ok(())
    }

    /// Apply the configured heal between encounters; returns hp restored
    pub fn heal(&mut self) -> Result<i32> {
        self.expect_phase(BattlePhase::Idle, "heal")?;
        Ok(self.player.heal(self.config.player.heal_amount))
    }

    pub fn move_player(&mut self, position: GridPos) {
        self.player.position = position;
    }

    /// Structured snapshot for the presentation layer
    pub fn view(&self) -> BattleView {
        BattleView {
            phase: self.phase,
            player: PlayerView {
                hp: self.player.hp(),
                max_hp: self.player.max_hp(),
                streak: self.player.streak(),
                position: self.player.position,
                progress: self.player.progress(),
            },
            active_word: self
                .current_word
                .as_ref()
                .filter(|_| self.phase.in_encounter())
                .map(|w| w.surface().to_string()),
            enemy: self.enemy.as_ref().map(|e| EnemyView {
                hp: e.hp(),
                tier: e.tier().value(),
                damage: e.damage(),
                remaining_words: e.remaining_words().len(),
            }),
            last_outcome: self.last_outcome.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::IngestionConfig;
    use crate::kana::KanaTransliterator;
    use crate::lexicon::{FrequencyField, MemorySource, RawEntry};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn cat_pool() -> WordPool {
        let src = MemorySource::with_entries(
            FrequencyField::None,
            vec![RawEntry::new("猫", &["ねこ"], "cat")],
        );
        WordPool::build(&src, None, &IngestionConfig::default())
    }

    #[test]
    fn test_submit_before_present_is_rejected() {
        let pool = cat_pool();
        let t = KanaTransliterator::new();
        let config = GameConfig::default();
        let mut session = BattleSession::new(&pool, &t, &config, ChaCha8Rng::seed_from_u64(1));

        assert!(matches!(
            session.submit("neko"),
            Err(KotobaError::InvalidTransition { phase: BattlePhase::Idle, .. })
        ));
        session.start_encounter().unwrap();
        assert!(matches!(
            session.submit("neko"),
            Err(KotobaError::InvalidTransition { phase: BattlePhase::PresentingWord, .. })
        ));
    }

    #[test]
    fn test_single_word_enemy_is_replenished() {
        let pool = cat_pool();
        let t = KanaTransliterator::new();
        let config = GameConfig::default();
        let mut session = BattleSession::new(&pool, &t, &config, ChaCha8Rng::seed_from_u64(1));

        session.start_encounter().unwrap();
        session.present_word().unwrap();
        let outcome = session.submit("neko").unwrap();
        assert!(outcome.verdict.correct);
        assert_eq!(session.enemy().unwrap().remaining_words().len(), 0);

        match session.advance().unwrap() {
            Transition::NextWord { word, replenished } => {
                assert!(replenished);
                assert_eq!(word.surface(), "猫");
            }
            other => panic!("expected next word, got {:?}", other),
        }
        assert_eq!(session.phase(), BattlePhase::PresentingWord);
    }

    #[test]
    fn test_abort_returns_to_idle() {
        let pool = cat_pool();
        let t = KanaTransliterator::new();
        let config = GameConfig::default();
        let mut session = BattleSession::new(&pool, &t, &config, ChaCha8Rng::seed_from_u64(1));

        assert!(session.abort_encounter().is_err());
        session.start_encounter().unwrap();
        session.present_word().unwrap();
        session.submit("neko").unwrap();
        session.abort_encounter().unwrap();

        assert_eq!(session.phase(), BattlePhase::Idle);
        assert!(session.enemy().is_none());
        assert_eq!(session.player().streak(), 0);
    }

    #[test]
    fn test_heal_only_when_idle() {
        let pool = cat_pool();
        let t = KanaTransliterator::new();
        let config = GameConfig::default();
        let mut session = BattleSession::new(&pool, &t, &config, ChaCha8Rng::seed_from_u64(1));

        assert_eq!(session.heal().unwrap(), 0);
        session.start_encounter().unwrap();
        assert!(session.heal().is_err());
    }

    #[test]
    fn test_empty_pool_leaves_session_idle() {
        let pool = WordPool::build(
            &MemorySource::new(FrequencyField::None),
            None,
            &IngestionConfig::default(),
        );
        let t = KanaTransliterator::new();
        let config = GameConfig::default();
        let mut session = BattleSession::new(&pool, &t, &config, ChaCha8Rng::seed_from_u64(1));

        assert!(matches!(session.start_encounter(), Err(KotobaError::NoVocabulary)));
        assert_eq!(session.phase(), BattlePhase::Idle);
    }

    #[test]
    fn test_preview_does_not_change_state() {
        let pool = cat_pool();
        let t = KanaTransliterator::new();
        let config = GameConfig::default();
        let session = BattleSession::new(&pool, &t, &config, ChaCha8Rng::seed_from_u64(1));
        assert_eq!(session.preview("nek"), "ねk");
        assert_eq!(session.phase(), BattlePhase::Idle);
    }
}
