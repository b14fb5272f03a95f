use thiserror::Error;

use crate::battle::BattlePhase;

#[derive(Error, Debug)]
pub enum KotobaError {
    #[error("No vocabulary available to build an encounter")]
    NoVocabulary,

    #[error("Cannot {action} while in phase {phase:?}")]
    InvalidTransition {
        phase: BattlePhase,
        action: &'static str,
    },

    #[error("Session is over: the player was defeated")]
    SessionOver,

    #[error("Invalid lexical record: {0}")]
    InvalidRecord(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, KotobaError>;
