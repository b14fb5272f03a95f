pub mod config;
pub mod error;
pub mod types;

pub use config::GameConfig;
pub use error::{KotobaError, Result};
pub use types::{Tier, WordId};
