//! Vocabulary ingestion
//!
//! Raw entries flow source -> classifier -> pool. Everything downstream
//! works with classified `LexicalRecord`s only.

pub mod classifier;
pub mod frequency;
pub mod pool;
pub mod record;
pub mod source;
pub mod starter;

pub use classifier::{ClassificationPolicy, TierClassifier};
pub use frequency::FrequencyList;
pub use pool::{PoolStats, WordPool, WordRef};
pub use record::{LexicalRecord, RawEntry, MISSING_MEANING};
pub use source::{FrequencyField, LexicalSource, MemorySource};
pub use starter::starter_source;
