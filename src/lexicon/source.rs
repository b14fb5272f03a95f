//! Lexical source contract
//!
//! Schema detection and storage access belong to the source; the engine
//! only sees fixed-shape `RawEntry` tuples.

use crate::lexicon::record::RawEntry;

/// Kind of per-entry frequency value a source carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencyField {
    /// No frequency value at all
    #[default]
    None,
    /// Rank-like score where lower means more common
    Score,
    /// Raw frequency value where higher means more common
    Raw,
}

/// Supplier of raw vocabulary entries
pub trait LexicalSource {
    /// What the `frequency` column of every entry means
    fn frequency_field(&self) -> FrequencyField;

    fn entries(&self) -> Box<dyn Iterator<Item = RawEntry> + '_>;
}

/// Source backed by an in-memory list
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    field: FrequencyField,
    entries: Vec<RawEntry>,
}

impl MemorySource {
    pub fn new(field: FrequencyField) -> Self {
        Self {
            field,
            entries: Vec::new(),
        }
    }

    pub fn with_entries(field: FrequencyField, entries: Vec<RawEntry>) -> Self {
        Self { field, entries }
    }

    pub fn push(&mut self, entry: RawEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LexicalSource for MemorySource {
    fn frequency_field(&self) -> FrequencyField {
        self.field
    }

    fn entries(&self) -> Box<dyn Iterator<Item = RawEntry> + '_> {
        Box::new(self.entries.iter().cloned())
    }
}
