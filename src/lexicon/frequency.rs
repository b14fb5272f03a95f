//! External word frequency list
//!
//! Two-column delimited text: `word,score` or `word<TAB>score`. Comment
//! lines (`#`) and malformed lines are skipped without failing the load.

use ahash::AHashMap;
use std::path::Path;

use crate::core::error::Result;

/// Word -> frequency score (higher = more common)
#[derive(Debug, Clone, Default)]
pub struct FrequencyList {
    scores: AHashMap<String, f64>,
}

impl FrequencyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: impl Into<String>, score: f64) {
        self.scores.insert(word.into(), score);
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Parse list text, returning the list and the number of skipped lines
    pub fn parse(content: &str) -> (Self, usize) {
        let mut list = Self::new();
        let mut skipped = 0;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_line(line) {
                Some((word, score)) => list.insert(word, score),
                None => skipped += 1,
            }
        }

        (list, skipped)
    }

    /// Read and parse a list file
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let (list, skipped) = Self::parse(&content);
        if skipped > 0 {
            tracing::warn!("Skipped {} malformed lines in {}", skipped, path.display());
        }
        tracing::info!("Loaded {} word frequencies from {}", list.len(), path.display());
        Ok(list)
    }

    /// Like `try_load`, but an unreadable file degrades to an empty list
    pub fn load_or_empty(path: &Path) -> Self {
        Self::try_load(path).unwrap_or_else(|e| {
            tracing::warn!("Could not load frequency list {}: {}", path.display(), e);
            Self::new()
        })
    }
}

fn parse_line(line: &str) -> Option<(&str, f64)> {
    let mut parts = if line.contains(',') {
        line.split(',')
    } else {
        line.split('\t')
    };
    let word = parts.next()?.trim();
    let score: f64 = parts.next()?.trim().parse().ok()?;
    if word.is_empty() || !score.is_finite() {
        return None;
    }
    Some((word, score))
}
