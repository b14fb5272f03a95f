//! Lexical entries before and after classification

use serde::{Deserialize, Serialize};

use crate::core::error::KotobaError;
use crate::core::types::{Tier, WordId};

/// Gloss used when a source supplies no meaning
pub const MISSING_MEANING: &str = "Meaning not found";

/// Raw tuple as produced by a lexical source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    pub surface: String,
    pub readings: Vec<String>,
    pub meaning: String,
    pub frequency: Option<f64>,
}

impl RawEntry {
    pub fn new(surface: impl Into<String>, readings: &[&str], meaning: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            readings: readings.iter().map(|r| r.to_string()).collect(),
            meaning: meaning.into(),
            frequency: None,
        }
    }

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = Some(frequency);
        self
    }
}

/// Classified, immutable vocabulary entry
///
/// `readings` is never empty; the first reading is the one shown as the
/// correct answer in feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordFields")]
pub struct LexicalRecord {
    id: WordId,
    surface: String,
    readings: Vec<String>,
    meaning: String,
    tier: Tier,
}

/// Unchecked wire shape of a `LexicalRecord`
#[derive(Deserialize)]
struct RecordFields {
    id: WordId,
    surface: String,
    readings: Vec<String>,
    meaning: String,
    tier: Tier,
}

impl TryFrom<RecordFields> for LexicalRecord {
    type Error = KotobaError;

    fn try_from(fields: RecordFields) -> Result<Self, Self::Error> {
        LexicalRecord::new(
            fields.id,
            fields.surface,
            clean_readings(&fields.readings),
            fields.meaning,
            fields.tier,
        )
        .ok_or_else(|| KotobaError::InvalidRecord("readings must not be empty".into()))
    }
}

impl LexicalRecord {
    /// Returns `None` when no non-blank reading remains
    pub(crate) fn new(
        id: WordId,
        surface: String,
        readings: Vec<String>,
        meaning: String,
        tier: Tier,
    ) -> Option<Self> {
        if readings.is_empty() {
            return None;
        }
        Some(Self {
            id,
            surface,
            readings,
            meaning,
            tier,
        })
    }

    pub fn id(&self) -> WordId {
        self.id
    }

    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn readings(&self) -> &[String] {
        &self.readings
    }

    /// Reading shown as the correct answer, or the surface if none exists
    pub fn best_reading(&self) -> &str {
        self.readings.first().map_or(self.surface.as_str(), String::as_str)
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }
}

/// Trims readings, drops blanks and duplicates, keeps first-seen order
pub(crate) fn clean_readings(readings: &[String]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(readings.len());
    for reading in readings {
        let reading = reading.trim();
        if !reading.is_empty() && !cleaned.iter().any(|r| r == reading) {
            cleaned.push(reading.to_string());
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_requires_a_reading() {
        let record = LexicalRecord::new(
            WordId(0),
            "猫".into(),
            Vec::new(),
            "cat".into(),
            Tier::One,
        );
        assert!(record.is_none());
    }

    #[test]
    fn test_best_reading_is_first() {
        let record = LexicalRecord::new(
            WordId(0),
            "今日".into(),
            vec!["きょう".into(), "こんにち".into()],
            "today".into(),
            Tier::One,
        )
        .unwrap();
        assert_eq!(record.best_reading(), "きょう");
    }

    #[test]
    fn test_deserialize_rejects_empty_readings() {
        let json = r#"{"id":0,"surface":"猫","readings":[],"meaning":"cat","tier":"One"}"#;
        assert!(serde_json::from_str::<LexicalRecord>(json).is_err());

        let blank = r#"{"id":0,"surface":"猫","readings":["  "],"meaning":"cat","tier":"One"}"#;
        assert!(serde_json::from_str::<LexicalRecord>(blank).is_err());
    }

    #[test]
    fn test_serde_round_trip_keeps_record() {
        let record = LexicalRecord::new(
            WordId(3),
            "猫".into(),
            vec!["ねこ".into()],
            "cat".into(),
            Tier::One,
        )
        .unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(serde_json::from_str::<LexicalRecord>(&json).unwrap(), record);
    }

    #[test]
    fn test_clean_readings() {
        let raw: Vec<String> = vec![" ねこ ".into(), "".into(), "ねこ".into(), "  ".into(), "ネコ".into()];
        assert_eq!(clean_readings(&raw), vec!["ねこ".to_string(), "ネコ".to_string()]);
    }

    #[test]
    fn test_raw_entry_builder() {
        let entry = RawEntry::new("水", &["みず"], "water").with_frequency(4.2);
        assert_eq!(entry.readings, vec!["みず".to_string()]);
        assert_eq!(entry.frequency, Some(4.2));
    }
}
