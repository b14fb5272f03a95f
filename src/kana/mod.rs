//! Transliteration service
//!
//! The battle layer never sees raw keystrokes: typed romaji is converted to
//! a kana candidate, and both candidate and accepted readings are folded to
//! one canonical script before comparison.

pub mod normalize;
pub mod romaji;

pub use normalize::to_canonical;
pub use romaji::RomajiTable;

/// Contract consumed by the answer validator
///
/// Both operations are total: they return an empty string rather than fail.
pub trait Transliterator {
    /// Converts romanized keystrokes to a phonetic candidate
    fn romanize_candidate(&self, text: &str) -> String;

    /// Folds arbitrary script text to the canonical comparison form
    fn normalize(&self, text: &str) -> String;
}

/// Japanese kana transliterator
///
/// Constructed once at startup and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct KanaTransliterator {
    table: RomajiTable,
}

impl KanaTransliterator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transliterator for KanaTransliterator {
    fn romanize_candidate(&self, text: &str) -> String {
        self.table.to_hiragana(text.trim())
    }

    fn normalize(&self, text: &str) -> String {
        to_canonical(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_romanized_candidate_matches_kana_reading() {
        let t = KanaTransliterator::new();
        let candidate = t.normalize(&t.romanize_candidate("neko"));
        assert_eq!(candidate, t.normalize("ねこ"));
        assert_eq!(candidate, t.normalize("ネコ"));
    }

    #[test]
    fn test_candidate_is_trimmed() {
        let t = KanaTransliterator::new();
        assert_eq!(t.romanize_candidate("  inu \n"), "いぬ");
    }

    #[test]
    fn test_empty_input_is_empty() {
        let t = KanaTransliterator::new();
        assert_eq!(t.romanize_candidate(""), "");
        assert_eq!(t.normalize(""), "");
    }
}
