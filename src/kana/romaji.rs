//! Romaji to hiragana conversion
//!
//! Greedy longest-match over a syllable table, with the two context rules
//! a syllable table cannot express: doubled consonants become a small tsu,
//! and a bare `n` becomes ん when no syllable can follow it.

use ahash::AHashMap;

/// Longest key in `SYLLABLES`
const MAX_SYLLABLE_LEN: usize = 4;

const SMALL_TSU: &str = "っ";
const MORAIC_N: &str = "ん";

/// Hepburn and Kunrei spellings, plus x/l prefixed small kana
const SYLLABLES: &[(&str, &str)] = &[
    ("a", "あ"), ("i", "い"), ("u", "う"), ("e", "え"), ("o", "お"),
    ("ka", "か"), ("ki", "き"), ("ku", "く"), ("ke", "け"), ("ko", "こ"),
    ("kya", "きゃ"), ("kyu", "きゅ"), ("kyo", "きょ"),
    ("ga", "が"), ("gi", "ぎ"), ("gu", "ぐ"), ("ge", "げ"), ("go", "ご"),
    ("gya", "ぎゃ"), ("gyu", "ぎゅ"), ("gyo", "ぎょ"),
    ("sa", "さ"), ("si", "し"), ("shi", "し"), ("su", "す"), ("se", "せ"), ("so", "そ"),
    ("sha", "しゃ"), ("shu", "しゅ"), ("sho", "しょ"), ("she", "しぇ"),
    ("sya", "しゃ"), ("syu", "しゅ"), ("syo", "しょ"),
    ("za", "ざ"), ("zi", "じ"), ("ji", "じ"), ("zu", "ず"), ("ze", "ぜ"), ("zo", "ぞ"),
    ("ja", "じゃ"), ("ju", "じゅ"), ("jo", "じょ"), ("je", "じぇ"),
    ("jya", "じゃ"), ("jyu", "じゅ"), ("jyo", "じょ"),
    ("zya", "じゃ"), ("zyu", "じゅ"), ("zyo", "じょ"),
    ("ta", "た"), ("ti", "ち"), ("chi", "ち"), ("tu", "つ"), ("tsu", "つ"), ("te", "て"), ("to", "と"),
    ("cha", "ちゃ"), ("chu", "ちゅ"), ("cho", "ちょ"), ("che", "ちぇ"),
    ("tya", "ちゃ"), ("tyu", "ちゅ"), ("tyo", "ちょ"),
    ("da", "だ"), ("di", "ぢ"), ("du", "づ"), ("de", "で"), ("do", "ど"),
    ("dya", "ぢゃ"), ("dyu", "ぢゅ"), ("dyo", "ぢょ"),
    ("na", "な"), ("ni", "に"), ("nu", "ぬ"), ("ne", "ね"), ("no", "の"),
    ("nya", "にゃ"), ("nyu", "にゅ"), ("nyo", "にょ"),
    ("ha", "は"), ("hi", "ひ"), ("hu", "ふ"), ("fu", "ふ"), ("he", "へ"), ("ho", "ほ"),
    ("hya", "ひゃ"), ("hyu", "ひゅ"), ("hyo", "ひょ"),
    ("fa", "ふぁ"), ("fi", "ふぃ"), ("fe", "ふぇ"), ("fo", "ふぉ"),
    ("ba", "ば"), ("bi", "び"), ("bu", "ぶ"), ("be", "べ"), ("bo", "ぼ"),
    ("bya", "びゃ"), ("byu", "びゅ"), ("byo", "びょ"),
    ("pa", "ぱ"), ("pi", "ぴ"), ("pu", "ぷ"), ("pe", "ぺ"), ("po", "ぽ"),
    ("pya", "ぴゃ"), ("pyu", "ぴゅ"), ("pyo", "ぴょ"),
    ("ma", "ま"), ("mi", "み"), ("mu", "む"), ("me", "め"), ("mo", "も"),
    ("mya", "みゃ"), ("myu", "みゅ"), ("myo", "みょ"),
    ("ya", "や"), ("yu", "ゆ"), ("yo", "よ"),
    ("ra", "ら"), ("ri", "り"), ("ru", "る"), ("re", "れ"), ("ro", "ろ"),
    ("rya", "りゃ"), ("ryu", "りゅ"), ("ryo", "りょ"),
    ("wa", "わ"), ("wi", "うぃ"), ("we", "うぇ"), ("wo", "を"),
    ("vu", "ゔ"),
    ("xa", "ぁ"), ("xi", "ぃ"), ("xu", "ぅ"), ("xe", "ぇ"), ("xo", "ぉ"),
    ("la", "ぁ"), ("li", "ぃ"), ("lu", "ぅ"), ("le", "ぇ"), ("lo", "ぉ"),
    ("xya", "ゃ"), ("xyu", "ゅ"), ("xyo", "ょ"),
    ("lya", "ゃ"), ("lyu", "ゅ"), ("lyo", "ょ"),
    ("xtu", "っ"), ("ltu", "っ"), ("xtsu", "っ"), ("ltsu", "っ"),
    ("-", "ー"),
];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Syllable lookup table, built once per transliterator
#[derive(Debug, Clone)]
pub struct RomajiTable {
    syllables: AHashMap<&'static str, &'static str>,
}

impl Default for RomajiTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RomajiTable {
    pub fn new() -> Self {
        Self {
            syllables: SYLLABLES.iter().copied().collect(),
        }
    }

    /// Converts typed romaji to hiragana
    ///
    /// Characters that start no syllable (digits, punctuation, kana typed
    /// directly, a trailing half-typed consonant) pass through unchanged.
    pub fn to_hiragana(&self, roman: &str) -> String {
        let chars: Vec<char> = roman.chars().flat_map(char::to_lowercase).collect();
        let mut result = String::with_capacity(roman.len() * 3);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();

            if c == 'n' {
                match next {
                    Some('\'') => {
                        result.push_str(MORAIC_N);
                        i += 2;
                        continue;
                    }
                    Some('n') => {
                        // "nn" before a vowel is ん + the next syllable ("konnichi")
                        let after = chars.get(i + 2).copied();
                        let consumed = if after.is_some_and(|a| is_vowel(a) || a == 'y') { 1 } else { 2 };
                        result.push_str(MORAIC_N);
                        i += consumed;
                        continue;
                    }
                    Some(n) if is_vowel(n) || n == 'y' => {}
                    _ => {
                        result.push_str(MORAIC_N);
                        i += 1;
                        continue;
                    }
                }
            }

            // Sokuon: "kk", "tt", "ss"... and "tch" as in "matcha"
            if c.is_ascii_alphabetic() && !is_vowel(c) {
                let doubled = next == Some(c);
                let tch = c == 't' && next == Some('c') && chars.get(i + 2) == Some(&'h');
                if doubled || tch {
                    result.push_str(SMALL_TSU);
                    i += 1;
                    continue;
                }
            }

            match self.longest_match(&chars[i..]) {
                Some((kana, len)) => {
                    result.push_str(kana);
                    i += len;
                }
                None => {
                    result.push(c);
                    i += 1;
                }
            }
        }

        result
    }

    fn longest_match(&self, rest: &[char]) -> Option<(&'static str, usize)> {
        let max = rest.len().min(MAX_SYLLABLE_LEN);
        let mut key = String::with_capacity(max);
        (1..=max).rev().find_map(|len| {
            key.clear();
            key.extend(&rest[..len]);
            self.syllables.get(key.as_str()).map(|kana| (*kana, len))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hira(s: &str) -> String {
        RomajiTable::new().to_hiragana(s)
    }

    #[test]
    fn test_basic_syllables() {
        assert_eq!(hira("neko"), "ねこ");
        assert_eq!(hira("inu"), "いぬ");
        assert_eq!(hira("sakura"), "さくら");
    }

    #[test]
    fn test_hepburn_and_kunrei_agree() {
        assert_eq!(hira("shi"), hira("si"));
        assert_eq!(hira("chi"), hira("ti"));
        assert_eq!(hira("tsu"), hira("tu"));
        assert_eq!(hira("fu"), hira("hu"));
        assert_eq!(hira("ji"), hira("zi"));
    }

    #[test]
    fn test_digraphs() {
        assert_eq!(hira("kyou"), "きょう");
        assert_eq!(hira("densha"), "でんしゃ");
        assert_eq!(hira("ryokou"), "りょこう");
    }

    #[test]
    fn test_sokuon() {
        assert_eq!(hira("gakkou"), "がっこう");
        assert_eq!(hira("kitte"), "きって");
        assert_eq!(hira("matcha"), "まっちゃ");
    }

    #[test]
    fn test_moraic_n() {
        assert_eq!(hira("hon"), "ほん");
        assert_eq!(hira("konnichiha"), "こんにちは");
        assert_eq!(hira("konban"), "こんばん");
        assert_eq!(hira("kin'en"), "きんえん");
        assert_eq!(hira("kinen"), "きねん");
        assert_eq!(hira("hannnou"), "はんのう");
    }

    #[test]
    fn test_uppercase_input() {
        assert_eq!(hira("NEKO"), "ねこ");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(hira("ねこ"), "ねこ");
        assert_eq!(hira("nek"), "ねk");
        assert_eq!(hira(""), "");
    }

    #[test]
    fn test_long_vowel_mark() {
        assert_eq!(hira("ra-men"), "らーめん");
    }
}
