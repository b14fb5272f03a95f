//! Script normalization to the canonical hiragana form
//!
//! Folds full-width ASCII, half-width katakana, full-width katakana and
//! detached voicing marks so that every spelling of a reading compares equal.

const KATAKANA_START: u32 = 0x30A1; // ァ
const KATAKANA_END: u32 = 0x30F6; // ヶ
const KATAKANA_TO_HIRAGANA: u32 = 0x60;

const FULLWIDTH_ASCII_START: u32 = 0xFF01;
const FULLWIDTH_ASCII_END: u32 = 0xFF5E;
const FULLWIDTH_TO_ASCII: u32 = 0xFEE0;

const HALFWIDTH_KATAKANA_START: u32 = 0xFF66;

/// Full-width katakana for U+FF66..=U+FF9D, in code point order
const HALFWIDTH_KATAKANA: &str =
    "ヲァィゥェォャュョッーアイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワン";

const HIRAGANA_U: char = 'う';
const HIRAGANA_VU: char = 'ゔ';

fn is_voicing_mark(c: char) -> bool {
    matches!(c, '\u{FF9E}' | '\u{309B}' | '\u{3099}')
}

fn is_semi_voicing_mark(c: char) -> bool {
    matches!(c, '\u{FF9F}' | '\u{309C}' | '\u{309A}')
}

/// か..ほ rows whose voiced form is the next code point
fn voiced(c: char) -> Option<char> {
    let voiceable = "かきくけこさしすせそたちつてとはひふへほ";
    if c == HIRAGANA_U {
        return Some(HIRAGANA_VU);
    }
    if voiceable.contains(c) {
        return char::from_u32(c as u32 + 1);
    }
    None
}

/// は row whose semi-voiced form is two code points on
fn semi_voiced(c: char) -> Option<char> {
    if "はひふへほ".contains(c) {
        return char::from_u32(c as u32 + 2);
    }
    None
}

fn fold_char(c: char) -> char {
    let code = c as u32;
    if (FULLWIDTH_ASCII_START..=FULLWIDTH_ASCII_END).contains(&code) {
        return char::from_u32(code - FULLWIDTH_TO_ASCII).unwrap_or(c);
    }
    let c = if code >= HALFWIDTH_KATAKANA_START {
        HALFWIDTH_KATAKANA
            .chars()
            .nth((code - HALFWIDTH_KATAKANA_START) as usize)
            .unwrap_or(c)
    } else {
        c
    };
    let code = c as u32;
    if (KATAKANA_START..=KATAKANA_END).contains(&code) {
        return char::from_u32(code - KATAKANA_TO_HIRAGANA).unwrap_or(c);
    }
    c
}

/// Canonical form used for answer comparison
///
/// Whitespace is dropped, ASCII is lowercased, katakana becomes hiragana and
/// detached (han)dakuten marks are composed onto the preceding kana.
pub fn to_canonical(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for raw in text.chars() {
        if raw.is_whitespace() {
            continue;
        }

        if is_voicing_mark(raw) || is_semi_voicing_mark(raw) {
            let composed = out.chars().last().and_then(|prev| {
                if is_voicing_mark(raw) {
                    voiced(prev)
                } else {
                    semi_voiced(prev)
                }
            });
            if let Some(composed) = composed {
                out.pop();
                out.push(composed);
            }
            continue;
        }

        out.extend(fold_char(raw).to_lowercase());
    }

    out
}
