//! Built-in starter vocabulary
//!
//! Enough common words to play without any external dictionary. Carries no
//! frequency data, so it is classified by surface length.

use crate::lexicon::record::RawEntry;
use crate::lexicon::source::{FrequencyField, MemorySource};

const STARTER_WORDS: &[(&str, &[&str], &str)] = &[
    ("日", &["ひ", "にち"], "day; sun"),
    ("人", &["ひと"], "person"),
    ("水", &["みず"], "water"),
    ("火", &["ひ"], "fire"),
    ("山", &["やま"], "mountain"),
    ("川", &["かわ"], "river"),
    ("木", &["き"], "tree"),
    ("犬", &["いぬ"], "dog"),
    ("猫", &["ねこ"], "cat"),
    ("本", &["ほん"], "book"),
    ("雨", &["あめ"], "rain"),
    ("空", &["そら"], "sky"),
    ("花", &["はな"], "flower"),
    ("車", &["くるま"], "car"),
    ("学校", &["がっこう"], "school"),
    ("先生", &["せんせい"], "teacher"),
    ("学生", &["がくせい"], "student"),
    ("電車", &["でんしゃ"], "train"),
    ("時間", &["じかん"], "time"),
    ("今日", &["きょう", "こんにち"], "today"),
    ("明日", &["あした", "あす"], "tomorrow"),
    ("友達", &["ともだち"], "friend"),
    ("天気", &["てんき"], "weather"),
    ("手紙", &["てがみ"], "letter"),
    ("会社", &["かいしゃ"], "company"),
    ("病院", &["びょういん"], "hospital"),
    ("図書館", &["としょかん"], "library"),
    ("自転車", &["じてんしゃ"], "bicycle"),
    ("映画館", &["えいがかん"], "movie theater"),
    ("新幹線", &["しんかんせん"], "bullet train"),
    ("食べ物", &["たべもの"], "food"),
    ("飲み物", &["のみもの"], "drink"),
    ("冷蔵庫", &["れいぞうこ"], "refrigerator"),
    ("大丈夫", &["だいじょうぶ"], "all right"),
    ("誕生日", &["たんじょうび"], "birthday"),
    ("動物園", &["どうぶつえん"], "zoo"),
    ("一生懸命", &["いっしょうけんめい"], "with all one's might"),
    ("自動販売機", &["じどうはんばいき"], "vending machine"),
];

/// Starter vocabulary as a lexical source
pub fn starter_source() -> MemorySource {
    MemorySource::with_entries(
        FrequencyField::None,
        STARTER_WORDS
            .iter()
            .map(|(surface, readings, meaning)| RawEntry::new(*surface, readings, *meaning))
            .collect(),
    )
}
