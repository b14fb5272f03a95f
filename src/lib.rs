//! Kotoba Crawl - vocabulary progression engine for a reading-practice roguelite

pub mod battle;
pub mod combat;
pub mod core;
pub mod kana;
pub mod lexicon;
pub mod progression;
