//! Tier classification
//!
//! One policy is chosen per ingestion run, from the best data supplied:
//!
//! - A: external frequency list (higher score = more common)
//! - B: source score field (lower score = more common)
//! - C: source raw frequency combined with surface length
//! - D: surface length only
//!
//! Classification is deterministic and always lands in tier 1..=3.

use serde::{Deserialize, Serialize};

use crate::core::types::Tier;
use crate::lexicon::frequency::FrequencyList;
use crate::lexicon::source::FrequencyField;

// Policy A: external list thresholds (at or above)
const LIST_TIER_ONE_MIN: f64 = 1000.0;
const LIST_TIER_TWO_MIN: f64 = 100.0;

// Policy B: source score thresholds (at or below)
const SCORE_TIER_ONE_MAX: f64 = 800.0;
const SCORE_TIER_TWO_MAX: f64 = 2500.0;
/// Score assumed when a Policy B entry carries a non-finite value
const UNREADABLE_SCORE: f64 = 5000.0;

// Policy C: raw frequency thresholds (at or above)
const RAW_TWO_CHAR_TIER_ONE_MIN: f64 = 2.5;
const RAW_LONG_TIER_ONE_MIN: f64 = 4.5;
const RAW_LONG_TIER_TWO_MIN: f64 = 3.0;
/// Value assumed for a missing or zero frequency field (Policies B and C)
const MISSING_FREQUENCY: f64 = 3.0;

/// Treats an absent field and a stored zero alike
fn given(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Which classification rules apply to a whole ingestion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationPolicy {
    ExternalList,
    SourceScore,
    RawFrequency,
    LengthOnly,
}

impl ClassificationPolicy {
    /// Most preferred policy the supplied data supports
    pub fn select(list: Option<&FrequencyList>, field: FrequencyField) -> Self {
        if list.is_some_and(|l| !l.is_empty()) {
            return Self::ExternalList;
        }
        match field {
            FrequencyField::Score => Self::SourceScore,
            FrequencyField::Raw => Self::RawFrequency,
            FrequencyField::None => Self::LengthOnly,
        }
    }
}

/// Policy A: words missing from the list fall back to length rules
pub fn tier_from_list(surface: &str, list: &FrequencyList) -> Tier {
    match list.get(surface) {
        Some(score) if score >= LIST_TIER_ONE_MIN => Tier::One,
        Some(score) if score >= LIST_TIER_TWO_MIN => Tier::Two,
        Some(_) => Tier::Three,
        None => tier_from_length(surface_len(surface)),
    }
}

/// Policy B; a missing or zero score is the common-word default 3.0
pub fn tier_from_score(score: Option<f64>) -> Tier {
    let score = match given(score) {
        None => MISSING_FREQUENCY,
        Some(s) if !s.is_finite() => UNREADABLE_SCORE,
        Some(s) => s,
    };
    if score <= SCORE_TIER_ONE_MAX {
        Tier::One
    } else if score <= SCORE_TIER_TWO_MAX {
        Tier::Two
    } else {
        Tier::Three
    }
}

/// Policy C; surfaces longer than three characters use the three-character rule
pub fn tier_from_raw_frequency(len: usize, frequency: Option<f64>) -> Tier {
    let frequency = given(frequency)
        .filter(|f| f.is_finite())
        .unwrap_or(MISSING_FREQUENCY);
    match len {
        0 | 1 => Tier::One,
        2 if frequency >= RAW_TWO_CHAR_TIER_ONE_MIN => Tier::One,
        2 => Tier::Two,
        _ if frequency >= RAW_LONG_TIER_ONE_MIN => Tier::One,
        _ if frequency >= RAW_LONG_TIER_TWO_MIN => Tier::Two,
        _ => Tier::Three,
    }
}

/// Policy D
pub fn tier_from_length(len: usize) -> Tier {
    match len {
        0..=2 => Tier::One,
        3 => Tier::Two,
        _ => Tier::Three,
    }
}

/// Surface length in characters
pub fn surface_len(surface: &str) -> usize {
    surface.chars().count()
}

/// Classifier bound to one policy for a whole run
#[derive(Debug, Clone, Copy)]
pub struct TierClassifier<'a> {
    policy: ClassificationPolicy,
    list: Option<&'a FrequencyList>,
}

impl<'a> TierClassifier<'a> {
    pub fn new(list: Option<&'a FrequencyList>, field: FrequencyField) -> Self {
        Self {
            policy: ClassificationPolicy::select(list, field),
            list,
        }
    }

    pub fn policy(&self) -> ClassificationPolicy {
        self.policy
    }

    pub fn classify(&self, surface: &str, frequency: Option<f64>) -> Tier {
        match (self.policy, self.list) {
            (ClassificationPolicy::ExternalList, Some(list)) => tier_from_list(surface, list),
            (ClassificationPolicy::SourceScore, _) => tier_from_score(frequency),
            (ClassificationPolicy::RawFrequency, _) => {
                tier_from_raw_frequency(surface_len(surface), frequency)
            }
            _ => tier_from_length(surface_len(surface)),
        }
    }
}
