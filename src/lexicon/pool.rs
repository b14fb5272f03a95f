//! Word pool: classified records bucketed by tier
//!
//! Ingestion is the only place records are created, so every invariant the
//! battle layer relies on (non-empty readings, unique ids, exactly one
//! bucket per record) is enforced here.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::config::IngestionConfig;
use crate::core::types::{Tier, WordId};
use crate::lexicon::classifier::{surface_len, ClassificationPolicy, TierClassifier};
use crate::lexicon::frequency::FrequencyList;
use crate::lexicon::record::{clean_readings, LexicalRecord, MISSING_MEANING};
use crate::lexicon::source::LexicalSource;

/// Shared handle to a pooled record
pub type WordRef = Arc<LexicalRecord>;

/// Outcome counts of one ingestion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    pub policy: ClassificationPolicy,
    pub accepted: usize,
    pub rejected_blank_surface: usize,
    pub rejected_no_readings: usize,
    pub rejected_too_long: usize,
    pub per_tier: [usize; 3],
}

impl PoolStats {
    fn new(policy: ClassificationPolicy) -> Self {
        Self {
            policy,
            accepted: 0,
            rejected_blank_surface: 0,
            rejected_no_readings: 0,
            rejected_too_long: 0,
            per_tier: [0; 3],
        }
    }

    pub fn rejected(&self) -> usize {
        self.rejected_blank_surface + self.rejected_no_readings + self.rejected_too_long
    }
}

/// Records grouped by tier, in ingestion order within each bucket
#[derive(Debug, Clone)]
pub struct WordPool {
    buckets: [Vec<WordRef>; 3],
    stats: PoolStats,
}

impl WordPool {
    /// Classify and bucket every usable entry of `source`
    pub fn build<S: LexicalSource + ?Sized>(
        source: &S,
        list: Option<&FrequencyList>,
        config: &IngestionConfig,
    ) -> Self {
        let classifier = TierClassifier::new(list, source.frequency_field());
        let mut stats = PoolStats::new(classifier.policy());
        let mut buckets: [Vec<WordRef>; 3] = Default::default();
        let mut next_id = 0u32;

        for entry in source.entries() {
            let surface = entry.surface.trim();
            if surface.is_empty() {
                stats.rejected_blank_surface += 1;
                continue;
            }
            if config.max_surface_len.is_some_and(|max| surface_len(surface) > max) {
                stats.rejected_too_long += 1;
                continue;
            }

            let meaning = match entry.meaning.trim() {
                "" => MISSING_MEANING.to_string(),
                m => m.to_string(),
            };
            let tier = classifier.classify(surface, entry.frequency);

            let Some(record) = LexicalRecord::new(
                WordId::new(next_id),
                surface.to_string(),
                clean_readings(&entry.readings),
                meaning,
                tier,
            ) else {
                tracing::debug!("Rejected '{}': no readings", surface);
                stats.rejected_no_readings += 1;
                continue;
            };

            next_id += 1;
            stats.accepted += 1;
            stats.per_tier[tier.index()] += 1;
            buckets[tier.index()].push(Arc::new(record));
        }

        tracing::info!(
            "Built word pool with {:?}: {} words (tier 1: {}, tier 2: {}, tier 3: {}), {} rejected",
            stats.policy,
            stats.accepted,
            stats.per_tier[0],
            stats.per_tier[1],
            stats.per_tier[2],
            stats.rejected()
        );

        Self { buckets, stats }
    }

    pub fn bucket(&self, tier: Tier) -> &[WordRef] {
        &self.buckets[tier.index()]
    }

    pub fn tier_len(&self, tier: Tier) -> usize {
        self.buckets[tier.index()].len()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Every record, tier 1 first
    pub fn iter(&self) -> impl Iterator<Item = &WordRef> {
        self.buckets.iter().flatten()
    }

    pub fn stats(&self) -> &PoolStats {
        &self.stats
    }
}
