//! Encounter generation
//!
//! Tier choice is weighted toward common words and gated by player level.
//! When the chosen bucket is empty the generator degrades instead of
//! failing: first to the highest unlocked non-empty tier, then to every
//! word in the pool. Only a pool with no words at all is an error.

use std::borrow::Cow;

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::combat::enemy::Enemy;
use crate::core::config::EncounterConfig;
use crate::core::error::{KotobaError, Result};
use crate::core::types::Tier;
use crate::lexicon::{WordPool, WordRef};
use crate::progression::max_tier_for_level;

/// Weighted tier choice among the tiers unlocked up to `max_tier`
pub fn choose_tier<R: Rng + ?Sized>(max_tier: Tier, config: &EncounterConfig, rng: &mut R) -> Tier {
    let weights: &[f64] = match max_tier {
        Tier::One => return Tier::One,
        Tier::Two => &config.two_tier_weights[..],
        Tier::Three => &config.three_tier_weights[..],
    };

    match WeightedIndex::new(weights) {
        Ok(dist) => Tier::ALL[dist.sample(rng)],
        Err(e) => {
            tracing::warn!("Invalid tier weights {:?} ({}), using tier 1", weights, e);
            Tier::One
        }
    }
}

/// Bucket the encounter draws from, with the tier used for its stats
///
/// Falls back from `chosen` to the highest non-empty tier at or below
/// `max_tier`, then to all tiers flattened (stats keep `chosen`). Only the
/// flattened case copies records.
pub fn resolve_bucket(pool: &WordPool, chosen: Tier, max_tier: Tier) -> Option<(Tier, Cow<'_, [WordRef]>)> {
    if pool.tier_len(chosen) > 0 {
        return Some((chosen, Cow::Borrowed(pool.bucket(chosen))));
    }

    if let Some(tier) = max_tier.descending().find(|t| pool.tier_len(*t) > 0) {
        tracing::debug!("Tier {} is empty, falling back to tier {}", chosen, tier);
        return Some((tier, Cow::Borrowed(pool.bucket(tier))));
    }

    if pool.is_empty() {
        return None;
    }

    tracing::debug!("No unlocked tier has words, drawing from the whole pool");
    Some((chosen, Cow::Owned(pool.iter().cloned().collect())))
}

/// Build an enemy for a player at `player_level`
pub fn create_enemy<R: Rng + ?Sized>(
    pool: &WordPool,
    player_level: u32,
    config: &EncounterConfig,
    rng: &mut R,
) -> Result<Enemy> {
    let max_tier = max_tier_for_level(player_level);
    let chosen = choose_tier(max_tier, config, rng);
    let (tier, bucket) = resolve_bucket(pool, chosen, max_tier).ok_or(KotobaError::NoVocabulary)?;

    let vocabulary: Vec<WordRef> = bucket
        .choose_multiple(rng, config.vocabulary_cap)
        .cloned()
        .collect();

    tracing::debug!(
        "Generated tier {} enemy with {} words (level {}, max tier {})",
        tier,
        vocabulary.len(),
        player_level,
        max_tier
    );

    Ok(Enemy::new(tier, vocabulary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::IngestionConfig;
    use crate::lexicon::{FrequencyField, MemorySource, RawEntry};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    /// `n` one-character words (tier 1) and `m` three-character words (tier 2)
    fn pool(n: usize, m: usize) -> WordPool {
        let mut src = MemorySource::new(FrequencyField::None);
        for i in 0..n {
            let surface = char::from_u32(0x4E00 + i as u32).unwrap().to_string();
            src.push(RawEntry::new(surface, &["よみ"], "meaning"));
        }
        for i in 0..m {
            let c = char::from_u32(0x5E00 + i as u32).unwrap();
            src.push(RawEntry::new(format!("{c}{c}{c}"), &["よみ"], "meaning"));
        }
        WordPool::build(&src, None, &IngestionConfig::default())
    }

    #[test]
    fn test_low_level_always_tier_one() {
        let config = EncounterConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(choose_tier(Tier::One, &config, &mut rng), Tier::One);
        }
    }

    #[test]
    fn test_weighted_choice_favors_tier_one() {
        let config = EncounterConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut counts = [0usize; 3];
        for _ in 0..10_000 {
            counts[choose_tier(Tier::Three, &config, &mut rng).index()] += 1;
        }
        // expected ~7500 / 2000 / 500
        assert!(counts[0] > 7000 && counts[0] < 8000, "{:?}", counts);
        assert!(counts[1] > 1600 && counts[1] < 2400, "{:?}", counts);
        assert!(counts[2] > 300 && counts[2] < 700, "{:?}", counts);
    }

    #[test]
    fn test_two_tier_choice_never_picks_three() {
        let config = EncounterConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..1000 {
            assert_ne!(choose_tier(Tier::Two, &config, &mut rng), Tier::Three);
        }
    }

    #[test]
    fn test_vocabulary_capped_without_duplicates() {
        let pool = pool(40, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let enemy = create_enemy(&pool, 1, &EncounterConfig::default(), &mut rng).unwrap();

        assert_eq!(enemy.vocabulary().len(), 25);
        let ids: HashSet<_> = enemy.vocabulary().iter().map(|w| w.id()).collect();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn test_small_bucket_used_whole() {
        let pool = pool(4, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let enemy = create_enemy(&pool, 1, &EncounterConfig::default(), &mut rng).unwrap();
        assert_eq!(enemy.remaining_words().len(), 4);
    }

    #[test]
    fn test_unlocked_bucket_is_borrowed_not_copied() {
        let mixed = pool(30, 3);
        let (_, bucket) = resolve_bucket(&mixed, Tier::One, Tier::Two).unwrap();
        assert!(matches!(bucket, Cow::Borrowed(_)));
        assert_eq!(bucket.len(), 30);

        let upper_only = pool(0, 3);
        let (tier, fallback) = resolve_bucket(&upper_only, Tier::Three, Tier::Three).unwrap();
        assert_eq!(tier, Tier::Two);
        assert!(matches!(fallback, Cow::Borrowed(_)));

        let (_, flattened) = resolve_bucket(&upper_only, Tier::One, Tier::One).unwrap();
        assert!(matches!(flattened, Cow::Owned(_)));
    }

    #[test]
    fn test_empty_chosen_tier_falls_back_down() {
        // level 5 unlocks tier 3, which is empty; tier 2 has words
        let pool = pool(0, 3);
        let (tier, bucket) = resolve_bucket(&pool, Tier::Three, Tier::Three).unwrap();
        assert_eq!(tier, Tier::Two);
        assert_eq!(bucket.len(), 3);
    }

    #[test]
    fn test_locked_tiers_used_only_when_nothing_unlocked() {
        // level 1 player, but only tier 2 words exist
        let pool = pool(0, 5);
        let (tier, bucket) = resolve_bucket(&pool, Tier::One, Tier::One).unwrap();
        assert_eq!(tier, Tier::One);
        assert_eq!(bucket.len(), 5);

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let enemy = create_enemy(&pool, 1, &EncounterConfig::default(), &mut rng).unwrap();
        assert_eq!(enemy.tier(), Tier::One);
        assert_eq!(enemy.remaining_words().len(), 5);
    }

    #[test]
    fn test_empty_pool_is_configuration_error() {
        let pool = pool(0, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = create_enemy(&pool, 10, &EncounterConfig::default(), &mut rng).unwrap_err();
        assert!(matches!(err, KotobaError::NoVocabulary));
    }

    #[test]
    fn test_stats_follow_resolved_tier() {
        let pool = pool(0, 3);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let enemy = create_enemy(&pool, 5, &EncounterConfig::default(), &mut rng).unwrap();
        assert_eq!(enemy.tier(), Tier::Two);
        assert_eq!(enemy.hp(), 8);
        assert_eq!(enemy.damage(), 5);
        assert_eq!(enemy.xp_reward(), 20);
    }

    #[test]
    fn test_same_seed_same_enemy() {
        let pool = pool(40, 10);
        let config = EncounterConfig::default();
        let a = create_enemy(&pool, 6, &config, &mut ChaCha8Rng::seed_from_u64(77)).unwrap();
        let b = create_enemy(&pool, 6, &config, &mut ChaCha8Rng::seed_from_u64(77)).unwrap();
        let ids = |e: &Enemy| e.vocabulary().iter().map(|w| w.id()).collect::<Vec<_>>();
        assert_eq!(a.tier(), b.tier());
        assert_eq!(ids(&a), ids(&b));
    }
}
