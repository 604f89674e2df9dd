//! Collection statistics.
//!
//! Everything here is a pure function of the records passed in and is
//! recomputed on every call.

use roster_types::{AttributeCounts, CharacterRecord, PriorityLevels, PriorityStats, ShopBreakdown, Statistics};

use crate::query::HIGH_PRIORITY_THRESHOLD;

/// Lowest priority in the medium bucket.
const MEDIUM_PRIORITY_THRESHOLD: i32 = 5;

/// Lowest priority in the low bucket.
const LOW_PRIORITY_THRESHOLD: i32 = 1;

/// Compute [`Statistics`] over the full collection.
pub fn statistics(records: &[CharacterRecord]) -> Statistics {
    let total = records.len();
    let unowned: Vec<&CharacterRecord> = records.iter().filter(|c| !c.owned).collect();
    let unowned_count = unowned.len();
    let owned = total.saturating_sub(unowned_count);

    let mut attributes = AttributeCounts::new();
    let mut shops = ShopBreakdown::default();
    let mut by_level = PriorityLevels::default();
    let mut set = 0_usize;

    for c in &unowned {
        attributes.increment(&c.attribute);

        let bucket = match (c.special_shop_eligible, c.great_shop_eligible) {
            (true, false) => &mut shops.special_only,
            (false, true) => &mut shops.great_only,
            (true, true) => &mut shops.both,
            (false, false) => &mut shops.neither,
        };
        *bucket = bucket.saturating_add(1);

        if let Some(priority) = c.priority {
            set = set.saturating_add(1);
            if let Some(level) = level_bucket(&mut by_level, priority) {
                *level = level.saturating_add(1);
            }
        }
    }

    Statistics {
        total,
        owned,
        unowned: unowned_count,
        attributes,
        priorities: PriorityStats {
            total: unowned_count,
            set,
            unset: unowned_count.saturating_sub(set),
            by_level,
        },
        shops,
    }
}

/// The histogram bucket a priority falls in, if any.
const fn level_bucket(levels: &mut PriorityLevels, priority: i32) -> Option<&mut usize> {
    if priority >= HIGH_PRIORITY_THRESHOLD {
        Some(&mut levels.high)
    } else if priority >= MEDIUM_PRIORITY_THRESHOLD {
        Some(&mut levels.medium)
    } else if priority >= LOW_PRIORITY_THRESHOLD {
        Some(&mut levels.low)
    } else {
        None
    }
}

/// `round(part / whole * 100)` with halves rounded up. Zero when `whole`
/// is zero.
pub fn percent(part: usize, whole: usize) -> usize {
    // floor((200 * part + whole) / (2 * whole)) == round(100 * part / whole)
    part.saturating_mul(200)
        .saturating_add(whole)
        .checked_div(whole.saturating_mul(2))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use crate::seed::{SeedConfig, fixed_characters, seed_characters};

    use super::*;

    #[test]
    fn fixed_rows_statistics() {
        let stats = statistics(&fixed_characters());
        assert_eq!(stats.total, 10);
        assert_eq!(stats.owned, 4);
        assert_eq!(stats.unowned, 6);
        assert_eq!(stats.attributes.get("アクティブ"), Some(3));
        assert_eq!(stats.attributes.get("フレンドリー"), None);
        assert_eq!(stats.priorities.set, 6);
        assert_eq!(stats.priorities.unset, 0);
        assert_eq!(stats.priorities.by_level.high, 3);
        assert_eq!(stats.priorities.by_level.medium, 3);
        assert_eq!(stats.priorities.by_level.low, 0);
        assert_eq!(stats.shops.special_only, 2);
        assert_eq!(stats.shops.great_only, 1);
        assert_eq!(stats.shops.both, 0);
        assert_eq!(stats.shops.neither, 3);
    }

    #[test]
    fn counts_are_consistent() {
        for seed in 0..20 {
            let records = seed_characters(&SeedConfig {
                seed,
                filler_count: 40,
            });
            let stats = statistics(&records);
            assert_eq!(stats.owned + stats.unowned, stats.total);
            assert_eq!(stats.priorities.set + stats.priorities.unset, stats.unowned);
            assert_eq!(stats.attributes.total(), stats.unowned);
            let shops = stats.shops;
            assert_eq!(
                shops.special_only + shops.great_only + shops.both + shops.neither,
                stats.unowned
            );
            let levels = stats.priorities.by_level;
            assert_eq!(levels.high + levels.medium + levels.low, stats.priorities.set);
        }
    }

    #[test]
    fn attributes_follow_first_unowned_appearance() {
        let records = seed_characters(&SeedConfig::default());
        let stats = statistics(&records);

        let mut expected: Vec<&str> = Vec::new();
        for c in records.iter().filter(|c| !c.owned) {
            if !expected.contains(&c.attribute.as_str()) {
                expected.push(&c.attribute);
            }
        }
        let served: Vec<&str> = stats.attributes.labels().collect();
        assert_eq!(served, expected);
        // Fixed rows put マイペース (row 6) ahead of ラブリー and フレンドリー.
        assert_eq!(served.first(), Some(&"アクティブ"));
        assert_eq!(served.get(1), Some(&"マイペース"));
    }

    #[test]
    fn empty_collection() {
        let stats = statistics(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.unowned, 0);
        assert!(stats.attributes.is_empty());
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13); // 12.5
        assert_eq!(percent(3, 8), 38); // 37.5
        assert_eq!(percent(5, 5), 100);
        assert_eq!(percent(0, 7), 0);
    }

    #[test]
    fn percent_of_nothing_is_zero() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(4, 0), 0);
    }
}
