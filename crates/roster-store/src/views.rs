//! Detail and dashboard views built on top of the query engine and
//! statistics.

use chrono::Utc;
use roster_types::{
    AttributeShare, CharacterDetails, CharacterRecord, Dashboard, DashboardBreakdown,
    DashboardOverview, DashboardPriorities, DashboardRecommendation, DetailRecommendation,
    PriorityHistoryEntry, ShopShare, SimilarCharacter, Statistics,
};

use crate::error::StoreError;
use crate::query::HIGH_PRIORITY_THRESHOLD;
use crate::stats::{percent, statistics};

/// Maximum number of similar characters on the detail view.
const MAX_SIMILAR: usize = 3;

/// Similarity score reported for every similar character.
const PLACEHOLDER_SIMILARITY: u32 = 3;

/// Maximum length of the dashboard's high-priority list.
const MAX_HIGH_PRIORITY_LIST: usize = 5;

/// Build the detail view for the character with `id`.
///
/// Similar characters are other unowned characters sharing the
/// attribute, in collection order.
pub fn character_details(records: &[CharacterRecord], id: &str) -> Result<CharacterDetails, StoreError> {
    let character = records
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| StoreError::CharacterNotFound(id.to_owned()))?;

    let similar_characters = records
        .iter()
        .filter(|c| c.id != id && c.attribute == character.attribute && !c.owned)
        .take(MAX_SIMILAR)
        .map(|c| SimilarCharacter {
            character: c.clone(),
            similarity: PLACEHOLDER_SIMILARITY,
        })
        .collect();

    Ok(CharacterDetails {
        character: character.clone(),
        similar_characters,
        priority_history: vec![PriorityHistoryEntry {
            date: Utc::now(),
            priority: character.priority,
            action: String::from("current"),
        }],
        recommendations: vec![DetailRecommendation {
            kind: String::from("priority"),
            message: String::from("優先度を設定することをおすすめします"),
            action: String::from("setPriority"),
        }],
    })
}

/// Build the dashboard view.
pub fn dashboard(records: &[CharacterRecord]) -> Dashboard {
    let stats = statistics(records);

    let mut high_priority_list: Vec<&CharacterRecord> = records
        .iter()
        .filter(|c| !c.owned && c.priority.is_some_and(|p| p >= HIGH_PRIORITY_THRESHOLD))
        .collect();
    high_priority_list.sort_by(|a, b| b.priority_rank().cmp(&a.priority_rank()));
    high_priority_list.truncate(MAX_HIGH_PRIORITY_LIST);

    Dashboard {
        overview: DashboardOverview {
            total_characters: stats.total,
            owned_characters: stats.owned,
            unowned_characters: stats.unowned,
            priority_set_characters: stats.priorities.set,
            completion_rate: percent(stats.owned, stats.total),
        },
        priorities: DashboardPriorities {
            high: stats.priorities.by_level.high,
            unset: stats.priorities.unset,
            high_priority_list: high_priority_list.into_iter().cloned().collect(),
        },
        breakdown: breakdown(&stats),
        recommendations: vec![DashboardRecommendation {
            kind: String::from("action"),
            title: String::from("優先度設定を進めましょう"),
            message: format!("{}体のキャラクターの優先度が未設定です", stats.priorities.unset),
            action: String::from("setPriorities"),
        }],
    }
}

fn breakdown(stats: &Statistics) -> DashboardBreakdown {
    let attributes = stats
        .attributes
        .entries()
        .map(|(attribute, count)| AttributeShare {
            attribute: attribute.to_owned(),
            count,
            percentage: percent(count, stats.unowned),
        })
        .collect();

    let shop = |name: &str, count: usize| ShopShare {
        name: name.to_owned(),
        count,
    };

    DashboardBreakdown {
        attributes,
        shops: vec![
            shop("スペシャルのみ", stats.shops.special_only),
            shop("グレートのみ", stats.shops.great_only),
            shop("両ショップ", stats.shops.both),
            shop("ショップ対象外", stats.shops.neither),
        ],
    }
}
