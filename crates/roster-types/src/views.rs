//! Aggregate views: statistics, character detail, and dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::counts::AttributeCounts;
use crate::record::CharacterRecord;

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Collection-wide counts. Everything except `total` and `owned` is
/// computed over unowned characters only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Statistics {
    /// All characters.
    pub total: usize,
    /// Owned characters.
    pub owned: usize,
    /// Unowned characters.
    pub unowned: usize,
    /// Unowned count per attribute label, in first-seen order.
    #[ts(type = "Record<string, number>")]
    pub attributes: AttributeCounts,
    /// Priority coverage among unowned characters.
    pub priorities: PriorityStats,
    /// Shop eligibility breakdown among unowned characters.
    pub shops: ShopBreakdown,
}

/// Priority coverage among unowned characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PriorityStats {
    /// Same as [`Statistics::unowned`].
    pub total: usize,
    /// Characters with a priority.
    pub set: usize,
    /// Characters without a priority.
    pub unset: usize,
    /// Histogram over set priorities.
    pub by_level: PriorityLevels,
}

/// Three-bucket priority histogram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PriorityLevels {
    /// Priority 8 and above.
    pub high: usize,
    /// Priority 5 to 7.
    pub medium: usize,
    /// Priority 1 to 4.
    pub low: usize,
}

/// Mutually exclusive shop eligibility categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ShopBreakdown {
    /// Special shop only.
    pub special_only: usize,
    /// Great shop only.
    pub great_only: usize,
    /// Both shops.
    pub both: usize,
    /// Neither shop.
    pub neither: usize,
}

// ---------------------------------------------------------------------------
// Character detail
// ---------------------------------------------------------------------------

/// Response of `GET /api/characters/{id}/details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CharacterDetails {
    /// The requested character.
    pub character: CharacterRecord,
    /// Up to three unowned characters sharing its attribute.
    pub similar_characters: Vec<SimilarCharacter>,
    /// Priority history. Only the current value is retained.
    pub priority_history: Vec<PriorityHistoryEntry>,
    /// Suggested next steps.
    pub recommendations: Vec<DetailRecommendation>,
}

/// A character related to the one being viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SimilarCharacter {
    /// The related character.
    pub character: CharacterRecord,
    /// Placeholder similarity score.
    pub similarity: u32,
}

/// One recorded priority value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PriorityHistoryEntry {
    /// When the value was observed.
    pub date: DateTime<Utc>,
    /// The priority at that time.
    pub priority: Option<i32>,
    /// What happened, e.g. `current`.
    pub action: String,
}

/// A suggestion shown on the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DetailRecommendation {
    /// Recommendation category.
    #[serde(rename = "type")]
    pub kind: String,
    /// Text shown to the player.
    pub message: String,
    /// Front-end action identifier.
    pub action: String,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Response of `GET /api/dashboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Dashboard {
    /// Headline counts.
    pub overview: DashboardOverview,
    /// Priority summary.
    pub priorities: DashboardPriorities,
    /// Attribute and shop breakdowns.
    pub breakdown: DashboardBreakdown,
    /// Suggested next steps.
    pub recommendations: Vec<DashboardRecommendation>,
}

/// Headline counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct DashboardOverview {
    /// All characters.
    pub total_characters: usize,
    /// Owned characters.
    pub owned_characters: usize,
    /// Unowned characters.
    pub unowned_characters: usize,
    /// Unowned characters with a priority.
    pub priority_set_characters: usize,
    /// Owned share of the collection, rounded percent.
    pub completion_rate: usize,
}

/// Priority summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct DashboardPriorities {
    /// Unowned characters with priority 8 or above.
    pub high: usize,
    /// Unowned characters without a priority.
    pub unset: usize,
    /// Top five high-priority unowned characters.
    pub high_priority_list: Vec<CharacterRecord>,
}

/// Attribute and shop breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DashboardBreakdown {
    /// Per-attribute share of unowned characters.
    pub attributes: Vec<AttributeShare>,
    /// Per-shop-category counts.
    pub shops: Vec<ShopShare>,
}

/// One attribute's share of unowned characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AttributeShare {
    /// Attribute label.
    pub attribute: String,
    /// Unowned characters with this attribute.
    pub count: usize,
    /// Rounded percent of all unowned characters.
    pub percentage: usize,
}

/// One shop category's count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ShopShare {
    /// Display label.
    pub name: String,
    /// Unowned characters in the category.
    pub count: usize,
}

/// A suggestion shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DashboardRecommendation {
    /// Recommendation category.
    #[serde(rename = "type")]
    pub kind: String,
    /// Heading.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Front-end action identifier.
    pub action: String,
}

// ---------------------------------------------------------------------------
// Mutation acknowledgement
// ---------------------------------------------------------------------------

/// Body returned by successful mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct UpdateAck {
    /// Always `true`; failures are reported as errors instead.
    pub success: bool,
}

impl UpdateAck {
    /// A successful acknowledgement.
    pub const fn ok() -> Self {
        Self { success: true }
    }
}
