//! The character record served by every endpoint.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One character row of the collection.
///
/// `row_index` is the legacy spreadsheet row number. It and `id` are
/// each unique across the collection and never change after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CharacterRecord {
    /// Stable positional identifier (spreadsheet row).
    pub row_index: u32,
    /// Human-assigned identifier, e.g. `"001"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Attribute label, e.g. `アクティブ`.
    pub attribute: String,
    /// Free-form description.
    pub description: String,
    /// Whether the special shop may offer this character.
    pub special_shop_eligible: bool,
    /// Whether the great shop may offer this character.
    pub great_shop_eligible: bool,
    /// Whether the player already owns this character.
    pub owned: bool,
    /// Acquisition urgency, nominally 1 to 10. `None` means unset.
    pub priority: Option<i32>,
}

impl CharacterRecord {
    /// Priority used for ordering: unset compares as 0.
    pub fn priority_rank(&self) -> i32 {
        self.priority.unwrap_or(0)
    }
}
