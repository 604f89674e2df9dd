//! Shared type definitions for the Roster mock API.
//!
//! This crate is the single source of truth for the shapes exchanged
//! between the mock server and the front end. Types flow downstream to
//! `TypeScript` via `ts-rs` so the front end can be typed against the same
//! definitions.
//!
//! # Modules
//!
//! - [`record`] -- The character record
//! - [`enums`] -- Filter and sort option enums with lenient parsing
//! - [`query`] -- Filter, sort and page requests plus the paginated envelope
//! - [`counts`] -- Label counts kept in first-seen order
//! - [`views`] -- Statistics, detail, dashboard and acknowledgement bodies

pub mod counts;
pub mod enums;
pub mod query;
pub mod record;
pub mod views;

// Re-export all public types at crate root for convenience.
pub use counts::AttributeCounts;
pub use enums::{PriorityStatus, ShopType, SortKey, SortOrder};
pub use query::{
    AppliedFilters, AppliedSort, CharacterFilter, CharacterPage, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
    PageRequest, Pagination, PriorityShortcut, SortSpec,
};
pub use record::CharacterRecord;
pub use views::{
    AttributeShare, CharacterDetails, Dashboard, DashboardBreakdown, DashboardOverview,
    DashboardPriorities, DashboardRecommendation, DetailRecommendation, PriorityHistoryEntry,
    PriorityLevels, PriorityStats, ShopBreakdown, ShopShare, SimilarCharacter, Statistics,
    UpdateAck,
};

#[cfg(test)]
mod tests {
    //! Serialization shape checks and `TypeScript` binding generation.

    use super::*;

    #[test]
    fn export_bindings() {
        // Calling export_all writes the .ts files (and their dependencies)
        // to the `bindings/` directory relative to the crate root.
        use ts_rs::TS;

        let _ = CharacterRecord::export_all();
        let _ = CharacterPage::export_all();
        let _ = Statistics::export_all();
        let _ = CharacterDetails::export_all();
        let _ = Dashboard::export_all();
        let _ = UpdateAck::export_all();
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = CharacterRecord {
            row_index: 2,
            id: String::from("001"),
            name: String::from("サーバル"),
            attribute: String::from("アクティブ"),
            description: String::from("サバンナの案内人"),
            special_shop_eligible: true,
            great_shop_eligible: false,
            owned: false,
            priority: None,
        };
        let json = serde_json::to_value(&record).unwrap_or_default();
        assert_eq!(json["rowIndex"], 2);
        assert_eq!(json["specialShopEligible"], true);
        assert_eq!(json["greatShopEligible"], false);
        assert!(json["priority"].is_null());
        assert_eq!(record.priority_rank(), 0);
    }

    #[test]
    fn recommendation_kind_serializes_as_type() {
        let rec = DetailRecommendation {
            kind: String::from("priority"),
            message: String::new(),
            action: String::from("setPriority"),
        };
        let json = serde_json::to_value(&rec).unwrap_or_default();
        assert_eq!(json["type"], "priority");
        assert!(json.get("kind").is_none());
    }
}
