//! Query option structures and the paginated listing envelope.
//!
//! These replace the loosely-typed option bags the front end sends. Each
//! recognised option is an explicit field with a documented default.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{PriorityStatus, ShopType, SortKey, SortOrder};
use crate::record::CharacterRecord;

/// Default 1-based page number.
pub const DEFAULT_PAGE: usize = 1;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Conjunctive filter over unowned characters. `None` fields do not
/// constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterFilter {
    /// Exact attribute match.
    pub attribute: Option<String>,
    /// Shop eligibility combination.
    pub shop_type: Option<ShopType>,
    /// Priority presence.
    pub priority_status: Option<PriorityStatus>,
    /// Case-insensitive substring of the name.
    pub search: Option<String>,
}

impl CharacterFilter {
    /// Build a filter from raw query parameter values.
    ///
    /// Empty strings and unrecognised enum spellings leave the
    /// corresponding filter unset.
    pub fn from_params(
        attribute: Option<&str>,
        shop_type: Option<&str>,
        priority_status: Option<&str>,
        search: Option<&str>,
    ) -> Self {
        Self {
            attribute: non_empty(attribute),
            shop_type: shop_type.and_then(ShopType::from_param),
            priority_status: priority_status.and_then(PriorityStatus::from_param),
            search: non_empty(search),
        }
    }

    /// Whether no filter is active.
    pub const fn is_empty(&self) -> bool {
        self.attribute.is_none()
            && self.shop_type.is_none()
            && self.priority_status.is_none()
            && self.search.is_none()
    }

    /// Render the active filters as query parameter pairs.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(attribute) = &self.attribute {
            params.push(("attribute", attribute.clone()));
        }
        if let Some(shop_type) = self.shop_type {
            params.push(("shopType", shop_type.as_str().to_owned()));
        }
        if let Some(status) = self.priority_status {
            params.push(("priorityStatus", status.as_str().to_owned()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_owned)
}

/// Shortcut selections on the plain listing endpoint (`priority=...`).
///
/// When present they replace every other filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityShortcut {
    /// Unowned characters with priority 8 or above.
    High,
    /// Unowned characters without a priority.
    Unset,
}

impl PriorityShortcut {
    /// Parse the `priority` query parameter. Other values are ignored.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "high" => Some(Self::High),
            "unset" => Some(Self::Unset),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting and paging
// ---------------------------------------------------------------------------

/// Ordering of a paginated listing. Defaults to priority, descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to order by.
    pub key: SortKey,
    /// Direction.
    pub order: SortOrder,
}

impl SortSpec {
    /// Build from raw query values; missing values take the defaults.
    pub fn from_params(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        Self {
            key: sort_by.map(SortKey::from_param).unwrap_or_default(),
            order: sort_order.map(SortOrder::from_param).unwrap_or_default(),
        }
    }
}

/// Requested page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: usize,
    /// Records per page, never zero.
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Build from raw query values.
    ///
    /// Values are read like JavaScript's `parseInt`: leading whitespace
    /// is skipped and the leading run of digits is used, so `"10abc"` is
    /// 10 and `"3.5"` is 3. Missing, non-numeric, negative, zero or
    /// out-of-range values fall back to the defaults. Pages past the end
    /// are kept as requested.
    pub fn from_params(page: Option<&str>, page_size: Option<&str>) -> Self {
        Self {
            page: positive_or(page, DEFAULT_PAGE),
            page_size: positive_or(page_size, DEFAULT_PAGE_SIZE),
        }
    }
}

fn positive_or(value: Option<&str>, default: usize) -> usize {
    value
        .and_then(leading_integer)
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

/// Leading unsigned integer of `value`, ignoring leading whitespace, an
/// optional `+` and anything after the digits. Negative numbers yield
/// `None`.
fn leading_integer(value: &str) -> Option<usize> {
    let rest = value.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest.get(..end)?.parse().ok()
}

// ---------------------------------------------------------------------------
// Paginated response
// ---------------------------------------------------------------------------

/// Page metadata returned alongside a slice of characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Pagination {
    /// The requested page.
    pub current_page: usize,
    /// `ceil(total_count / page_size)`.
    pub total_pages: usize,
    /// Records per page.
    pub page_size: usize,
    /// Records matching the filters across all pages.
    pub total_count: usize,
    /// `current_page < total_pages`.
    pub has_next: bool,
    /// `current_page > 1`.
    pub has_prev: bool,
}

/// Echo of the filters applied to a paginated listing. Absent filters
/// are reported as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct AppliedFilters {
    /// Attribute filter.
    pub attribute: String,
    /// Shop filter.
    pub shop_type: String,
    /// Priority-status filter.
    pub priority_status: String,
    /// Name search term.
    pub search: String,
}

impl From<&CharacterFilter> for AppliedFilters {
    fn from(filter: &CharacterFilter) -> Self {
        Self {
            attribute: filter.attribute.clone().unwrap_or_default(),
            shop_type: filter
                .shop_type
                .map(|s| s.as_str().to_owned())
                .unwrap_or_default(),
            priority_status: filter
                .priority_status
                .map(|s| s.as_str().to_owned())
                .unwrap_or_default(),
            search: filter.search.clone().unwrap_or_default(),
        }
    }
}

/// Echo of the ordering actually applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct AppliedSort {
    /// Resolved sort key.
    pub sort_by: SortKey,
    /// Resolved direction.
    pub sort_order: SortOrder,
}

impl From<SortSpec> for AppliedSort {
    fn from(spec: SortSpec) -> Self {
        Self {
            sort_by: spec.key,
            sort_order: spec.order,
        }
    }
}

/// Response of `GET /api/characters/paginated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CharacterPage {
    /// The characters on this page.
    pub characters: Vec<CharacterRecord>,
    /// Page metadata.
    pub pagination: Pagination,
    /// Filters applied.
    pub filters: AppliedFilters,
    /// Ordering applied.
    pub sort: AppliedSort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_defaults_on_garbage() {
        let req = PageRequest::from_params(Some("abc"), Some("0"));
        assert_eq!(req, PageRequest::default());

        let req = PageRequest::from_params(Some("-2"), None);
        assert_eq!(req.page, DEFAULT_PAGE);

        let req = PageRequest::from_params(Some("7"), Some(" 15 "));
        assert_eq!(req.page, 7);
        assert_eq!(req.page_size, 15);
    }

    #[test]
    fn page_request_reads_leading_digits() {
        let req = PageRequest::from_params(Some("10abc"), Some("3.5"));
        assert_eq!(req.page, 10);
        assert_eq!(req.page_size, 3);

        let req = PageRequest::from_params(Some("+4"), Some("  8 rows"));
        assert_eq!(req, PageRequest { page: 4, page_size: 8 });

        for garbage in ["-3", "abc", "", "   ", ".5", "-0"] {
            let req = PageRequest::from_params(Some(garbage), Some(garbage));
            assert_eq!(req, PageRequest::default(), "input {garbage:?}");
        }

        let req = PageRequest::from_params(Some("99999999999999999999999999"), None);
        assert_eq!(req.page, DEFAULT_PAGE);
    }

    #[test]
    fn empty_params_leave_filter_empty() {
        let filter = CharacterFilter::from_params(Some(""), Some("bogus"), Some(""), Some(""));
        assert!(filter.is_empty());
        assert!(filter.to_params().is_empty());
    }

    #[test]
    fn applied_filters_echo_empty_strings() {
        let filter = CharacterFilter {
            shop_type: Some(ShopType::Both),
            ..CharacterFilter::default()
        };
        let applied = AppliedFilters::from(&filter);
        assert_eq!(applied.shop_type, "both");
        assert_eq!(applied.attribute, "");
        assert_eq!(applied.search, "");
    }

    #[test]
    fn sort_spec_serializes_lowercase() {
        let sort = AppliedSort::from(SortSpec::from_params(Some("unknown"), None));
        let json = serde_json::to_value(sort).unwrap_or_default();
        assert_eq!(json["sortBy"], "priority");
        assert_eq!(json["sortOrder"], "desc");
    }
}
