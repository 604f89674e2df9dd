//! Enumeration types for query options.
//!
//! Query strings arrive as loosely-typed text. Each enum here has a
//! `from_param` constructor that maps the recognised spelling to a
//! variant and treats everything else leniently: filters become no-ops
//! and sort options fall back to their defaults. Malformed input never
//! produces an error.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Shop eligibility filter
// ---------------------------------------------------------------------------

/// Which shop-eligibility combination a character must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ShopType {
    /// Eligible for the special shop (great shop unconstrained).
    Special,
    /// Eligible for the great shop (special shop unconstrained).
    Great,
    /// Eligible for both shops.
    Both,
    /// Eligible for at least one shop.
    Either,
    /// Eligible for neither shop.
    None,
}

impl ShopType {
    /// Parse a query parameter value. Unrecognised values yield `None`,
    /// which the query engine treats as "no shop filter".
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "special" => Some(Self::Special),
            "great" => Some(Self::Great),
            "both" => Some(Self::Both),
            "either" => Some(Self::Either),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Whether a character with the given eligibility flags passes.
    pub const fn admits(self, special: bool, great: bool) -> bool {
        match self {
            Self::Special => special,
            Self::Great => great,
            Self::Both => special && great,
            Self::Either => special || great,
            Self::None => !special && !great,
        }
    }

    /// The query parameter spelling of this variant.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Special => "special",
            Self::Great => "great",
            Self::Both => "both",
            Self::Either => "either",
            Self::None => "none",
        }
    }
}

// ---------------------------------------------------------------------------
// Priority status filter
// ---------------------------------------------------------------------------

/// Whether a character's priority must be set or unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum PriorityStatus {
    /// Priority has a value.
    Set,
    /// Priority is null.
    Unset,
}

impl PriorityStatus {
    /// Parse a query parameter value. Unrecognised values yield `None`.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "set" => Some(Self::Set),
            "unset" => Some(Self::Unset),
            _ => None,
        }
    }

    /// Whether a priority value passes this filter.
    pub const fn admits(self, priority: Option<i32>) -> bool {
        match self {
            Self::Set => priority.is_some(),
            Self::Unset => priority.is_none(),
        }
    }

    /// The query parameter spelling of this variant.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Unset => "unset",
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Field a paginated listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum SortKey {
    /// Priority, with unset priority compared as 0.
    #[default]
    Priority,
    /// Display name.
    Name,
    /// Attribute label.
    Attribute,
    /// Human-assigned identifier.
    Id,
}

impl SortKey {
    /// Parse a query parameter value.
    ///
    /// Unknown keys fall back to [`SortKey::Priority`] instead of being
    /// rejected, so a stale front end keeps getting a sensible listing.
    pub fn from_param(value: &str) -> Self {
        match value {
            "name" => Self::Name,
            "attribute" => Self::Attribute,
            "id" => Self::Id,
            _ => Self::Priority,
        }
    }

    /// The query parameter spelling of this variant.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Name => "name",
            Self::Attribute => "attribute",
            Self::Id => "id",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum SortOrder {
    /// Smallest first.
    Asc,
    /// Largest first.
    #[default]
    Desc,
}

impl SortOrder {
    /// Parse a query parameter value. Anything other than `asc` is
    /// descending.
    pub fn from_param(value: &str) -> Self {
        if value == "asc" { Self::Asc } else { Self::Desc }
    }

    /// The query parameter spelling of this variant.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shop_type_truth_table() {
        let cases = [(false, false), (true, false), (false, true), (true, true)];
        let admitted = |shop: ShopType| {
            cases
                .iter()
                .filter(|(s, g)| shop.admits(*s, *g))
                .copied()
                .collect::<Vec<_>>()
        };

        assert_eq!(admitted(ShopType::Special), vec![(true, false), (true, true)]);
        assert_eq!(admitted(ShopType::Great), vec![(false, true), (true, true)]);
        assert_eq!(admitted(ShopType::Both), vec![(true, true)]);
        assert_eq!(
            admitted(ShopType::Either),
            vec![(true, false), (false, true), (true, true)]
        );
        assert_eq!(admitted(ShopType::None), vec![(false, false)]);
    }

    #[test]
    fn unknown_filter_params_are_ignored() {
        assert_eq!(ShopType::from_param("premium"), None);
        assert_eq!(ShopType::from_param(""), None);
        assert_eq!(PriorityStatus::from_param("maybe"), None);
        assert_eq!(ShopType::from_param("either"), Some(ShopType::Either));
    }

    #[test]
    fn unknown_sort_key_falls_back_to_priority() {
        assert_eq!(SortKey::from_param("rarity"), SortKey::Priority);
        assert_eq!(SortKey::from_param(""), SortKey::Priority);
        assert_eq!(SortKey::from_param("name"), SortKey::Name);
    }

    #[test]
    fn sort_order_defaults_to_desc() {
        assert_eq!(SortOrder::from_param("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::from_param("ASC"), SortOrder::Desc);
        assert_eq!(SortOrder::from_param("sideways"), SortOrder::Desc);
    }

    #[test]
    fn as_str_round_trips_through_from_param() {
        for key in [SortKey::Priority, SortKey::Name, SortKey::Attribute, SortKey::Id] {
            assert_eq!(SortKey::from_param(key.as_str()), key);
        }
        for shop in [
            ShopType::Special,
            ShopType::Great,
            ShopType::Both,
            ShopType::Either,
            ShopType::None,
        ] {
            assert_eq!(ShopType::from_param(shop.as_str()), Some(shop));
        }
    }
}
