//! The character store service.
//!
//! [`CharacterStore`] owns the ordered character collection for the
//! lifetime of the process. Reads are served directly from the vector;
//! the only mutation is [`CharacterStore::update_priority`].

use roster_types::{
    AppliedFilters, AppliedSort, CharacterDetails, CharacterFilter, CharacterPage, CharacterRecord,
    Dashboard, PageRequest, PriorityShortcut, SortSpec, Statistics, UpdateAck,
};

use crate::error::StoreError;
use crate::query::{self, HIGH_PRIORITY_THRESHOLD};
use crate::seed::{SeedConfig, seed_characters};
use crate::{stats, views};

/// In-memory character collection with query and update operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterStore {
    characters: Vec<CharacterRecord>,
}

impl CharacterStore {
    /// Wrap an existing collection. Order is preserved and used as the
    /// tie-breaker for every ordered view.
    pub const fn new(characters: Vec<CharacterRecord>) -> Self {
        Self { characters }
    }

    /// Build the startup collection from `config`.
    pub fn seeded(config: &SeedConfig) -> Self {
        Self::new(seed_characters(config))
    }

    /// All characters, owned included, in collection order.
    pub fn characters(&self) -> &[CharacterRecord] {
        &self.characters
    }

    /// Number of characters, owned included.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    fn unowned(&self) -> impl Iterator<Item = &CharacterRecord> {
        self.characters.iter().filter(|c| !c.owned)
    }

    /// Unowned characters matching `filter`, in collection order.
    pub fn unowned_with_filter(&self, filter: &CharacterFilter) -> Vec<CharacterRecord> {
        query::apply_filter(self.unowned(), filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Unowned characters selected by a `priority=` shortcut.
    pub fn unowned_by_shortcut(&self, shortcut: PriorityShortcut) -> Vec<CharacterRecord> {
        self.unowned()
            .filter(|c| match shortcut {
                PriorityShortcut::High => c.priority.is_some_and(|p| p >= HIGH_PRIORITY_THRESHOLD),
                PriorityShortcut::Unset => c.priority.is_none(),
            })
            .cloned()
            .collect()
    }

    /// Filter, sort and paginate unowned characters.
    pub fn paginate(&self, filter: &CharacterFilter, sort: SortSpec, page: PageRequest) -> CharacterPage {
        let mut matched = query::apply_filter(self.unowned(), filter);
        query::sort_records(&mut matched, sort);

        let pagination = query::pagination(page, matched.len());
        let characters = query::page_slice(&matched, page)
            .into_iter()
            .cloned()
            .collect();

        CharacterPage {
            characters,
            pagination,
            filters: AppliedFilters::from(filter),
            sort: AppliedSort::from(sort),
        }
    }

    /// Collection statistics.
    pub fn statistics(&self) -> Statistics {
        stats::statistics(&self.characters)
    }

    /// Detail view for the character with `id`.
    pub fn character_details(&self, id: &str) -> Result<CharacterDetails, StoreError> {
        views::character_details(&self.characters, id)
    }

    /// Dashboard view.
    pub fn dashboard(&self) -> Dashboard {
        views::dashboard(&self.characters)
    }

    /// Overwrite the priority of the character at `row_index`.
    ///
    /// The value is stored as given, without range checks. A miss leaves
    /// the collection untouched.
    pub fn update_priority(&mut self, row_index: u32, priority: Option<i32>) -> Result<UpdateAck, StoreError> {
        let character = self
            .characters
            .iter_mut()
            .find(|c| c.row_index == row_index)
            .ok_or(StoreError::RowNotFound(row_index))?;

        character.priority = priority;
        tracing::info!(
            row_index,
            name = %character.name,
            priority = ?priority,
            "Priority updated"
        );

        Ok(UpdateAck::ok())
    }
}

#[cfg(test)]
mod tests {
    use roster_types::{PriorityStatus, ShopType, SortKey, SortOrder};

    use super::*;
    use crate::seed::fixed_characters;

    fn unowned_forty() -> CharacterStore {
        let characters = (1..=45)
            .map(|n: u32| CharacterRecord {
                row_index: n + 1,
                id: format!("{n:03}"),
                name: format!("Chara{n}"),
                attribute: String::from("アクティブ"),
                description: String::new(),
                special_shop_eligible: n % 2 == 0,
                great_shop_eligible: false,
                owned: n > 40,
                priority: None,
            })
            .collect();
        CharacterStore::new(characters)
    }

    #[test]
    fn page_three_of_four() {
        let store = unowned_forty();
        let page = store.paginate(
            &CharacterFilter::default(),
            SortSpec::default(),
            PageRequest { page: 3, page_size: 10 },
        );
        assert_eq!(page.pagination.current_page, 3);
        assert_eq!(page.pagination.total_pages, 4);
        assert_eq!(page.pagination.total_count, 40);
        assert!(page.pagination.has_next);
        assert!(page.pagination.has_prev);
        assert_eq!(page.characters.len(), 10);
        // All priorities tie, so collection order survives.
        assert_eq!(page.characters.first().map(|c| c.id.as_str()), Some("021"));
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let store = unowned_forty();
        let page = store.paginate(
            &CharacterFilter::default(),
            SortSpec::default(),
            PageRequest { page: 9, page_size: 10 },
        );
        assert!(page.characters.is_empty());
        assert!(!page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[test]
    fn paginate_echoes_filters_and_sort() {
        let store = unowned_forty();
        let filter = CharacterFilter {
            shop_type: Some(ShopType::Special),
            ..CharacterFilter::default()
        };
        let sort = SortSpec {
            key: SortKey::Id,
            order: SortOrder::Desc,
        };
        let page = store.paginate(&filter, sort, PageRequest::default());
        assert_eq!(page.pagination.total_count, 20);
        assert_eq!(page.filters.shop_type, "special");
        assert_eq!(page.sort.sort_by, SortKey::Id);
        assert_eq!(page.characters.first().map(|c| c.id.as_str()), Some("040"));
        assert!(page.characters.iter().all(|c| c.special_shop_eligible && !c.owned));
    }

    #[test]
    fn shortcut_high_and_unset() {
        let store = CharacterStore::new(fixed_characters());
        let high: Vec<String> = store
            .unowned_by_shortcut(PriorityShortcut::High)
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(high, vec!["001", "005", "008"]);
        assert!(store.unowned_by_shortcut(PriorityShortcut::Unset).is_empty());
    }

    #[test]
    fn unowned_filter_never_returns_owned() {
        let store = CharacterStore::seeded(&SeedConfig::default());
        let all = store.unowned_with_filter(&CharacterFilter::default());
        assert!(all.iter().all(|c| !c.owned));
        assert_eq!(all.len(), store.statistics().unowned);
    }

    #[test]
    fn update_priority_is_idempotent() {
        let mut store = CharacterStore::new(fixed_characters());
        assert_eq!(store.update_priority(2, Some(3)), Ok(UpdateAck::ok()));
        let after_first = store.clone();
        assert_eq!(store.update_priority(2, Some(3)), Ok(UpdateAck::ok()));
        assert_eq!(store, after_first);
        assert_eq!(store.characters().first().and_then(|c| c.priority), Some(3));
    }

    #[test]
    fn update_priority_unknown_row_leaves_store_unchanged() {
        let mut store = CharacterStore::new(fixed_characters());
        let before = store.clone();
        assert_eq!(store.update_priority(999, Some(1)), Err(StoreError::RowNotFound(999)));
        assert_eq!(store, before);
    }

    #[test]
    fn update_priority_accepts_null_and_out_of_range() {
        let mut store = CharacterStore::new(fixed_characters());
        assert!(store.update_priority(2, None).is_ok());
        assert_eq!(store.characters().first().and_then(|c| c.priority), None);
        assert!(store.update_priority(2, Some(42)).is_ok());
        assert_eq!(store.characters().first().and_then(|c| c.priority), Some(42));
    }

    #[test]
    fn high_shortcut_reflects_updates() {
        let mut store = CharacterStore::new(fixed_characters());
        let has_001 = |s: &CharacterStore| {
            s.unowned_by_shortcut(PriorityShortcut::High)
                .iter()
                .any(|c| c.id == "001")
        };
        assert!(has_001(&store));
        assert!(store.update_priority(2, Some(3)).is_ok());
        assert!(!has_001(&store));
    }

    #[test]
    fn every_filter_combination_selects_exactly_the_matching_unowned() {
        let store = CharacterStore::seeded(&SeedConfig::default());

        let mut attributes: Vec<Option<String>> = vec![None, Some(String::from("存在しない"))];
        for c in store.characters() {
            if !attributes.iter().any(|a| a.as_deref() == Some(c.attribute.as_str())) {
                attributes.push(Some(c.attribute.clone()));
            }
        }
        let shops = [
            None,
            Some(ShopType::Special),
            Some(ShopType::Great),
            Some(ShopType::Both),
            Some(ShopType::Either),
            Some(ShopType::None),
        ];
        let statuses = [None, Some(PriorityStatus::Set), Some(PriorityStatus::Unset)];

        let shop_ok = |shop: Option<ShopType>, c: &CharacterRecord| match shop {
            None => true,
            Some(ShopType::Special) => c.special_shop_eligible,
            Some(ShopType::Great) => c.great_shop_eligible,
            Some(ShopType::Both) => c.special_shop_eligible && c.great_shop_eligible,
            Some(ShopType::Either) => c.special_shop_eligible || c.great_shop_eligible,
            Some(ShopType::None) => !c.special_shop_eligible && !c.great_shop_eligible,
        };
        let status_ok = |status: Option<PriorityStatus>, c: &CharacterRecord| match status {
            None => true,
            Some(PriorityStatus::Set) => c.priority.is_some(),
            Some(PriorityStatus::Unset) => c.priority.is_none(),
        };

        for attribute in &attributes {
            for shop in shops {
                for status in statuses {
                    let filter = CharacterFilter {
                        attribute: attribute.clone(),
                        shop_type: shop,
                        priority_status: status,
                        search: None,
                    };
                    let expected: Vec<&str> = store
                        .characters()
                        .iter()
                        .filter(|c| !c.owned)
                        .filter(|c| attribute.as_deref().is_none_or(|a| a == c.attribute))
                        .filter(|c| shop_ok(shop, c))
                        .filter(|c| status_ok(status, c))
                        .map(|c| c.id.as_str())
                        .collect();

                    let result = store.unowned_with_filter(&filter);
                    for c in &result {
                        assert!(!c.owned, "{filter:?} returned owned {}", c.id);
                        assert!(shop_ok(shop, c) && status_ok(status, c), "{filter:?} let {} through", c.id);
                    }
                    let got: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
                    assert_eq!(got, expected, "{filter:?}");
                }
            }
        }
    }
}
