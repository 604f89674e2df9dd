//! Filter, sort and paginate over character slices.
//!
//! These are free functions over borrowed records so they can be tested
//! without a store. Every filter is a conjunct; unset filters match
//! everything. Sorting uses the standard library's stable sort, so ties
//! keep collection order.

use std::cmp::Ordering;

use roster_types::{CharacterFilter, CharacterRecord, PageRequest, Pagination, SortKey, SortOrder, SortSpec};

/// Priority at or above which a character counts as high priority.
pub const HIGH_PRIORITY_THRESHOLD: i32 = 8;

/// Whether `record` satisfies every active predicate of `filter`.
///
/// Ownership is not checked here; callers pass unowned records.
pub fn matches(filter: &CharacterFilter, record: &CharacterRecord) -> bool {
    if let Some(attribute) = &filter.attribute
        && record.attribute != *attribute
    {
        return false;
    }
    if let Some(shop) = filter.shop_type
        && !shop.admits(record.special_shop_eligible, record.great_shop_eligible)
    {
        return false;
    }
    if let Some(status) = filter.priority_status
        && !status.admits(record.priority)
    {
        return false;
    }
    if let Some(search) = &filter.search
        && !record.name.to_lowercase().contains(&search.to_lowercase())
    {
        return false;
    }
    true
}

/// Keep the records matching `filter`, in their original order.
pub fn apply_filter<'a>(
    records: impl IntoIterator<Item = &'a CharacterRecord>,
    filter: &CharacterFilter,
) -> Vec<&'a CharacterRecord> {
    records.into_iter().filter(|r| matches(filter, r)).collect()
}

/// Compare two records on a single key, ascending.
fn compare_key(key: SortKey, a: &CharacterRecord, b: &CharacterRecord) -> Ordering {
    match key {
        SortKey::Priority => a.priority_rank().cmp(&b.priority_rank()),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Attribute => a.attribute.cmp(&b.attribute),
        SortKey::Id => a.id.cmp(&b.id),
    }
}

/// Stable in-place sort by `spec`.
pub fn sort_records(records: &mut [&CharacterRecord], spec: SortSpec) {
    records.sort_by(|a, b| match spec.order {
        SortOrder::Asc => compare_key(spec.key, a, b),
        SortOrder::Desc => compare_key(spec.key, b, a),
    });
}

/// Compute page metadata for `total_count` records.
pub fn pagination(request: PageRequest, total_count: usize) -> Pagination {
    let total_pages = total_count.div_ceil(request.page_size.max(1));
    Pagination {
        current_page: request.page,
        total_pages,
        page_size: request.page_size,
        total_count,
        has_next: request.page < total_pages,
        has_prev: request.page > 1,
    }
}

/// Slice out the requested page. Pages past the end are empty.
pub fn page_slice<T: Clone>(items: &[T], request: PageRequest) -> Vec<T> {
    let start = request
        .page
        .saturating_sub(1)
        .saturating_mul(request.page_size);
    items
        .iter()
        .skip(start)
        .take(request.page_size)
        .cloned()
        .collect()
}
