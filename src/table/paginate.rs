//! Pagination stage

/// Window `[page_index * page_size, page_index * page_size + page_size)`.
///
/// Out-of-range pages are empty. A zero page size yields an empty slice here;
/// the engine rejects it before reaching this stage.
pub fn paginate<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
