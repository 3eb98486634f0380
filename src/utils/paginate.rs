/// Number of items on one page of any listing endpoint.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based `page` window of `items`.
///
/// Pages past the end yield an empty slice; listing endpoints turn that into a 404,
/// search returns it as is. A `page` of 0 is treated as the first page.
pub fn paginate<T>(page: usize, items: &[T]) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(QUESTIONS_PER_PAGE)
        .min(items.len());
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
