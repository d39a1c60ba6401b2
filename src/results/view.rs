//! Pure view derivation: letter filtering and page slicing.
//!
//! Both functions borrow from the result set and never reorder it. Out of range
//! requests degrade to empty slices.

use super::alphabet::starts_with_letter;
use crate::domain::SearchRecord;

/// Returns the records whose display name starts with `letter`, or every
/// record when no letter is active. Relative order is preserved.
#[must_use]
pub fn filter_by_letter<'a>(
    records: &'a [SearchRecord],
    display_field: &str,
    letter: Option<char>,
) -> Vec<&'a SearchRecord> {
    match letter {
        None => records.iter().collect(),
        Some(letter) => records
            .iter()
            .filter(|record| {
                record
                    .display_name(display_field)
                    .is_some_and(|name| starts_with_letter(name, letter))
            })
            .collect(),
    }
}

/// Returns items `[(page-1)*page_size, page*page_size)`, truncated to the
/// available range. Page 0 and pages past the end yield an empty slice.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(index) = page.checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
