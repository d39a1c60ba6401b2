//! Result store: owner of the current result set and its facets.
//!
//! [`ResultStore`] holds the records of the last successful search together
//! with the active letter and the current page. Every mutation goes through a
//! method here so the invariants hold at all times:
//!
//! - replacing the result set clears the letter filter and returns to page 1
//! - changing the letter filter returns to page 1
//! - the current page always lies in `[1, page_count(filtered_count)]`

use super::alphabet::{available_letters, AlphabetFilter};
use super::pagination::Pagination;
use super::view::{filter_by_letter, page_slice};
use crate::domain::SearchRecord;

/// Owned state of the result set, letter facet and pagination.
#[derive(Debug, Clone)]
pub struct ResultStore {
    records: Vec<SearchRecord>,
    letters: Vec<char>,
    display_field: String,
    filter: AlphabetFilter,
    pagination: Pagination,
}

impl ResultStore {
    /// Creates an empty store grouping records by `display_field`.
    #[must_use]
    pub fn new(display_field: impl Into<String>, page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            letters: Vec::new(),
            display_field: display_field.into(),
            filter: AlphabetFilter::default(),
            pagination: Pagination::new(page_size),
        }
    }

    /// Replaces the result set wholesale and resets filter and page.
    pub fn set_results(&mut self, records: Vec<SearchRecord>) {
        self.letters = available_letters(&records, &self.display_field);
        self.records = records;
        self.filter.clear();
        self.pagination.reset();

        tracing::debug!(
            record_count = self.records.len(),
            letter_count = self.letters.len(),
            "result set replaced"
        );
    }

    /// Discards the result set.
    pub fn clear(&mut self) {
        self.set_results(Vec::new());
    }

    #[must_use]
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn display_field(&self) -> &str {
        &self.display_field
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    #[must_use]
    pub const fn active_letter(&self) -> Option<char> {
        self.filter.active()
    }

    /// Letters present in the full result set, regardless of the filter.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The filtered sequence as a fresh vector, in original order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&SearchRecord> {
        filter_by_letter(&self.records, &self.display_field, self.filter.active())
    }

    #[must_use]
    pub fn filtered_count(&self) -> usize {
        match self.filter.active() {
            None => self.records.len(),
            Some(_) => self.filtered().len(),
        }
    }

    /// Records on page `page` of the filtered sequence; empty when out of range.
    #[must_use]
    pub fn page(&self, page: usize) -> Vec<&SearchRecord> {
        let filtered = self.filtered();
        page_slice(&filtered, page, self.pagination.page_size()).to_vec()
    }

    /// Records on the current page.
    #[must_use]
    pub fn current_page_records(&self) -> Vec<&SearchRecord> {
        self.page(self.pagination.current())
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.pagination.current()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.filtered_count())
    }

    /// Moves to `page`, clamped into range. Returns the page selected.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        let count = self.filtered_count();
        self.pagination.go_to(page, count)
    }

    /// Returns `false` when already on the last page.
    pub fn next_page(&mut self) -> bool {
        let count = self.filtered_count();
        self.pagination.next(count)
    }

    /// Returns `false` when already on the first page.
    pub fn prev_page(&mut self) -> bool {
        let count = self.filtered_count();
        self.pagination.prev(count)
    }

    /// Toggles `letter` as the active filter and returns to page 1.
    pub fn select_letter(&mut self, letter: char) -> Option<char> {
        let active = self.filter.select(letter);
        self.pagination.reset();
        tracing::debug!(letter = ?active, filtered_count = self.filtered_count(), "letter filter changed");
        active
    }

    /// Clears the letter filter unconditionally and returns to page 1.
    pub fn show_all(&mut self) {
        self.filter.clear();
        self.pagination.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FIELD: &str = "NombreCompleto";

    fn store_with(names: &[&str]) -> ResultStore {
        let mut store = ResultStore::new(FIELD, 10);
        store.set_results(
            names
                .iter()
                .map(|n| SearchRecord::from_pairs([(FIELD, *n)]))
                .collect(),
        );
        store
    }

    fn generated(count: usize, m_count: usize) -> Vec<SearchRecord> {
        (0..count)
            .map(|i| {
                let name = if i < m_count {
                    format!("Martinez {i}")
                } else {
                    format!("Lopez {i}")
                };
                SearchRecord::from_pairs([(FIELD, name)])
            })
            .collect()
    }

    #[test]
    fn set_results_resets_filter_and_page() {
        let mut store = ResultStore::new(FIELD, 10);
        store.set_results(generated(23, 4));
        store.go_to_page(3);
        store.select_letter('L');
        store.go_to_page(2);

        store.set_results(generated(15, 0));

        assert_eq!(store.active_letter(), None);
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.filtered_count(), 15);
    }

    #[test]
    fn letter_selection_resets_page_and_narrows() {
        let mut store = ResultStore::new(FIELD, 10);
        store.set_results(generated(23, 4));
        assert_eq!(store.page_count(), 3);
        assert_eq!(store.current_page_records().len(), 10);
        store.go_to_page(3);

        store.select_letter('m');

        assert_eq!(store.current_page(), 1);
        assert_eq!(store.page_count(), 1);
        assert_eq!(store.current_page_records().len(), 4);
    }

    #[test]
    fn reselecting_letter_restores_full_set() {
        let mut store = store_with(&["Mario", "Ana", "Marta"]);
        store.select_letter('M');
        assert_eq!(store.filtered_count(), 2);
        store.select_letter('M');
        assert_eq!(store.filtered_count(), 3);
    }

    #[test]
    fn letters_reflect_unfiltered_set() {
        let mut store = store_with(&["Mario", "Ana", "Zoe"]);
        store.select_letter('A');
        assert_eq!(store.letters(), &['A', 'M', 'Z']);
    }

    #[test]
    fn absent_letter_yields_empty_view_with_one_page() {
        let mut store = store_with(&["Mario", "Ana"]);
        store.select_letter('Q');
        assert_eq!(store.filtered_count(), 0);
        assert_eq!(store.page_count(), 1);
        assert!(store.current_page_records().is_empty());
    }

    #[test]
    fn out_of_range_page_is_empty_not_a_panic() {
        let store = store_with(&["Mario", "Ana"]);
        assert!(store.page(7).is_empty());
        assert!(store.page(0).is_empty());
    }

    #[test]
    fn show_all_clears_unconditionally() {
        let mut store = store_with(&["Mario", "Ana"]);
        store.show_all();
        assert_eq!(store.active_letter(), None);
        store.select_letter('A');
        store.show_all();
        assert_eq!(store.active_letter(), None);
        assert_eq!(store.filtered_count(), 2);
    }

    proptest! {
        #[test]
        fn set_results_then_filtered_is_identity(names in prop::collection::vec("[A-Za-z ]{0,10}", 0..60)) {
            let records: Vec<SearchRecord> = names
                .iter()
                .map(|n| SearchRecord::from_pairs([(FIELD, n.as_str())]))
                .collect();
            let mut store = ResultStore::new(FIELD, 10);
            store.set_results(records.clone());

            let filtered: Vec<SearchRecord> = store.filtered().into_iter().cloned().collect();
            prop_assert_eq!(filtered, records);
            prop_assert_eq!(store.current_page(), 1);
        }

        #[test]
        fn page_stays_in_range(count in 0usize..80, m in 0usize..80, requests in prop::collection::vec(0usize..20, 0..10)) {
            let mut store = ResultStore::new(FIELD, 10);
            store.set_results(generated(count, m.min(count)));
            for (i, page) in requests.into_iter().enumerate() {
                if i % 3 == 2 {
                    store.select_letter('M');
                }
                store.go_to_page(page);
                prop_assert!(store.current_page() >= 1);
                prop_assert!(store.current_page() <= store.page_count());
            }
        }
    }
}
