//! Page tracking over the filtered result sequence.
//!
//! [`Pagination`] keeps a 1-based current page against a fixed page size. It
//! never stores the filtered count: every operation that depends on it takes
//! the count as an argument, so the controller cannot drift out of sync with
//! the result store.

/// Default number of cards per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `count` items, never less than one.
#[must_use]
pub const fn page_count(count: usize, page_size: usize) -> usize {
    let size = if page_size == 0 { 1 } else { page_size };
    let pages = count.div_ceil(size);
    if pages == 0 {
        1
    } else {
        pages
    }
}

/// Current-page state for a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pagination {
    /// Creates a controller positioned on page 1. A zero page size is
    /// replaced by [`PAGE_SIZE`].
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            page_size: if page_size == 0 { PAGE_SIZE } else { page_size },
            current: 1,
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// 1-based current page.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn page_count(&self, filtered_count: usize) -> usize {
        page_count(filtered_count, self.page_size)
    }

    /// Moves to `page`, clamped into `[1, page_count]`, and returns the page
    /// actually selected.
    pub fn go_to(&mut self, page: usize, filtered_count: usize) -> usize {
        self.current = page.clamp(1, self.page_count(filtered_count));
        self.current
    }

    /// Advances one page. Returns `false` when already on the last page.
    pub fn next(&mut self, filtered_count: usize) -> bool {
        let before = self.current;
        self.go_to(before.saturating_add(1), filtered_count) != before
    }

    /// Steps back one page. Returns `false` when already on page 1.
    pub fn prev(&mut self, filtered_count: usize) -> bool {
        let before = self.current;
        self.go_to(before.saturating_sub(1), filtered_count) != before
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn page_count_for_default_size() {
        assert_eq!(page_count(0, PAGE_SIZE), 1);
        assert_eq!(page_count(10, PAGE_SIZE), 1);
        assert_eq!(page_count(11, PAGE_SIZE), 2);
        assert_eq!(page_count(25, PAGE_SIZE), 3);
    }

    #[test]
    fn go_to_clamps_out_of_range_requests() {
        let mut pages = Pagination::default();
        assert_eq!(pages.go_to(0, 25), 1);
        assert_eq!(pages.go_to(999, 25), 3);
        assert_eq!(pages.current(), 3);
    }

    #[test]
    fn next_and_prev_stop_at_bounds() {
        let mut pages = Pagination::new(10);
        assert!(!pages.prev(23));
        assert!(pages.next(23));
        assert!(pages.next(23));
        assert!(!pages.next(23));
        assert_eq!(pages.current(), 3);
        pages.reset();
        assert_eq!(pages.current(), 1);
    }

    #[test]
    fn zero_page_size_falls_back_to_default() {
        assert_eq!(Pagination::new(0).page_size(), PAGE_SIZE);
    }

    proptest! {
        #[test]
        fn go_to_always_lands_in_range(count in 0usize..500, size in 1usize..50, page in 0usize..1000) {
            let mut pages = Pagination::new(size);
            let landed = pages.go_to(page, count);
            prop_assert!(landed >= 1);
            prop_assert!(landed <= pages.page_count(count));
        }
    }
}
