//! Fixed-size pagination.
//!
//! Pages are numbered from 1. There is always at least one page, so an empty
//! result renders as "page 1 of 1".

use std::num::NonZeroUsize;

/// Number of pages needed for `count` items: `max(1, ceil(count / page_size))`.
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get()).max(1)
}

/// The items of page `page_number`.
///
/// Returns `[(n-1)*size, n*size)` clamped to the available items. Page 0 and
/// pages past the end are empty rather than errors.
pub fn page<T>(items: &[T], page_number: usize, page_size: NonZeroUsize) -> &[T] {
    let Some(index) = page_number.checked_sub(1) else {
        return &[];
    };
    let size = page_size.get();
    let start = index.saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Current-page state machine.
///
/// Invariant: `1 <= current <= total_pages`, and `total_pages >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    current: usize,
    total: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        PageCursor {
            current: 1,
            total: 1,
        }
    }
}

impl PageCursor {
    /// A cursor on page 1 of `total_pages` (at least 1).
    pub fn new(total_pages: usize) -> Self {
        PageCursor {
            current: 1,
            total: total_pages.max(1),
        }
    }

    /// The current page.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The number of pages.
    pub fn total_pages(&self) -> usize {
        self.total
    }

    /// Returns `true` on page 1.
    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    /// Returns `true` on the last page.
    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Jumps to page 1.
    pub fn first(&mut self) {
        self.current = 1;
    }

    /// Jumps to the last page.
    pub fn last(&mut self) {
        self.current = self.total;
    }

    /// Advances one page, stopping at the last.
    pub fn next(&mut self) {
        self.current = (self.current + 1).min(self.total);
    }

    /// Goes back one page, stopping at the first.
    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1).max(1);
    }

    /// Jumps to `page`, clamped to `[1, total_pages]`.
    pub fn go_to(&mut self, page: usize) {
        self.current = page.clamp(1, self.total);
    }

    /// Forced reset to page 1, used whenever search or filters change.
    pub fn reset(&mut self, total_pages: usize) {
        self.total = total_pages.max(1);
        self.current = 1;
    }

    /// Updates the page count, keeping the current page when it still exists
    /// and falling back to page 1 otherwise.
    pub fn set_total_pages(&mut self, total_pages: usize) {
        self.total = total_pages.max(1);
        if self.current > self.total {
            self.current = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn total_pages_has_floor_of_one() {
        assert_eq!(total_pages(0, size(10)), 1);
        assert_eq!(total_pages(1, size(10)), 1);
        assert_eq!(total_pages(10, size(10)), 1);
        assert_eq!(total_pages(11, size(10)), 2);
        assert_eq!(total_pages(25, size(10)), 3);
        assert_eq!(total_pages(7, size(1)), 7);
    }

    #[test]
    fn page_slices() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(page(&items, 1, size(10)), &items[0..10]);
        assert_eq!(page(&items, 3, size(10)), &[21, 22, 23, 24, 25]);
        assert!(page(&items, 4, size(10)).is_empty());
        assert!(page(&items, 0, size(10)).is_empty());
        assert!(page(&items, usize::MAX, size(10)).is_empty());
    }

    #[test]
    fn page_of_empty_is_empty() {
        let items: Vec<u32> = Vec::new();
        assert!(page(&items, 1, size(10)).is_empty());
    }

    #[test]
    fn cursor_navigation_clamps() {
        let mut cursor = PageCursor::new(3);
        assert!(cursor.is_first());

        cursor.prev();
        assert_eq!(cursor.current(), 1);

        cursor.next();
        cursor.next();
        cursor.next();
        assert_eq!(cursor.current(), 3);
        assert!(cursor.is_last());

        cursor.first();
        assert_eq!(cursor.current(), 1);
        cursor.last();
        assert_eq!(cursor.current(), 3);

        cursor.go_to(0);
        assert_eq!(cursor.current(), 1);
        cursor.go_to(99);
        assert_eq!(cursor.current(), 3);
    }

    #[test]
    fn cursor_never_has_zero_pages() {
        let mut cursor = PageCursor::new(0);
        assert_eq!(cursor.total_pages(), 1);
        cursor.last();
        assert_eq!(cursor.current(), 1);
        cursor.reset(0);
        assert_eq!(cursor.total_pages(), 1);
    }

    #[test]
    fn shrinking_total_falls_back_to_first() {
        let mut cursor = PageCursor::new(5);
        cursor.go_to(4);

        cursor.set_total_pages(4);
        assert_eq!(cursor.current(), 4);

        cursor.set_total_pages(2);
        assert_eq!(cursor.current(), 1);
    }

    #[test]
    fn reset_is_unconditional() {
        let mut cursor = PageCursor::new(5);
        cursor.go_to(2);
        cursor.reset(5);
        assert_eq!(cursor.current(), 1);
        assert_eq!(cursor.total_pages(), 5);
    }
}
