// src/pipeline/paginate.rs

//! Fixed-size page slicing.

use std::ops::Range;

use serde::Serialize;

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<E> {
    pub items: Vec<E>,
    /// 1-based page number actually shown (after clamping)
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<E> Page<E> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Splits a collection into pages of `page_size` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    /// Page sizes below 1 are raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(count / page_size)`; 0 for an empty collection.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size)
    }

    /// Clamp a requested page into `[1, total_pages]` (1 when empty).
    pub fn clamp(&self, page: usize, count: usize) -> usize {
        page.clamp(1, self.total_pages(count).max(1))
    }

    /// Index range for a page; empty when the page is out of bounds.
    pub fn range(&self, page: usize, count: usize) -> Range<usize> {
        if page == 0 {
            return 0..0;
        }
        let start = (page - 1).saturating_mul(self.page_size).min(count);
        let end = start.saturating_add(self.page_size).min(count);
        start..end
    }

    /// Clamp `page` and slice it out of `items`.
    pub fn paginate<E: Clone>(&self, items: &[E], page: usize) -> Page<E> {
        let total_items = items.len();
        let page = self.clamp(page, total_items);
        Page {
            items: items[self.range(page, total_items)].to_vec(),
            page,
            total_pages: self.total_pages(total_items),
            total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let paginator = Paginator::new(12);
        assert_eq!(paginator.total_pages(0), 0);
        assert_eq!(paginator.total_pages(12), 1);
        assert_eq!(paginator.total_pages(13), 2);
        assert_eq!(paginator.total_pages(21), 2);
    }

    #[test]
    fn test_last_page_holds_remainder() {
        let items: Vec<u32> = (1..=21).collect();
        let paginator = Paginator::new(12);
        assert_eq!(paginator.paginate(&items, 1).items.len(), 12);
        assert_eq!(paginator.paginate(&items, 2).items.len(), 21 % 12);

        let full: Vec<u32> = (1..=18).collect();
        assert_eq!(Paginator::new(9).paginate(&full, 2).items.len(), 9);
    }

    #[test]
    fn test_out_of_range_pages_clamp() {
        let items: Vec<u32> = (1..=21).collect();
        let paginator = Paginator::new(12);

        let first = paginator.paginate(&items, 0);
        assert_eq!(first.page, 1);
        assert_eq!(first.items[0], 1);

        let last = paginator.paginate(&items, 99);
        assert_eq!(last.page, 2);
        assert_eq!(last.items, (13..=21).collect::<Vec<_>>());
    }

    #[test]
    fn test_unclamped_range_never_panics() {
        let paginator = Paginator::new(9);
        assert_eq!(paginator.range(0, 5), 0..0);
        assert_eq!(paginator.range(7, 5), 5..5);
        assert_eq!(paginator.range(usize::MAX, 5), 5..5);
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<u32> = Vec::new();
        let page = Paginator::new(9).paginate(&items, 3);
        assert!(page.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_same_inputs_same_slice() {
        let items: Vec<u32> = (1..=30).collect();
        let paginator = Paginator::new(9);
        assert_eq!(paginator.paginate(&items, 2), paginator.paginate(&items, 2));
    }

    #[test]
    fn test_zero_page_size_raised() {
        assert_eq!(Paginator::new(0).page_size(), 1);
    }
}
