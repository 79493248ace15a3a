//! Pagination.
//!
//! Page numbers are 1-based. [`paginate`] never clamps: an out-of-range
//! page is reported back to the caller, which owns the clamping policy.

use serde::Serialize;

use crate::error::{QueryError, Result};

/// One page of a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
    pub page_number: usize,
}

/// Number of pages for `count` items; at least 1 even when empty.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Clamp `page` into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice out page `page_number` of `items`.
///
/// # Errors
///
/// [`QueryError::PageOutOfRange`] when `page_number` is 0 or exceeds the
/// page count, and [`QueryError::ZeroPageSize`] for a zero page size.
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> Result<Page<'_, T>> {
    if page_size == 0 {
        return Err(QueryError::ZeroPageSize);
    }
    let total_pages = total_pages(items.len(), page_size);
    if page_number == 0 || page_number > total_pages {
        return Err(QueryError::PageOutOfRange {
            page: page_number,
            total_pages,
        });
    }
    let start = ((page_number - 1) * page_size).min(items.len());
    let end = (page_number * page_size).min(items.len());
    Ok(Page {
        items: &items[start..end],
        total_pages,
        page_number,
    })
}

/// 1-based inclusive range of rows shown on a page ("Showing 26-50 of 60").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowRange {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl RowRange {
    pub fn new(page_number: usize, page_size: usize, total: usize) -> Self {
        if total == 0 {
            return Self {
                first: 0,
                last: 0,
                total,
            };
        }
        let first = ((page_number.max(1) - 1) * page_size + 1).min(total);
        let last = (page_number.max(1) * page_size).min(total);
        Self { first, last, total }
    }
}

/// One entry in the compact page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageSlot {
    Page(usize),
    Gap,
}

/// Page numbers to show around `current`, with gaps for elided runs.
///
/// Up to five pages are listed in full. Beyond that the strip keeps the
/// first and last page and a window around the current one:
/// `1 2 3 4 … N`, `1 … N-3 N-2 N-1 N` or `1 … p-1 p p+1 … N`.
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageSlot> {
    use self::PageSlot::{Gap, Page};

    let total = total_pages.max(1);
    let current = clamp_page(current, total);
    if total <= 5 {
        return (1..=total).map(Page).collect();
    }
    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(total)]
    } else if current >= total - 2 {
        vec![
            Page(1),
            Gap,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Gap,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Gap,
            Page(total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageSlot::{Gap, Page};

    #[test]
    fn sixty_items_make_three_pages() {
        let items: Vec<usize> = (0..60).collect();
        assert_eq!(total_pages(items.len(), 25), 3);

        let page = paginate(&items, 25, 3).unwrap();
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items.first(), Some(&50));
        assert_eq!(page.items.last(), Some(&59));
        assert_eq!(page.total_pages, 3);

        assert_eq!(
            paginate(&items, 25, 4),
            Err(QueryError::PageOutOfRange {
                page: 4,
                total_pages: 3
            })
        );
        assert_eq!(clamp_page(4, 3), 3);
    }

    #[test]
    fn empty_set_has_one_empty_page() {
        let items: Vec<usize> = Vec::new();
        assert_eq!(total_pages(0, 25), 1);
        let page = paginate(&items, 25, 1).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn page_zero_and_zero_size_are_rejected() {
        let items = [1, 2, 3];
        assert!(matches!(
            paginate(&items, 25, 0),
            Err(QueryError::PageOutOfRange { page: 0, .. })
        ));
        assert_eq!(paginate(&items, 0, 1), Err(QueryError::ZeroPageSize));
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        assert_eq!(total_pages(50, 25), 2);
        assert_eq!(total_pages(51, 25), 3);
    }

    #[test]
    fn clamp_page_bounds() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 0), 1);
    }

    #[test]
    fn row_range() {
        assert_eq!(
            RowRange::new(2, 25, 60),
            RowRange {
                first: 26,
                last: 50,
                total: 60
            }
        );
        assert_eq!(RowRange::new(3, 25, 60).last, 60);
        assert_eq!(
            RowRange::new(1, 25, 0),
            RowRange {
                first: 0,
                last: 0,
                total: 0
            }
        );
    }

    #[test]
    fn page_window_shapes() {
        assert_eq!(page_window(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_window(2, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(10)]
        );
        assert_eq!(
            page_window(9, 10),
            vec![Page(1), Gap, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(10)]
        );
    }
}
