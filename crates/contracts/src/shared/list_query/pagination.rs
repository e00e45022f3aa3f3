use serde::{Deserialize, Serialize};

/// Rows per page on the admin list screens.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One visible slice of a filtered list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number the slice was cut for.
    pub page: usize,
    pub total_pages: usize,
    /// Length of the filtered list the page was cut from.
    pub total_count: usize,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
            total_count: 0,
        }
    }
}

/// `max(1, ceil(len / page_size))`; a zero page size counts as one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    len.div_ceil(size).max(1)
}

/// Cuts the 1-based `page` out of `items`. Pages past the end yield an empty
/// slice rather than an error.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let size = page_size.max(1);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(size);
    let end = start.saturating_add(size).min(items.len());
    let slice = items.get(start..end).unwrap_or(&[]);

    Page {
        items: slice.to_vec(),
        page,
        total_pages: total_pages(items.len(), size),
        total_count: items.len(),
    }
}

/// Current page position of a list. Always 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    page: usize,
    page_size: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageCursor {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_never_below_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn pages_reconstruct_the_list_exactly_once() {
        for len in [0usize, 1, 9, 10, 11, 37] {
            for size in [1usize, 3, 10] {
                let items: Vec<usize> = (0..len).collect();
                let pages = total_pages(len, size);
                let rebuilt: Vec<usize> = (1..=pages)
                    .flat_map(|p| paginate(&items, p, size).items)
                    .collect();
                assert_eq!(rebuilt, items, "len={len} size={size}");
            }
        }
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<u32> = (0..25).collect();
        let page = paginate(&items, 3, 10);
        assert_eq!(page.items, (20..25).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 25);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (0..5).collect();
        let page = paginate(&items, 4, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let page = paginate::<u32>(&[], 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn cursor_navigation_is_clamped() {
        let mut cursor = PageCursor::new(10);
        cursor.previous();
        assert_eq!(cursor.page(), 1);

        cursor.next(3);
        cursor.next(3);
        cursor.next(3);
        assert_eq!(cursor.page(), 3);

        cursor.go_to(9, 3);
        assert_eq!(cursor.page(), 3);
        cursor.go_to(0, 3);
        assert_eq!(cursor.page(), 1);

        cursor.next(0);
        assert_eq!(cursor.page(), 1);
    }
}
