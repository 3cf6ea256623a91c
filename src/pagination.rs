//! Pagination arithmetic for listing pages
//!
//! Pages are 1-based. The widget shows every page when they fit, otherwise
//! the first page, a window around the current page and the last page, with
//! gaps where pages are elided.

/// One slot in the pagination widget: a page number or an elided gap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Gap,
}

/// Number of pages needed for `total` items at `page_size` per page
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Item offset of a 1-based page number
pub fn offset_for_page(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1) * page_size
}

/// Page buttons to render for the current page
///
/// With more pages than `max_visible`: always the first and last page, a
/// two-page window either side of the current page (widened to the first
/// five pages near the start and the last five near the end), and gaps
/// where pages are skipped.
pub fn page_window(current: usize, total_pages: usize, max_visible: usize) -> Vec<PageItem> {
    if total_pages <= max_visible {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];

    let mut start = current.saturating_sub(2).max(2);
    let mut end = (current + 2).min(total_pages - 1);
    if current <= 3 {
        end = 5.min(total_pages - 1);
    }
    if current >= total_pages - 2 {
        start = total_pages.saturating_sub(4).max(2);
    }

    if start > 2 {
        items.push(PageItem::Gap);
    }
    for page in start..=end {
        items.push(PageItem::Page(page));
    }
    if end < total_pages - 1 {
        items.push(PageItem::Gap);
    }

    items.push(PageItem::Page(total_pages));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Gap, Page};

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, 48), 0);
        assert_eq!(total_pages(1, 48), 1);
        assert_eq!(total_pages(48, 48), 1);
        assert_eq!(total_pages(49, 48), 2);
        assert_eq!(total_pages(96, 48), 2);
    }

    #[test]
    fn total_pages_with_zero_page_size_is_zero() {
        assert_eq!(total_pages(100, 0), 0);
    }

    #[test]
    fn offset_for_page_is_one_based() {
        assert_eq!(offset_for_page(1, 48), 0);
        assert_eq!(offset_for_page(2, 48), 48);
        assert_eq!(offset_for_page(0, 48), 0);
    }

    #[test]
    fn window_shows_all_pages_when_they_fit() {
        assert_eq!(
            page_window(3, 7, 7),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
        assert!(page_window(1, 0, 7).is_empty());
    }

    #[test]
    fn window_near_the_start_shows_the_first_five_pages() {
        assert_eq!(
            page_window(1, 10, 7),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(10)]
        );
        assert_eq!(
            page_window(3, 10, 7),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(10)]
        );
    }

    #[test]
    fn window_in_the_middle_has_gaps_on_both_sides() {
        assert_eq!(
            page_window(5, 10, 7),
            vec![
                Page(1),
                Gap,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Gap,
                Page(10)
            ]
        );
    }

    #[test]
    fn window_near_the_end_shows_the_last_five_pages() {
        assert_eq!(
            page_window(9, 10, 7),
            vec![Page(1), Gap, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_window(10, 10, 7),
            vec![Page(1), Gap, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }
}
