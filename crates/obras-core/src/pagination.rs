//! Paginator
//!
//! Slices a sequence into fixed-size pages and keeps a cursor that snaps
//! back to page 1 whenever what it pages over changes.

use std::ops::RangeInclusive;

/// Layout class derived from viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    Narrow,
    #[default]
    Wide,
}

/// Presentation of the task list. Narrow layouts can switch between these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskView {
    #[default]
    Cards,
    List,
    Table,
}

impl TaskView {
    pub const ALL: [TaskView; 3] = [TaskView::Cards, TaskView::List, TaskView::Table];

    pub fn label(&self) -> &'static str {
        match self {
            TaskView::Cards => "Cards",
            TaskView::List => "Lista",
            TaskView::Table => "Tabela",
        }
    }
}

/// One page of a sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
    /// Offset of the first item, clamped to the sequence length
    pub start_index: usize,
    /// Exclusive end offset, clamped to the sequence length
    pub end_index: usize,
}

impl<T> Page<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Page `page` (1-indexed) of `items`. Out-of-range pages are empty; page 0
/// is read as page 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let page = page.max(1);
    let len = items.len();
    let start_index = (page - 1).saturating_mul(page_size).min(len);
    let end_index = start_index.saturating_add(page_size).min(len);
    Page {
        items: &items[start_index..end_index],
        total_pages: total_pages(len, page_size),
        start_index,
        end_index,
    }
}

/// Page buttons to show. All pages when they fit, otherwise a window
/// starting half a window before `current`, cut off at `total`.
pub fn visible_pages(current: usize, total: usize, max_visible: usize) -> RangeInclusive<usize> {
    if total == 0 {
        return 1..=0;
    }
    let max_visible = max_visible.max(1);
    if total <= max_visible {
        return 1..=total;
    }
    let start = current.saturating_sub(max_visible / 2).max(1);
    let end = total.min(start + max_visible - 1);
    start..=end
}

/// Current page plus what it was last synced against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    page: usize,
    count: usize,
    view: TaskView,
    viewport: ViewportClass,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self {
            page: 1,
            count: 0,
            view: TaskView::default(),
            viewport: ViewportClass::default(),
        }
    }
}

impl PaginationCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Page to render for the given count and layout. Page 1 whenever they
    /// differ from what the cursor was last synced against, so a stale page
    /// is never shown before [`sync`](Self::sync) catches up.
    pub fn page_for(&self, count: usize, view: TaskView, viewport: ViewportClass) -> usize {
        if count == self.count && view == self.view && viewport == self.viewport {
            self.page
        } else {
            1
        }
    }

    /// Record the current item count and layout. Any change sends the
    /// cursor back to page 1. Returns whether a reset happened.
    pub fn sync(&mut self, count: usize, view: TaskView, viewport: ViewportClass) -> bool {
        let changed = count != self.count || view != self.view || viewport != self.viewport;
        self.count = count;
        self.view = view;
        self.viewport = viewport;
        if changed {
            self.page = 1;
        }
        changed
    }

    /// Jump to `page`, clamped into `[1, max(total, 1)]`
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, total.max(1));
    }

    pub fn next(&mut self, total: usize) {
        self.go_to(self.page + 1, total);
    }

    pub fn prev(&mut self, total: usize) {
        self.go_to(self.page.saturating_sub(1), total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_twenty_three_items_three_pages() {
        let items = numbers(23);
        let last = paginate(&items, 3, 10);
        assert_eq!(last.total_pages, 3);
        assert_eq!(last.items, &[21, 22, 23]);
        assert_eq!((last.start_index, last.end_index), (20, 23));

        let first = paginate(&items, 1, 10);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.items[0], 1);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items = numbers(23);
        let beyond = paginate(&items, 4, 10);
        assert!(beyond.is_empty());
        assert_eq!(beyond.total_pages, 3);
        assert_eq!((beyond.start_index, beyond.end_index), (23, 23));

        let far = paginate(&items, usize::MAX, 10);
        assert!(far.is_empty());
    }

    #[test]
    fn test_empty_sequence_has_zero_pages() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, 1, 5);
        assert_eq!(page.total_pages, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn test_page_zero_reads_as_first() {
        let items = numbers(7);
        assert_eq!(paginate(&items, 0, 5).items, paginate(&items, 1, 5).items);
    }

    #[test]
    fn test_visible_pages_window() {
        assert_eq!(visible_pages(1, 4, 5), 1..=4);
        assert_eq!(visible_pages(1, 10, 5), 1..=5);
        assert_eq!(visible_pages(6, 10, 5), 4..=8);
        assert_eq!(visible_pages(10, 10, 5), 8..=10);
        assert_eq!(visible_pages(2, 10, 3), 1..=3);
        assert_eq!(visible_pages(7, 10, 3), 6..=8);
        assert!(visible_pages(1, 0, 5).is_empty());
    }

    #[test]
    fn test_window_never_leaves_bounds() {
        for total in 1..=12 {
            for current in 1..=total {
                for max in [3, 5] {
                    let window = visible_pages(current, total, max);
                    assert!(*window.start() >= 1);
                    assert!(*window.end() <= total);
                    assert!(window.contains(&current));
                }
            }
        }
    }

    #[test]
    fn test_cursor_resets_when_count_shrinks() {
        let mut cursor = PaginationCursor::new();
        cursor.sync(23, TaskView::Cards, ViewportClass::Wide);
        cursor.go_to(3, total_pages(23, 10));
        assert_eq!(cursor.page(), 3);

        // a filter narrows the result to 4 tasks; page 3 would render empty
        assert!(cursor.sync(4, TaskView::Cards, ViewportClass::Wide));
        assert_eq!(cursor.page(), 1);
        assert!(!paginate(&numbers(4), cursor.page(), 10).is_empty());
    }

    #[test]
    fn test_page_for_ignores_stale_page_before_sync() {
        let mut cursor = PaginationCursor::new();
        cursor.sync(23, TaskView::Cards, ViewportClass::Wide);
        cursor.go_to(3, total_pages(23, 10));
        assert_eq!(cursor.page_for(23, TaskView::Cards, ViewportClass::Wide), 3);

        // filter shrank the result, cursor not yet synced
        let shown = cursor.page_for(4, TaskView::Cards, ViewportClass::Wide);
        assert_eq!(shown, 1);
        assert!(!paginate(&numbers(4), shown, 10).is_empty());
        assert_eq!(cursor.page_for(23, TaskView::List, ViewportClass::Wide), 1);
    }

    #[test]
    fn test_cursor_resets_on_view_or_viewport_change() {
        let mut cursor = PaginationCursor::new();
        cursor.sync(30, TaskView::Cards, ViewportClass::Narrow);
        cursor.go_to(4, 6);
        assert!(!cursor.sync(30, TaskView::Cards, ViewportClass::Narrow));
        assert_eq!(cursor.page(), 4);

        cursor.sync(30, TaskView::List, ViewportClass::Narrow);
        assert_eq!(cursor.page(), 1);

        cursor.go_to(2, 6);
        cursor.sync(30, TaskView::List, ViewportClass::Wide);
        assert_eq!(cursor.page(), 1);
    }

    #[test]
    fn test_cursor_navigation_clamps() {
        let mut cursor = PaginationCursor::new();
        cursor.prev(3);
        assert_eq!(cursor.page(), 1);
        cursor.go_to(9, 3);
        assert_eq!(cursor.page(), 3);
        cursor.next(3);
        assert_eq!(cursor.page(), 3);
        cursor.go_to(5, 0);
        assert_eq!(cursor.page(), 1);
    }
}
