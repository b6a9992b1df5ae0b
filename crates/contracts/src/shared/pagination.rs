use serde::{Deserialize, Serialize};

/// Number of page buttons shown around the current page
pub const WINDOW_WIDTH: usize = 3;

/// Pagination block of a list envelope. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl Pagination {
    pub fn has_prev(&self) -> bool {
        has_prev(self.current_page)
    }

    pub fn has_next(&self) -> bool {
        has_next(self.current_page, self.total_pages)
    }

    pub fn window(&self) -> Vec<PageItem> {
        page_window(self.current_page, self.total_pages)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

pub fn has_prev(current: usize) -> bool {
    current > 1
}

pub fn has_next(current: usize, total: usize) -> bool {
    current < total
}

/// Windowed page sequence for the pagination control.
///
/// All pages when `total <= WINDOW_WIDTH`; otherwise `WINDOW_WIDTH` pages
/// centered on `current`, shifted to stay inside `[1, total]`, with an
/// ellipsis on each side that does not touch an edge.
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    if total <= WINDOW_WIDTH {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let half = WINDOW_WIDTH / 2;
    let start = current
        .saturating_sub(half)
        .max(1)
        .min(total - WINDOW_WIDTH + 1);
    let end = start + WINDOW_WIDTH - 1;

    let mut items = Vec::with_capacity(WINDOW_WIDTH + 2);
    if start > 1 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total {
        items.push(PageItem::Ellipsis);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    fn pages(items: &[PageItem]) -> Vec<usize> {
        items
            .iter()
            .filter_map(|i| match i {
                Page(n) => Some(*n),
                Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_small_totals_show_every_page() {
        for total in 1..=WINDOW_WIDTH {
            for current in 1..=total {
                let window = page_window(current, total);
                assert_eq!(window.len(), total);
                assert!(!window.contains(&Ellipsis));
            }
        }
    }

    #[test]
    fn test_window_always_contains_current() {
        for total in 4..=25 {
            for current in 1..=total {
                let window = page_window(current, total);
                let shown = pages(&window);
                assert!(shown.contains(&current), "page {} of {}", current, total);
                assert_eq!(shown.len(), WINDOW_WIDTH);
                assert!(shown.iter().all(|p| (1..=total).contains(p)));
            }
        }
    }

    #[test]
    fn test_ellipses_at_edges() {
        assert_eq!(page_window(1, 10), vec![Page(1), Page(2), Page(3), Ellipsis]);
        assert_eq!(
            page_window(5, 10),
            vec![Ellipsis, Page(4), Page(5), Page(6), Ellipsis]
        );
        assert_eq!(page_window(10, 10), vec![Ellipsis, Page(8), Page(9), Page(10)]);
        assert_eq!(page_window(2, 4), vec![Page(1), Page(2), Page(3), Ellipsis]);
        assert_eq!(page_window(3, 4), vec![Ellipsis, Page(2), Page(3), Page(4)]);
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(page_window(0, 6), page_window(1, 6));
        assert_eq!(page_window(42, 6), page_window(6, 6));
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn test_prev_next() {
        let p = Pagination {
            current_page: 1,
            total_pages: 3,
            total_items: 30,
        };
        assert!(!p.has_prev());
        assert!(p.has_next());

        let last = Pagination { current_page: 3, ..p };
        assert!(last.has_prev());
        assert!(!last.has_next());
    }
}
