//! Page and search of a paginated list screen

use contracts::shared::pagination::Pagination;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    /// 1-based
    pub page: usize,
    /// Committed search term, already trimmed
    pub search: String,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
        }
    }
}

impl ListState {
    /// Commits a new search term. A changed term restarts from page 1.
    /// Returns whether anything changed.
    pub fn apply_search(&mut self, raw: &str) -> bool {
        let term = raw.trim();
        if term == self.search {
            return false;
        }
        self.search = term.to_string();
        self.page = 1;
        true
    }

    /// Moves to `page`, clamped into `1..=total_pages`
    pub fn go_to(&mut self, page: usize, total_pages: usize) -> bool {
        let target = page.clamp(1, total_pages.max(1));
        if target == self.page {
            return false;
        }
        self.page = target;
        true
    }
}

pub fn create_state() -> RwSignal<ListState> {
    RwSignal::new(ListState::default())
}

pub fn total_pages(pagination: Option<Pagination>) -> usize {
    pagination.map_or(0, |p| p.total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_search_resets_page() {
        let mut state = ListState {
            page: 4,
            search: String::new(),
        };
        assert!(state.apply_search("  shoes "));
        assert_eq!(state.search, "shoes");
        assert_eq!(state.page, 1);

        state.page = 2;
        assert!(!state.apply_search("shoes"));
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut state = ListState::default();
        assert!(state.go_to(3, 5));
        assert_eq!(state.page, 3);
        assert!(state.go_to(9, 5));
        assert_eq!(state.page, 5);
        assert!(!state.go_to(5, 5));
        assert!(state.go_to(0, 5));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_repeated_page_or_search_is_no_change() {
        let mut state = ListState::default();
        assert!(state.apply_search("boots"));
        let before = state.clone();
        assert!(!state.go_to(1, 3));
        assert!(!state.apply_search(" boots "));
        assert_eq!(state, before);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(None), 0);
        let p = Pagination {
            current_page: 1,
            total_pages: 7,
            total_items: 70,
        };
        assert_eq!(total_pages(Some(p)), 7);
    }
}
