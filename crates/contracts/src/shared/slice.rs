//! Slice state and reducer shared by every feature slice
//!
//! A slice stores the last API response verbatim. Overlapping requests are not
//! de-duplicated: whichever resolution is reduced last wins.

use super::pagination::Pagination;

/// Entities addressed by a numeric id
pub trait Entity {
    fn entity_id(&self) -> i64;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliceState<T> {
    pub items: Vec<T>,
    pub item: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub pagination: Option<Pagination>,
}

impl<T> Default for SliceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            item: None,
            loading: false,
            error: None,
            pagination: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SliceAction<T> {
    Pending,
    ListFulfilled {
        items: Vec<T>,
        pagination: Option<Pagination>,
    },
    ItemFulfilled(T),
    Created(T),
    Updated(T),
    Deleted(i64),
    Rejected(String),
}

impl<T: Entity + Clone> SliceState<T> {
    pub fn reduce(&mut self, action: SliceAction<T>) {
        match action {
            SliceAction::Pending => {
                self.loading = true;
                self.error = None;
                return;
            }
            SliceAction::ListFulfilled { items, pagination } => {
                self.items = items;
                if pagination.is_some() {
                    self.pagination = pagination;
                }
            }
            SliceAction::ItemFulfilled(item) => {
                self.item = Some(item);
            }
            SliceAction::Created(item) => {
                self.items.push(item.clone());
                self.item = Some(item);
            }
            SliceAction::Updated(item) => {
                let id = item.entity_id();
                if let Some(slot) = self.items.iter_mut().find(|i| i.entity_id() == id) {
                    *slot = item.clone();
                }
                self.item = Some(item);
            }
            SliceAction::Deleted(id) => {
                self.items.retain(|i| i.entity_id() != id);
                if self.item.as_ref().map(Entity::entity_id) == Some(id) {
                    self.item = None;
                }
            }
            SliceAction::Rejected(message) => {
                self.loading = false;
                self.error = Some(message);
                return;
            }
        }
        self.loading = false;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::decode_envelope;

    #[derive(Debug, Clone, PartialEq, serde::Deserialize)]
    struct Row {
        id: i64,
        name: String,
    }

    impl Entity for Row {
        fn entity_id(&self) -> i64 {
            self.id
        }
    }

    fn row(id: i64, name: &str) -> Row {
        Row {
            id,
            name: name.to_string(),
        }
    }

    fn loaded() -> SliceState<Row> {
        let mut state = SliceState::default();
        state.reduce(SliceAction::ListFulfilled {
            items: vec![row(1, "summer"), row(2, "winter")],
            pagination: Some(Pagination {
                current_page: 1,
                total_pages: 1,
                total_items: 2,
            }),
        });
        state
    }

    /// Runs a raw body through decoding and the reducer, the way a fetch_list does
    fn apply_list_response(state: &mut SliceState<Row>, ok: bool, status: u16, body: &str) {
        state.reduce(SliceAction::Pending);
        match decode_envelope::<Vec<Row>>(ok, status, body) {
            Ok(payload) => state.reduce(SliceAction::ListFulfilled {
                items: payload.data.unwrap_or_default(),
                pagination: payload.pagination,
            }),
            Err(e) => state.reduce(SliceAction::Rejected(e.to_string())),
        }
    }

    #[test]
    fn test_pending_sets_loading_and_keeps_data() {
        let mut state = loaded();
        state.error = Some("old".into());
        state.reduce(SliceAction::Pending);
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_success_envelope_fills_state() {
        let mut state = SliceState::default();
        let body = r#"{"status":"success","message":"","data":[{"id":7,"name":"sale"}],
            "pagination":{"currentPage":2,"totalPages":5,"totalItems":41}}"#;
        apply_list_response(&mut state, true, 200, body);

        assert_eq!(state.items, vec![row(7, "sale")]);
        assert_eq!(
            state.pagination,
            Some(Pagination {
                current_page: 2,
                total_pages: 5,
                total_items: 41
            })
        );
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_error_envelope_keeps_previous_items() {
        let mut state = loaded();
        let before = state.items.clone();
        apply_list_response(&mut state, true, 200, r#"{"status":"error","message":"X"}"#);

        assert_eq!(state.error.as_deref(), Some("X"));
        assert!(!state.loading);
        assert_eq!(state.items, before);
        assert!(state.pagination.is_some());
    }

    #[test]
    fn test_transport_failure_is_recorded() {
        let mut state = loaded();
        state.reduce(SliceAction::Pending);
        state.reduce(SliceAction::Rejected(
            crate::shared::api::ApiError::Transport("connection refused".into()).to_string(),
        ));
        assert_eq!(state.error.as_deref(), Some("Network error: connection refused"));
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_later_resolution_wins() {
        let mut state: SliceState<Row> = SliceState::default();
        state.reduce(SliceAction::Pending);
        state.reduce(SliceAction::Pending);
        state.reduce(SliceAction::ListFulfilled {
            items: vec![row(1, "page two")],
            pagination: None,
        });
        state.reduce(SliceAction::ListFulfilled {
            items: vec![row(2, "page one")],
            pagination: None,
        });
        assert_eq!(state.items, vec![row(2, "page one")]);
        assert!(!state.loading);
    }

    #[test]
    fn test_list_without_pagination_keeps_old_pagination() {
        let mut state = loaded();
        state.reduce(SliceAction::ListFulfilled {
            items: vec![],
            pagination: None,
        });
        assert!(state.items.is_empty());
        assert_eq!(state.pagination.map(|p| p.total_items), Some(2));
    }

    #[test]
    fn test_item_lifecycle() {
        let mut state = loaded();

        state.reduce(SliceAction::Created(row(3, "spring")));
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.item, Some(row(3, "spring")));

        state.reduce(SliceAction::Updated(row(2, "winter sale")));
        assert_eq!(state.items[1], row(2, "winter sale"));
        assert_eq!(state.item, Some(row(2, "winter sale")));

        state.reduce(SliceAction::Deleted(2));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.item, None);

        state.reduce(SliceAction::ItemFulfilled(row(1, "summer")));
        state.reduce(SliceAction::Deleted(3));
        assert_eq!(state.item, Some(row(1, "summer")));
    }
}
