//! Reactive feature slice
//!
//! Wraps [`SliceState`] in a signal and exposes the five async operations of
//! a CRUD resource. Each operation dispatches `Pending`, awaits the API and
//! dispatches the fulfilled or rejected action; the reducer lives in
//! `contracts::shared::slice`.

use crate::shared::api_utils::{item_path, list_path};
use crate::shared::http;
use contracts::shared::api::{ApiError, ListPayload, ListQuery};
use contracts::shared::pagination::Pagination;
use contracts::shared::slice::{Entity, SliceAction, SliceState};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// An entity served by a REST collection
pub trait Resource: Entity + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection path, e.g. `/api/tags`
    const PATH: &'static str;
    /// Name used in log lines
    const LABEL: &'static str;
}

/// A resource the back office can create, update and delete. Read-only
/// resources do not implement it, so their slices only offer the fetches.
pub trait WritableResource: Resource {
    /// Body of create/update requests
    type Draft: Serialize;
}

pub struct Slice<R: Resource> {
    state: RwSignal<SliceState<R>>,
}

impl<R: Resource> Clone for Slice<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for Slice<R> {}

impl<R: Resource> Default for Slice<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> Slice<R> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SliceState::default()),
        }
    }

    pub fn state(&self) -> ReadSignal<SliceState<R>> {
        self.state.read_only()
    }

    pub fn items(&self) -> Signal<Vec<R>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items.clone()))
    }

    pub fn item(&self) -> Signal<Option<R>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.item.clone()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    pub fn pagination(&self) -> Signal<Option<Pagination>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.pagination))
    }

    fn dispatch(&self, action: SliceAction<R>) {
        // a disposed signal only means nobody is listening any more
        let _ = self.state.try_update(|s| s.reduce(action));
    }

    fn begin(&self, operation: &str) {
        let in_flight = self.state.try_with_untracked(|s| s.loading).unwrap_or(false);
        if in_flight {
            // overlapping requests are neither de-duplicated nor cancelled
            log::warn!(
                "{}: {} started while another request is in flight; the later response wins",
                R::LABEL,
                operation
            );
        }
        log::debug!("{}: {}", R::LABEL, operation);
        self.dispatch(SliceAction::Pending);
    }

    fn fail(&self, operation: &str, error: ApiError) -> String {
        let message = error.to_string();
        log::warn!("{}: {} failed: {}", R::LABEL, operation, message);
        self.dispatch(SliceAction::Rejected(message.clone()));
        message
    }

    pub async fn fetch_list(
        self,
        page: usize,
        search: String,
        size: usize,
    ) -> Result<ListPayload<R>, String> {
        self.begin("fetch_list");
        let query = ListQuery::new(page, &search, size);
        match http::get::<Vec<R>>(&list_path(R::PATH, &query)).await {
            Ok(payload) => {
                let items = payload.data.unwrap_or_default();
                let pagination = payload.pagination;
                self.dispatch(SliceAction::ListFulfilled {
                    items: items.clone(),
                    pagination,
                });
                Ok(ListPayload { items, pagination })
            }
            Err(e) => Err(self.fail("fetch_list", e)),
        }
    }

    pub async fn fetch_by_id(self, id: i64) -> Result<R, String> {
        self.begin("fetch_by_id");
        let result = http::get::<R>(&item_path(R::PATH, id))
            .await
            .and_then(|p| p.require_data());
        match result {
            Ok(item) => {
                self.dispatch(SliceAction::ItemFulfilled(item.clone()));
                Ok(item)
            }
            Err(e) => Err(self.fail("fetch_by_id", e)),
        }
    }

}

impl<R: WritableResource> Slice<R> {
    pub async fn add(self, draft: R::Draft) -> Result<R, String> {
        self.begin("add");
        let result = http::post::<_, R>(R::PATH, &draft)
            .await
            .and_then(|p| p.require_data());
        match result {
            Ok(item) => {
                self.dispatch(SliceAction::Created(item.clone()));
                Ok(item)
            }
            Err(e) => Err(self.fail("add", e)),
        }
    }

    pub async fn update(self, id: i64, draft: R::Draft) -> Result<R, String> {
        self.begin("update");
        let result = http::put::<_, R>(&item_path(R::PATH, id), &draft)
            .await
            .and_then(|p| p.require_data());
        match result {
            Ok(item) => {
                self.dispatch(SliceAction::Updated(item.clone()));
                Ok(item)
            }
            Err(e) => Err(self.fail("update", e)),
        }
    }

    pub async fn delete(self, id: i64) -> Result<(), String> {
        self.begin("delete");
        match http::delete::<serde_json::Value>(&item_path(R::PATH, id)).await {
            Ok(_) => {
                self.dispatch(SliceAction::Deleted(id));
                Ok(())
            }
            Err(e) => Err(self.fail("delete", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::Product;
    use contracts::domain::a002_category::aggregate::Category;
    use contracts::domain::a003_discount::aggregate::Discount;
    use contracts::domain::a004_tag::aggregate::Tag;
    use contracts::domain::a005_blog_post::aggregate::BlogPost;
    use std::any::type_name;

    fn draft_of<R: WritableResource>() -> &'static str {
        type_name::<R::Draft>()
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(<Product as Resource>::PATH, "/api/products");
        assert_eq!(<BlogPost as Resource>::PATH, "/api/blogs");
        assert_eq!(<Category as Resource>::PATH, "/api/categories");
        assert_eq!(<Discount as Resource>::PATH, "/api/discounts");
        assert_eq!(<Tag as Resource>::PATH, "/api/tags");
    }

    #[test]
    fn test_writable_resources_send_dtos() {
        assert!(draft_of::<Category>().ends_with("CategoryDto"));
        assert!(draft_of::<Discount>().ends_with("DiscountDto"));
        assert!(draft_of::<Tag>().ends_with("TagDto"));
    }
}
