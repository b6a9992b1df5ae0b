//! Add/edit form state shared by the back-office screens
//!
//! A [`FormViewModel`] owns the editable form, its inline field errors and
//! the save lifecycle. Saving goes through the entity's [`Slice`] so list
//! screens see created and updated records without refetching.

use super::slice::{Resource, Slice, WritableResource};
use crate::shared::toast::ToastService;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Editable counterpart of a resource
pub trait EntityForm: Clone + Default + Send + Sync + 'static {
    type Entity: WritableResource;

    fn from_entity(entity: &Self::Entity) -> Self;

    /// Validates every field and builds the request body
    fn validate(&self) -> Result<<Self::Entity as WritableResource>::Draft, FieldErrors>;
}

/// Field errors to show after an edit: only fields already flagged are
/// re-checked, so a field's error disappears once its input becomes valid
/// and untouched fields stay quiet until the next submit.
pub fn refresh_errors(shown: &FieldErrors, current: Result<(), FieldErrors>) -> FieldErrors {
    match current {
        Ok(()) => FieldErrors::new(),
        Err(mut next) => {
            next.retain_fields(shown);
            next
        }
    }
}

/// Route `:id` parameter: `Ok(None)` for the add route, `Err` with the raw
/// text when it is not a record id.
pub fn parse_route_id(raw: Option<&str>) -> Result<Option<i64>, &str> {
    match raw {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<i64>().map(Some).map_err(|_| raw),
    }
}

pub struct FormViewModel<F: EntityForm> {
    pub form: RwSignal<F>,
    pub errors: RwSignal<FieldErrors>,
    /// Load or save failure reported by the API
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub id: RwSignal<Option<i64>>,
    slice: Slice<F::Entity>,
}

impl<F: EntityForm> Clone for FormViewModel<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: EntityForm> Copy for FormViewModel<F> {}

impl<F: EntityForm> FormViewModel<F> {
    pub fn new(slice: Slice<F::Entity>) -> Self {
        Self {
            form: RwSignal::new(F::default()),
            errors: RwSignal::new(FieldErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            id: RwSignal::new(None),
            slice,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.get().is_some()
    }

    /// Loads the record for an edit route; a missing id means a new record.
    /// State from a previously loaded record is dropped first, so Save can
    /// never target an id the current route does not name.
    pub fn load_if_needed(&self, raw_id: Option<String>) {
        self.id.set(None);
        self.form.set(F::default());
        self.errors.set(FieldErrors::new());
        self.error.set(None);

        let id = match parse_route_id(raw_id.as_deref()) {
            Ok(Some(id)) => id,
            Ok(None) => return,
            Err(raw) => {
                let label = <F::Entity as Resource>::LABEL;
                self.error.set(Some(format!("{} #{} not found", label, raw)));
                return;
            }
        };

        self.id.set(Some(id));
        let vm = *self;
        spawn_local(async move {
            let result = vm.slice.fetch_by_id(id).await;
            // the route moved on while the request was in flight
            if vm.id.try_get_untracked().flatten() != Some(id) {
                return;
            }
            match result {
                Ok(entity) => {
                    let _ = vm.form.try_set(F::from_entity(&entity));
                }
                Err(e) => {
                    let _ = vm.error.try_set(Some(format!("Failed to load: {}", e)));
                }
            }
        });
    }

    pub fn update_field(&self, edit: impl FnOnce(&mut F)) {
        self.form.update(edit);
        if self.errors.with_untracked(FieldErrors::is_empty) {
            return;
        }
        let current = self.form.with_untracked(|f| f.validate().map(|_| ()));
        self.errors
            .update(|shown| *shown = refresh_errors(shown, current));
    }

    /// Validates, then creates or updates the record. Invalid forms never
    /// reach the network.
    pub fn save_command(&self, toast: ToastService, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let draft = match self.form.with_untracked(F::validate) {
            Ok(draft) => draft,
            Err(errors) => {
                log::debug!(
                    "{}: form has {} invalid fields",
                    <F::Entity as Resource>::LABEL,
                    errors.len()
                );
                self.errors.set(errors);
                return;
            }
        };
        self.errors.set(FieldErrors::new());
        self.error.set(None);
        self.saving.set(true);

        let vm = *self;
        let id = self.id.get_untracked();
        spawn_local(async move {
            let result = match id {
                Some(id) => vm.slice.update(id, draft).await,
                None => vm.slice.add(draft).await,
            };
            let _ = vm.saving.try_set(false);
            match result {
                Ok(_) => {
                    toast.success(if id.is_some() { "Changes saved" } else { "Created" });
                    on_saved.run(());
                }
                Err(e) => {
                    toast.error(e.clone());
                    let _ = vm.error.try_set(Some(e));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(fields: &[&'static str]) -> FieldErrors {
        let mut e = FieldErrors::new();
        for &f in fields {
            e.insert(f, format!("{} is invalid", f));
        }
        e
    }

    #[test]
    fn test_parse_route_id() {
        assert_eq!(parse_route_id(None), Ok(None));
        assert_eq!(parse_route_id(Some("12")), Ok(Some(12)));
        assert_eq!(parse_route_id(Some("abc")), Err("abc"));
        assert_eq!(parse_route_id(Some("")), Err(""));
    }

    #[test]
    fn test_refresh_errors_clears_fixed_field() {
        let shown = errors(&["name", "code"]);
        let refreshed = refresh_errors(&shown, Err(errors(&["code"])));
        assert!(!refreshed.contains("name"));
        assert!(refreshed.contains("code"));
    }

    #[test]
    fn test_refresh_errors_does_not_flag_new_fields() {
        let shown = errors(&["name"]);
        let refreshed = refresh_errors(&shown, Err(errors(&["name", "endDate"])));
        assert_eq!(refreshed.len(), 1);
        assert!(refresh_errors(&shown, Ok(())).is_empty());
    }
}
