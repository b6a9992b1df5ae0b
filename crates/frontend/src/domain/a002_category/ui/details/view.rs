use super::view_model::CategoryDetailsViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::components::form_field::{TextAreaField, TextField};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a002_category::aggregate::{fields, CategoryStatus};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

const LIST_PATH: &str = "/admin/categories";

#[component]
pub fn CategoryDetails() -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let params = use_params_map();
    let vm = CategoryDetailsViewModel::new(ctx.categories);

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id"));
        vm.load_if_needed(id);
    });

    let navigate = use_navigate();
    let on_saved = Callback::new({
        let navigate = navigate.clone();
        move |_| navigate(LIST_PATH, Default::default())
    });

    let title = Signal::derive(move || {
        if vm.is_edit_mode() {
            "Edit category".to_string()
        } else {
            "New category".to_string()
        }
    });
    let errors = vm.errors;

    view! {
        <div class="page details-container">
            <PageHeader title=title>
                {()}
            </PageHeader>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            // Enter in a field submits through the Save button
            <form class="details-form" on:submit=|ev| ev.prevent_default()>
                <TextField
                    label="Name"
                    field=fields::NAME
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| vm.update_field(|f| f.name = v))
                    errors=errors
                    placeholder="e.g. Shoes"
                    required=true
                />
                <TextAreaField
                    label="Description"
                    field=fields::DESCRIPTION
                    value=Signal::derive(move || vm.form.with(|f| f.description.clone()))
                    on_input=Callback::new(move |v: String| vm.update_field(|f| f.description = v))
                    errors=errors
                    placeholder="Optional, up to 500 characters"
                />
                <TextField
                    label="Image URL"
                    field=fields::IMAGE
                    value=Signal::derive(move || vm.form.with(|f| f.image.clone()))
                    on_input=Callback::new(move |v: String| vm.update_field(|f| f.image = v))
                    errors=errors
                    placeholder="https://… or /static/…"
                />

                <div class="form-group">
                    <label for="status">"Status"</label>
                    <select
                        id="status"
                        prop:value=move || vm.form.with(|f| f.status.as_str())
                        on:change=move |ev| {
                            let status = CategoryStatus::parse(&event_target_value(&ev));
                            vm.update_field(|f| f.status = status);
                        }
                    >
                        {[CategoryStatus::Active, CategoryStatus::Inactive]
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.saving.get())
                        on_click=move |_| vm.save_command(toast, on_saved)
                    >
                        {icon("save")}
                        {move || if vm.is_edit_mode() { "Save" } else { "Create" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| navigate(LIST_PATH, Default::default())
                    >
                        {icon("cancel")}
                        "Cancel"
                    </Button>
                </div>
            </form>
        </div>
    }
}
