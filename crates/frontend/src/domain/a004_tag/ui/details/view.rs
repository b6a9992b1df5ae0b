use super::view_model::TagDetailsViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::components::form_field::TextField;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a004_tag::aggregate::fields;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

const LIST_PATH: &str = "/admin/tags";

#[component]
pub fn TagDetails() -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let params = use_params_map();
    let vm = TagDetailsViewModel::new(ctx.tags);

    Effect::new(move |_| {
        vm.load_if_needed(params.with(|p| p.get("id")));
    });

    let navigate = use_navigate();
    let on_saved = Callback::new({
        let navigate = navigate.clone();
        move |_| navigate(LIST_PATH, Default::default())
    });

    let title = Signal::derive(move || {
        let title = if vm.is_edit_mode() { "Edit tag" } else { "New tag" };
        title.to_string()
    });

    view! {
        <div class="page details-container">
            <PageHeader title=title>
                {()}
            </PageHeader>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form class="details-form" on:submit=|ev| ev.prevent_default()>
                <TextField
                    label="Name"
                    field=fields::NAME
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| vm.update_field(|f| f.name = v))
                    errors=vm.errors
                    placeholder="e.g. summer"
                    required=true
                />

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
