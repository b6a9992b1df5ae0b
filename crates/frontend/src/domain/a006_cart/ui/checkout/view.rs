use super::view_model::CheckoutViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::components::form_field::{TextAreaField, TextField};
use crate::shared::toast::use_toast;
use contracts::domain::a006_cart::aggregate::{fields, NOTE_MAX_CHARS};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CheckoutPanel(
    /// Receives the confirmation text once the order is placed
    on_placed: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let vm = CheckoutViewModel::new();
    let errors = vm.errors;

    let note_hint = Signal::derive(move || {
        let left = vm.form.with(|f| f.note_chars_left());
        Some(format!("{} of {} characters left", left, NOTE_MAX_CHARS))
    });

    view! {
        <section class="checkout">
            <h2>"Checkout"</h2>
            <form class="details-form" on:submit=|ev| ev.prevent_default()>
                <TextField
                    label="Full name"
                    field=fields::FULL_NAME
                    value=Signal::derive(move || vm.form.with(|f| f.full_name.clone()))
                    on_input=Callback::new(move |v: String| vm.update_field(|f| f.full_name = v))
                    errors=errors
                    required=true
                />
                <TextField
                    label="Phone"
                    field=fields::PHONE
                    value=Signal::derive(move || vm.form.with(|f| f.phone.clone()))
                    on_input=Callback::new(move |v: String| vm.update_field(|f| f.phone = v))
                    errors=errors
                    input_type="tel"
                    placeholder="+1 555 010 2030"
                    required=true
                />
                <TextField
                    label="Address"
                    field=fields::ADDRESS
                    value=Signal::derive(move || vm.form.with(|f| f.address.clone()))
                    on_input=Callback::new(move |v: String| vm.update_field(|f| f.address = v))
                    errors=errors
                    required=true
                />
                <TextAreaField
                    label="Note"
                    field=fields::NOTE
                    value=Signal::derive(move || vm.form.with(|f| f.note.clone()))
                    on_input=Callback::new(move |v: String| vm.update_field(|f| f.note = v))
                    errors=errors
                    placeholder="Delivery instructions (optional)"
                    hint=note_hint
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        if let Some(message) = vm.submit(ctx, toast) {
                            on_placed.run(message);
                        }
                    }
                >
                    "Place order"
                </Button>
            </form>
        </section>
    }
}
