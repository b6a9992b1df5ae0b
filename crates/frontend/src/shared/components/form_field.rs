use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

/// Labelled input with its inline validation message
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    /// Field key in [`FieldErrors`]
    field: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] errors: Signal<FieldErrors>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let error = move || errors.with(|e| e.get(field).map(str::to_string));
    let class = move || {
        if error().is_some() {
            "form-group form-group--invalid"
        } else {
            "form-group"
        }
    };

    view! {
        <div class=class>
            <label for=field>
                {label}
                {required.then(|| view! { <span class="form-group__required">" *"</span> })}
            </label>
            <input
                type=input_type.unwrap_or("text")
                id=field
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                placeholder=placeholder
            />
            {move || error().map(|e| view! { <div class="form-group__error">{e}</div> })}
        </div>
    }
}

/// Multi-line variant of [`TextField`]
#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    field: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] errors: Signal<FieldErrors>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] hint: MaybeProp<String>,
) -> impl IntoView {
    let error = move || errors.with(|e| e.get(field).map(str::to_string));

    view! {
        <div class=move || if error().is_some() { "form-group form-group--invalid" } else { "form-group" }>
            <label for=field>{label}</label>
            <textarea
                id=field
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                placeholder=placeholder
            />
            {move || hint.get().map(|h| view! { <div class="form-group__hint">{h}</div> })}
            {move || error().map(|e| view! { <div class="form-group__error">{e}</div> })}
        </div>
    }
}
