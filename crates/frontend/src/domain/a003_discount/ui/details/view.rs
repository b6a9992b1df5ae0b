use super::view_model::{preview, DiscountDetailsViewModel, PREVIEW_ORDER_VALUE};
use crate::layout::global_context::use_app_context;
use crate::shared::components::form_field::TextField;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::toast::use_toast;
use contracts::domain::a003_discount::aggregate::{fields, DiscountForm, DiscountType};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

const LIST_PATH: &str = "/admin/discounts";

#[component]
pub fn DiscountDetails() -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let params = use_params_map();
    let vm = DiscountDetailsViewModel::new(ctx.discounts);

    Effect::new(move |_| {
        vm.load_if_needed(params.with(|p| p.get("id")));
    });

    let navigate = use_navigate();
    let on_saved = Callback::new({
        let navigate = navigate.clone();
        move |_| navigate(LIST_PATH, Default::default())
    });

    let title = Signal::derive(move || {
        let title = if vm.is_edit_mode() { "Edit discount" } else { "New discount" };
        title.to_string()
    });
    let errors = vm.errors;

    // value getter and setter for one text field of the form
    let text = move |get: fn(&DiscountForm) -> String| {
        Signal::derive(move || vm.form.with(get))
    };
    let setter = move |set: fn(&mut DiscountForm, String)| {
        Callback::new(move |v: String| vm.update_field(|f| set(f, v)))
    };

    let preview_text = move || {
        vm.form.with(|f| match preview(f, PREVIEW_ORDER_VALUE) {
            Some(amount) => format!(
                "On a {} order this discount takes off {}",
                format_money(PREVIEW_ORDER_VALUE),
                format_money(amount)
            ),
            None => "Fill in the form to see a preview".to_string(),
        })
    };

    view! {
        <div class="page details-container">
            <PageHeader title=title>
                {()}
            </PageHeader>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form class="details-form details-form--two-columns" on:submit=|ev| ev.prevent_default()>
                <TextField
                    label="Name"
                    field=fields::NAME
                    value=text(|f| f.name.clone())
                    on_input=setter(|f, v| f.name = v)
                    errors=errors
                    required=true
                />
                <TextField
                    label="Code"
                    field=fields::CODE
                    value=text(|f| f.code.clone())
                    on_input=setter(|f, v| f.code = v)
                    errors=errors
                    placeholder="SPRING-25"
                    required=true
                />

                <div class="form-group">
                    <label for="discountType">"Type"</label>
                    <select
                        id="discountType"
                        prop:value=move || vm.form.with(|f| f.discount_type.as_str())
                        on:change=move |ev| {
                            let kind = DiscountType::parse(&event_target_value(&ev));
                            vm.update_field(|f| f.discount_type = kind);
                        }
                    >
                        {[DiscountType::Percentage, DiscountType::Fixed]
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <TextField
                    label="Value"
                    field=fields::VALUE
                    value=text(|f| f.discount_value.clone())
                    on_input=setter(|f, v| f.discount_value = v)
                    errors=errors
                    input_type="number"
                    required=true
                />

                <TextField
                    label="Minimum order value"
                    field=fields::MIN_ORDER
                    value=text(|f| f.min_order_value.clone())
                    on_input=setter(|f, v| f.min_order_value = v)
                    errors=errors
                    input_type="number"
                />
                <TextField
                    label="Maximum discount"
                    field=fields::MAX_DISCOUNT
                    value=text(|f| f.max_discount_amount.clone())
                    on_input=setter(|f, v| f.max_discount_amount = v)
                    errors=errors
                    input_type="number"
                />
                <TextField
                    label="Maximum usage"
                    field=fields::MAX_USAGE
                    value=text(|f| f.max_usage.clone())
                    on_input=setter(|f, v| f.max_usage = v)
                    errors=errors
                    input_type="number"
                />
                <TextField
                    label="Product id"
                    field=fields::PRODUCT
                    value=text(|f| f.applicable_product_id.clone())
                    on_input=setter(|f, v| f.applicable_product_id = v)
                    errors=errors
                    input_type="number"
                    placeholder="All products"
                />

                <TextField
                    label="Start date"
                    field=fields::START_DATE
                    value=text(|f| f.start_date.clone())
                    on_input=setter(|f, v| f.start_date = v)
                    errors=errors
                    input_type="date"
                    required=true
                />
                <TextField
                    label="End date"
                    field=fields::END_DATE
                    value=text(|f| f.end_date.clone())
                    on_input=setter(|f, v| f.end_date = v)
                    errors=errors
                    input_type="date"
                    required=true
                />

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="isActive"
                        prop:checked=move || vm.form.with(|f| f.is_active)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            vm.update_field(|f| f.is_active = checked);
                        }
                    />
                    <label for="isActive">"Active"</label>
                </div>

                <div class="discount-preview">{preview_text}</div>

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
