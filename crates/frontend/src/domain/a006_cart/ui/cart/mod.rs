use super::checkout::CheckoutPanel;
use crate::domain::a003_discount::api::apply_discount;
use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::toast::use_toast;
use contracts::domain::a003_discount::aggregate::ApplyDiscountRequest;
use contracts::domain::a006_cart::aggregate::{Cart, CartLine};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_app_context();
    let cart = ctx.cart;
    let is_empty = Signal::derive(move || cart.with(Cart::is_empty));
    let placed = RwSignal::new(None::<String>);
    let on_placed = Callback::new(move |message: String| placed.set(Some(message)));

    view! {
        <div class="page cart">
            <PageHeader title="Your cart">
                {()}
            </PageHeader>
            {move || placed.get().filter(|_| is_empty.get()).map(|msg| view! { <div class="checkout__placed">{msg}</div> })}
            <Show
                when=move || !is_empty.get()
                fallback=|| view! {
                    <div class="cart__empty">
                        <p>"Your cart is empty."</p>
                        <A href="/products">"Continue shopping"</A>
                    </div>
                }
            >
                <div class="cart__layout">
                    <div class="cart__lines">
                        <For
                            each=move || cart.get().lines
                            key=|line: &CartLine| (line.product_id, line.quantity)
                            children=|line: CartLine| view! { <CartLineRow line=line /> }
                        />
                    </div>
                    <CartSummary />
                </div>
                <CheckoutPanel on_placed=on_placed />
            </Show>
        </div>
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let ctx = use_app_context();
    let id = line.product_id;
    let href = format!("/products/{}", id);
    let name = line.name.clone();

    view! {
        <div class="cart-line">
            {line.image.clone().map(|src| view! { <img class="cart-line__image" src=src alt="" /> })}
            <div class="cart-line__info">
                <A href=href>{name}</A>
                <div class="cart-line__price">{format_money(line.unit_price)}</div>
            </div>
            <input
                class="quantity__input"
                type="number"
                min="1"
                max=line.stock.to_string()
                prop:value=line.quantity.to_string()
                on:change=move |ev| {
                    let quantity = event_target_value(&ev).trim().parse::<u32>().unwrap_or(1);
                    ctx.cart.update(|c| c.set_quantity(id, quantity));
                }
            />
            <div class="cart-line__total">{format_money(line.line_total())}</div>
            <button
                class="icon-button icon-button--danger"
                title="Remove"
                on:click=move |_| ctx.cart.update(|c| c.remove(id))
            >
                {icon("delete")}
            </button>
        </div>
    }
}

#[component]
fn CartSummary() -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let cart = ctx.cart;

    let code = RwSignal::new(String::new());
    let applying = RwSignal::new(false);
    let code_error = RwSignal::new(None::<String>);

    let apply = move |_| {
        let entered = code.get_untracked().trim().to_uppercase();
        if entered.is_empty() {
            code_error.set(Some("Enter a discount code".to_string()));
            return;
        }
        let request = cart.with_untracked(|c| ApplyDiscountRequest {
            code: entered,
            order_value: c.subtotal(),
            product_ids: c.product_ids(),
        });
        code_error.set(None);
        applying.set(true);
        spawn_local(async move {
            let result = apply_discount(&request).await;
            let _ = applying.try_set(false);
            match result {
                Ok(application) => {
                    let message = format!(
                        "Code {} applied: -{}",
                        application.code,
                        format_money(application.discount_amount)
                    );
                    let accepted = cart
                        .try_update(|c| c.accept_discount(&request, application))
                        .unwrap_or(false);
                    if accepted {
                        toast.success(message);
                    } else {
                        toast.info("Cart changed while the code was checked; apply it again");
                    }
                }
                Err(e) => {
                    let _ = code_error.try_set(Some(e.clone()));
                    toast.error(e);
                }
            }
        });
    };

    let remove_discount = move |_| cart.update(|c| c.discount = None);

    view! {
        <aside class="cart-summary">
            <div class="cart-summary__row">
                <span>"Subtotal"</span>
                <span>{move || format_money(cart.with(Cart::subtotal))}</span>
            </div>

            {move || cart.with(|c| c.discount.clone()).map(|d| view! {
                <div class="cart-summary__row cart-summary__row--discount">
                    <span>{format!("Discount ({})", d.code)}</span>
                    <span>
                        {move || format!("-{}", format_money(cart.with(Cart::discount_amount)))}
                        <button class="icon-button" title="Remove code" on:click=remove_discount>
                            {icon("close")}
                        </button>
                    </span>
                </div>
            })}

            <div class="cart-summary__code">
                <Input value=code placeholder="Discount code" />
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || applying.get())
                    on_click=apply
                >
                    "Apply"
                </Button>
            </div>
            {move || code_error.get().map(|e| view! { <div class="form-group__error">{e}</div> })}

            <div class="cart-summary__row cart-summary__row--total">
                <span>"Total"</span>
                <span>{move || format_money(cart.with(Cart::total))}</span>
            </div>
        </aside>
    }
}
