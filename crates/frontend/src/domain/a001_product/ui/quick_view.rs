//! Modal preview opened from a product card

use crate::layout::global_context::use_app_context;
use crate::shared::components::review_item::star_row;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::toast::use_toast;
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn QuickViewModal() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.quick_view.get().map(|product| view! { <QuickViewContent product=product /> })}
    }
}

#[component]
fn QuickViewContent(product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();

    let close = move || ctx.close_quick_view();
    let href = format!("/products/{}", product.id);
    let in_stock = product.in_stock();
    let rating = product.average_rating();
    let stored = StoredValue::new(product.clone());

    let add_to_cart = move |_| {
        stored.with_value(|p| {
            if ctx.add_to_cart(p, 1) == 0 {
                toast.error(format!("No more {} in stock", p.name));
            } else {
                toast.success(format!("Added {} to cart", p.name));
            }
        });
        close();
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <div
                class="modal-frame quick-view"
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <button class="modal-close" on:click=move |_| close() title="Close">
                    {icon("close")}
                </button>
                <div class="quick-view__layout">
                    {product.main_image().map(|src| view! {
                        <img class="quick-view__image" src=src.to_string() alt=product.name.clone() />
                    })}
                    <div class="quick-view__info">
                        <h2>{product.name.clone()}</h2>
                        {rating.map(|avg| view! {
                            <div class="quick-view__rating">{star_row(avg.round() as u8)}</div>
                        })}
                        <div class="quick-view__price">{format_money(product.price)}</div>
                        {product.description.clone().map(|d| view! { <p>{d}</p> })}
                        <div class="quick-view__actions">
                            <button
                                class="button button--primary"
                                on:click=add_to_cart
                                disabled=!in_stock
                            >
                                {icon("cart")}
                                {if in_stock { "Add to cart" } else { "Out of stock" }}
                            </button>
                            <A href=href on:click=move |_| close()>
                                "View details"
                            </A>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
