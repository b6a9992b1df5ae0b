use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::toast::use_toast;
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use leptos_router::components::A;

const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder.png";

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();

    let href = format!("/products/{}", product.id);
    let image = product
        .main_image()
        .unwrap_or(PLACEHOLDER_IMAGE)
        .to_string();
    let in_stock = product.in_stock();
    let name = product.name.clone();
    let image_alt = name.clone();
    let price = format_money(product.price);
    let brand = product.brand_name().map(str::to_string);
    let sale = product.sale;

    let product_for_cart = product.clone();
    let add_to_cart = move |_| {
        if ctx.add_to_cart(&product_for_cart, 1) == 0 {
            toast.error(format!("No more {} in stock", product_for_cart.name));
        } else {
            toast.success(format!("Added {} to cart", product_for_cart.name));
        }
    };

    let product_for_view = StoredValue::new(product);
    let quick_view = move |_| {
        ctx.quick_view.set(Some(product_for_view.get_value()));
    };

    view! {
        <div class="product-card">
            <div class="product-card__media">
                <A href=href.clone()>
                    <img class="product-card__image" src=image alt=image_alt loading="lazy" />
                </A>
                {sale.then(|| view! { <span class="product-card__badge">"Sale"</span> })}
                <button class="product-card__quick-view" on:click=quick_view title="Quick view">
                    {icon("eye")}
                </button>
            </div>
            <div class="product-card__body">
                {brand.map(|b| view! { <div class="product-card__brand">{b}</div> })}
                <A href=href>
                    <h3 class="product-card__name">{name}</h3>
                </A>
                <div class="product-card__price">{price}</div>
                <button
                    class="button button--primary product-card__add"
                    on:click=add_to_cart
                    disabled=!in_stock
                >
                    {icon("cart")}
                    {if in_stock { "Add to cart" } else { "Out of stock" }}
                </button>
            </div>
        </div>
    }
}
