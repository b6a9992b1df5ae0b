use super::view_model::ProductDetailsViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::components::review_item::{star_row, ReviewItem};
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::toast::use_toast;
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder.png";

#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let vm = ProductDetailsViewModel::new();

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id"));
        vm.load(ctx, id);
    });

    let loading = ctx.products.loading();

    view! {
        <div class="page product-details">
            <A href="/products" attr:class="back-link">
                {icon("chevron-left")}
                "Back to shop"
            </A>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=move || loading.get() && vm.product.with(Option::is_none)>
                <div class="loading"><Spinner /></div>
            </Show>

            {move || vm.product.get().map(|product| view! {
                <ProductDetailsBody product=product vm=vm />
            })}
        </div>
    }
}

#[component]
fn ProductDetailsBody(product: Product, vm: ProductDetailsViewModel) -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();

    let images = if product.images.is_empty() {
        vec![PLACEHOLDER_IMAGE.to_string()]
    } else {
        product.images.clone()
    };
    let gallery = StoredValue::new(images);
    let main_image = move || {
        gallery.with_value(|imgs| {
            imgs.get(vm.selected_image.get())
                .or_else(|| imgs.first())
                .cloned()
                .unwrap_or_default()
        })
    };

    let rating = product.average_rating();
    let review_count = product.reviews.len();
    let in_stock = product.in_stock();
    let stock = product.stock;

    view! {
        <div class="product-details__layout">
            <div class="gallery">
                <img class="gallery__main" src=main_image alt=product.name.clone() />
                <div class="gallery__thumbs">
                    {gallery
                        .get_value()
                        .into_iter()
                        .enumerate()
                        .map(|(index, src)| {
                            let class = move || {
                                if vm.selected_image.get() == index {
                                    "gallery__thumb gallery__thumb--active"
                                } else {
                                    "gallery__thumb"
                                }
                            };
                            view! {
                                <button class=class on:click=move |_| vm.selected_image.set(index)>
                                    <img src=src alt="" />
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="product-details__info">
                {product.brand_name().map(|b| view! { <div class="product-details__brand">{b.to_string()}</div> })}
                <h1 class="product-details__name">{product.name.clone()}</h1>
                {product.category_name().map(|c| view! { <div class="product-details__category">{c.to_string()}</div> })}

                <div class="product-details__rating">
                    {match rating {
                        Some(avg) => format!(
                            "{} {:.1} ({} reviews)",
                            star_row(avg.round() as u8),
                            avg,
                            review_count
                        ),
                        None => "No reviews yet".to_string(),
                    }}
                </div>

                <div class="product-details__price">
                    {format_money(product.price)}
                    {product.sale.then(|| view! { <Badge color=BadgeColor::Danger>"Sale"</Badge> })}
                </div>

                <div class="product-details__stock">
                    {if in_stock { format!("{} in stock", stock) } else { "Out of stock".to_string() }}
                </div>

                {product.description.clone().map(|d| view! { <p class="product-details__description">{d}</p> })}

                <div class="quantity">
                    <button class="quantity__step" on:click=move |_| vm.step_quantity(-1) disabled=!in_stock>"−"</button>
                    <input
                        class="quantity__input"
                        type="number"
                        min="1"
                        max=stock.to_string()
                        prop:value=move || vm.quantity.get().to_string()
                        on:change=move |ev| vm.set_quantity(&event_target_value(&ev))
                        disabled=!in_stock
                    />
                    <button class="quantity__step" on:click=move |_| vm.step_quantity(1) disabled=!in_stock>"+"</button>
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=!in_stock
                    on_click=move |_| vm.add_to_cart(ctx, toast)
                >
                    {icon("cart")}
                    "Add to cart"
                </Button>
            </div>
        </div>

        <section class="reviews">
            <h2>"Reviews"</h2>
            {if product.reviews.is_empty() {
                view! { <p class="empty">"Be the first to review this product."</p> }.into_any()
            } else {
                product
                    .reviews
                    .iter()
                    .cloned()
                    .map(|review| view! { <ReviewItem review=review /> })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}
