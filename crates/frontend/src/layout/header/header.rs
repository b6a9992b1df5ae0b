use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/products", "Shop"),
    ("/blog", "Blog"),
    ("/admin", "Admin"),
];

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let cart_count = ctx.cart_count();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/">
                    <span class="header__title">"Storefront"</span>
                </A>
                <nav class="header__nav">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! {
                            <A href=href attr:class="header__link">{label}</A>
                        })
                        .collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                <A href="/cart" attr:class="header__cart">
                    {icon("cart")}
                    <Show when=move || { cart_count.get() > 0 }>
                        <span class="header__cart-count">{move || cart_count.get()}</span>
                    </Show>
                </A>
            </div>
        </header>
    }
}
