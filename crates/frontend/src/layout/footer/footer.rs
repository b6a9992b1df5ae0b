use crate::shared::date_utils::today_iso;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let year = today_iso().get(..4).unwrap_or_default().to_string();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__links">
                <A href="/products">"Shop"</A>
                <A href="/blog">"Blog"</A>
                <A href="/cart">"Cart"</A>
            </div>
            <span class="footer__copy">{format!("© {} Storefront", year)}</span>
        </footer>
    }
}
