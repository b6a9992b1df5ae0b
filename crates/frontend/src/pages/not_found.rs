use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist or has moved."</p>
            <A href="/">"Back to the store"</A>
        </div>
    }
}
