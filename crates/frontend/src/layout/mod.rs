pub mod admin;
pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Storefront shell: header, routed content, footer
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">{children()}</main>
            <footer::Footer />
        </div>
    }
}
