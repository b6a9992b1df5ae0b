pub mod sidebar;

use leptos::prelude::*;
use sidebar::Sidebar;

/// Back-office frame: navigation sidebar next to the routed admin screen
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    view! {
        <div class="admin-layout">
            <Sidebar />
            <section class="admin-layout__content">{children()}</section>
        </div>
    }
}
