use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AdminHomePage() -> impl IntoView {
    let sections = [
        ("/admin/categories", "categories", "Categories", "Organise the catalogue"),
        ("/admin/discounts", "discounts", "Discounts", "Promotion codes and their limits"),
        ("/admin/tags", "tags", "Tags", "Labels for blog posts"),
    ];

    view! {
        <div class="page admin-home">
            <PageHeader title="Back office">
                {()}
            </PageHeader>
            <div class="admin-home__grid">
                {sections
                    .into_iter()
                    .map(|(href, icon_name, title, text)| view! {
                        <A href=href attr:class="admin-home__card">
                            {icon(icon_name)}
                            <h3>{title}</h3>
                            <p>{text}</p>
                        </A>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
