use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU: [MenuItem; 3] = [
    MenuItem {
        href: "/admin/categories",
        label: "Categories",
        icon: "categories",
    },
    MenuItem {
        href: "/admin/discounts",
        label: "Discounts",
        icon: "discounts",
    },
    MenuItem {
        href: "/admin/tags",
        label: "Tags",
        icon: "tags",
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside data-zone="left" class="sidebar">
            <div class="sidebar__title">"Back office"</div>
            <nav class="sidebar__menu">
                {MENU
                    .into_iter()
                    .map(|item| view! {
                        <A href=item.href attr:class="sidebar__item">
                            <span class="sidebar__icon">{icon(item.icon)}</span>
                            <span class="sidebar__label">{item.label}</span>
                        </A>
                    })
                    .collect_view()}
            </nav>
            <A href="/" attr:class="sidebar__back">"Back to store"</A>
        </aside>
    }
}
