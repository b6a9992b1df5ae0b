use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::product_card::ProductCard;
use crate::shared::config::app_config;
use crate::shared::icons::icon;
use crate::shared::state::list_state::{create_state, total_pages};
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ProductListPage() -> impl IntoView {
    let ctx = use_app_context();
    let products = ctx.products;
    let page_size = app_config().storefront_page_size;

    let state = create_state();
    let search_input = RwSignal::new(String::new());

    Effect::new(move |_| {
        let current = state.get();
        spawn_local(async move {
            // failures land in the slice error
            let _ = products
                .fetch_list(current.page, current.search, page_size)
                .await;
        });
    });

    let apply_search = move || {
        let raw = search_input.get_untracked();
        state.maybe_update(|s| s.apply_search(&raw));
    };

    let total = Signal::derive(move || total_pages(products.pagination().get()));
    let current_page = Signal::derive(move || state.with(|s| s.page));
    let on_page_change = Callback::new(move |page: usize| {
        let total = total.get_untracked();
        state.maybe_update(|s| s.go_to(page, total));
    });

    view! {
        <div class="page product-list">
            <PageHeader title="Shop" subtitle="All products">
                <form
                    class="search-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        apply_search();
                    }
                >
                    <Input value=search_input placeholder="Search products" />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                        {icon("search")}
                        "Search"
                    </Button>
                </form>
            </PageHeader>

            {move || products.error().get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || !products.loading().get()
                fallback=|| view! { <div class="loading"><Spinner /></div> }
            >
                <Show
                    when=move || products.items().with(|items| !items.is_empty())
                    fallback=|| view! { <p class="empty">"No products found."</p> }
                >
                    <div class="product-grid">
                        <For
                            each=move || products.items().get()
                            key=|p: &Product| p.id
                            children=|product: Product| view! { <ProductCard product=product /> }
                        />
                    </div>
                </Show>
            </Show>

            <PaginationControls
                current_page=current_page
                total_pages=total
                on_page_change=on_page_change
            />
        </div>
    }
}
