use crate::shared::icons::icon;
use contracts::shared::pagination::{has_next, has_prev, page_window, PageItem};
use leptos::prelude::*;

/// Windowed page navigation: Prev, up to three page buttons with ellipses, Next.
/// Pages are 1-based; nothing is rendered when `total_pages` is 0.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,

    #[prop(into)] total_pages: Signal<usize>,

    /// Called with the requested page
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 0 }>
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="pagination__btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if has_prev(page) {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || !has_prev(current_page.get())
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let current = current_page.get();
                    page_window(current, total_pages.get())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(n) => {
                                let class = if n == current {
                                    "pagination__btn pagination__btn--active"
                                } else {
                                    "pagination__btn"
                                };
                                view! {
                                    <button class=class on:click=move |_| on_page_change.run(n)>
                                        {n.to_string()}
                                    </button>
                                }
                                .into_any()
                            }
                            PageItem::Ellipsis => {
                                view! { <span class="pagination__ellipsis">"…"</span> }.into_any()
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination__btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if has_next(page, total_pages.get()) {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || !has_next(current_page.get(), total_pages.get())
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </nav>
        </Show>
    }
}
