use crate::layout::global_context::use_app_context;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::app_config;
use crate::shared::icons::icon;
use crate::shared::state::list_state::{create_state, total_pages};
use crate::shared::toast::use_toast;
use contracts::domain::a004_tag::aggregate::Tag;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn TagList() -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let tags = ctx.tags;
    let page_size = app_config().admin_page_size;

    let state = create_state();
    let search_input = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<Tag>);
    let confirm_open = RwSignal::new(false);

    Effect::new(move |_| {
        let current = state.get();
        spawn_local(async move {
            let _ = tags.fetch_list(current.page, current.search, page_size).await;
        });
    });

    let apply_search = move || {
        let raw = search_input.get_untracked();
        state.maybe_update(|s| s.apply_search(&raw));
    };

    let confirm_delete = Callback::new(move |_| {
        confirm_open.set(false);
        if let Some(tag) = pending_delete.get_untracked() {
            pending_delete.set(None);
            spawn_local(async move {
                match tags.delete(tag.id).await {
                    Ok(()) => toast.success(format!("Tag \"{}\" deleted", tag.name)),
                    Err(e) => toast.error(e),
                }
            });
        }
    });

    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|t| format!("Delete tag \"{}\"?", t.name))
            .unwrap_or_default()
    });

    let total = Signal::derive(move || total_pages(tags.pagination().get()));
    let current_page = Signal::derive(move || state.with(|s| s.page));
    let on_page_change = Callback::new(move |page: usize| {
        let total = total.get_untracked();
        state.maybe_update(|s| s.go_to(page, total));
    });

    let navigate = use_navigate();

    view! {
        <div class="page admin-list">
            <PageHeader title="Tags" subtitle="Labels used by blog posts">
                <form
                    class="search-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        apply_search();
                    }
                >
                    <Input value=search_input placeholder="Search tags" />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| apply_search()>
                        {icon("search")}
                    </Button>
                </form>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| navigate("/admin/tags/new", Default::default())
                >
                    {icon("plus")}
                    "New tag"
                </Button>
            </PageHeader>

            {move || tags.error().get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th class="data-table__actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || tags.loading().get()>
                            <tr><td colspan="3" class="loading"><Spinner /></td></tr>
                        </Show>
                        <For
                            each=move || tags.items().get()
                            key=|t: &Tag| (t.id, t.name.clone())
                            children=move |tag: Tag| {
                                let edit_href = format!("/admin/tags/{}/edit", tag.id);
                                let for_delete = tag.clone();
                                view! {
                                    <tr>
                                        <td class="data-table__muted">{tag.id}</td>
                                        <td>{tag.name.clone()}</td>
                                        <td class="data-table__actions">
                                            <A href=edit_href attr:class="icon-button" attr:title="Edit">
                                                {icon("edit")}
                                            </A>
                                            <button
                                                class="icon-button icon-button--danger"
                                                title="Delete"
                                                on:click=move |_| {
                                                    pending_delete.set(Some(for_delete.clone()));
                                                    confirm_open.set(true);
                                                }
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || !tags.loading().get() && tags.items().with(Vec::is_empty)>
                    <p class="empty">"No tags yet."</p>
                </Show>
            </div>

            <PaginationControls
                current_page=current_page
                total_pages=total
                on_page_change=on_page_change
            />

            <ConfirmDialog
                open=confirm_open
                title="Delete tag"
                message=delete_message
                on_confirm=confirm_delete
            />
        </div>
    }
}
