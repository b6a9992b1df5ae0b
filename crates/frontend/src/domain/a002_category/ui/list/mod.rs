use crate::layout::global_context::use_app_context;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::app_config;
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::state::list_state::{create_state, total_pages};
use crate::shared::toast::use_toast;
use contracts::domain::a002_category::aggregate::{Category, CategoryStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn CategoryList() -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let categories = ctx.categories;
    let page_size = app_config().admin_page_size;

    let state = create_state();
    let search_input = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<Category>);
    let confirm_open = RwSignal::new(false);

    Effect::new(move |_| {
        let current = state.get();
        spawn_local(async move {
            let _ = categories
                .fetch_list(current.page, current.search, page_size)
                .await;
        });
    });

    let apply_search = move || {
        let raw = search_input.get_untracked();
        state.maybe_update(|s| s.apply_search(&raw));
    };

    let ask_delete = Callback::new(move |category: Category| {
        pending_delete.set(Some(category));
        confirm_open.set(true);
    });

    let confirm_delete = Callback::new(move |_| {
        confirm_open.set(false);
        let Some(category) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        spawn_local(async move {
            match categories.delete(category.id).await {
                Ok(()) => toast.success(format!("Category \"{}\" deleted", category.name)),
                Err(e) => toast.error(e),
            }
        });
    });

    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|c| format!("Delete category \"{}\"? This cannot be undone.", c.name))
            .unwrap_or_default()
    });

    let total = Signal::derive(move || total_pages(categories.pagination().get()));
    let current_page = Signal::derive(move || state.with(|s| s.page));
    let on_page_change = Callback::new(move |page: usize| {
        let total = total.get_untracked();
        state.maybe_update(|s| s.go_to(page, total));
    });

    let navigate = use_navigate();

    view! {
        <div class="page admin-list">
            <PageHeader title="Categories" subtitle="Group products for the storefront">
                <form
                    class="search-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        apply_search();
                    }
                >
                    <Input value=search_input placeholder="Search by name" />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| apply_search()>
                        {icon("search")}
                    </Button>
                </form>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| navigate("/admin/categories/new", Default::default())
                >
                    {icon("plus")}
                    "New category"
                </Button>
            </PageHeader>

            {move || categories.error().get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th>"Status"</th>
                            <th>"Updated"</th>
                            <th class="data-table__actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || categories.loading().get()>
                            <tr><td colspan="5" class="loading"><Spinner /></td></tr>
                        </Show>
                        <For
                            each=move || categories.items().with(|items| items.iter().map(|c| c.id).collect::<Vec<_>>())
                            key=|id: &i64| *id
                            children=move |id: i64| {
                                let row = Memo::new(move |_| {
                                    categories
                                        .items()
                                        .with(|items| items.iter().find(|c| c.id == id).cloned())
                                });
                                move || {
                                    row.get().map(|category| {
                                        view! { <CategoryRow category=category on_delete=ask_delete /> }
                                    })
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || !categories.loading().get() && categories.items().with(Vec::is_empty)>
                    <p class="empty">"No categories yet."</p>
                </Show>
            </div>

            <PaginationControls
                current_page=current_page
                total_pages=total
                on_page_change=on_page_change
            />

            <ConfirmDialog
                open=confirm_open
                title="Delete category"
                message=delete_message
                on_confirm=confirm_delete
            />
        </div>
    }
}

#[component]
fn CategoryRow(category: Category, on_delete: Callback<Category>) -> impl IntoView {
    let edit_href = format!("/admin/categories/{}/edit", category.id);
    let badge_color = match category.status {
        CategoryStatus::Active => BadgeColor::Success,
        CategoryStatus::Inactive => BadgeColor::Subtle,
    };
    let name = category.name.clone();
    let description = category.description.clone().unwrap_or_else(|| "-".to_string());
    let status = category.status.label();
    let updated = format_opt_date(category.updated_date.as_deref());

    view! {
        <tr>
            <td>{name}</td>
            <td class="data-table__muted">{description}</td>
            <td>
                <Badge appearance=BadgeAppearance::Tint color=badge_color>
                    {status}
                </Badge>
            </td>
            <td>{updated}</td>
            <td class="data-table__actions">
                <A href=edit_href attr:class="icon-button" attr:title="Edit">
                    {icon("edit")}
                </A>
                <button
                    class="icon-button icon-button--danger"
                    title="Delete"
                    on:click=move |_| on_delete.run(category.clone())
                >
                    {icon("delete")}
                </button>
            </td>
        </tr>
    }
}
