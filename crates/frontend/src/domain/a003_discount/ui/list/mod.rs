use crate::layout::global_context::use_app_context;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::app_config;
use crate::shared::date_utils::{format_opt_date, today_iso};
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::state::list_state::{create_state, total_pages};
use crate::shared::toast::use_toast;
use contracts::domain::a003_discount::aggregate::{parse_date, Discount};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum DiscountState {
    Usable,
    Inactive,
    Exhausted,
    OutOfPeriod,
}

impl DiscountState {
    fn of(discount: &Discount, today: Option<chrono::NaiveDate>) -> Self {
        if !discount.is_active {
            return DiscountState::Inactive;
        }
        if discount.usage_exhausted() {
            return DiscountState::Exhausted;
        }
        match today {
            Some(day) if !discount.is_usable_on(day) => DiscountState::OutOfPeriod,
            _ => DiscountState::Usable,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DiscountState::Usable => "Active",
            DiscountState::Inactive => "Inactive",
            DiscountState::Exhausted => "Used up",
            DiscountState::OutOfPeriod => "Out of period",
        }
    }

    fn color(&self) -> BadgeColor {
        match self {
            DiscountState::Usable => BadgeColor::Success,
            DiscountState::Inactive => BadgeColor::Subtle,
            DiscountState::Exhausted => BadgeColor::Danger,
            DiscountState::OutOfPeriod => BadgeColor::Warning,
        }
    }
}

fn usage_text(discount: &Discount) -> String {
    match discount.max_usage {
        Some(max) => format!("{} / {}", discount.usage_count, max),
        None => discount.usage_count.to_string(),
    }
}

#[component]
pub fn DiscountList() -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let discounts = ctx.discounts;
    let page_size = app_config().admin_page_size;
    let today = parse_date(&today_iso());

    let state = create_state();
    let search_input = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<Discount>);
    let confirm_open = RwSignal::new(false);

    Effect::new(move |_| {
        let current = state.get();
        spawn_local(async move {
            let _ = discounts
                .fetch_list(current.page, current.search, page_size)
                .await;
        });
    });

    let apply_search = move || {
        let raw = search_input.get_untracked();
        state.maybe_update(|s| s.apply_search(&raw));
    };

    let ask_delete = Callback::new(move |discount: Discount| {
        pending_delete.set(Some(discount));
        confirm_open.set(true);
    });

    let confirm_delete = Callback::new(move |_| {
        confirm_open.set(false);
        if let Some(discount) = pending_delete.get_untracked() {
            pending_delete.set(None);
            spawn_local(async move {
                match discounts.delete(discount.id).await {
                    Ok(()) => toast.success(format!("Discount {} deleted", discount.code)),
                    Err(e) => toast.error(e),
                }
            });
        }
    });

    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|d| format!("Delete discount \"{}\" ({})?", d.name, d.code))
            .unwrap_or_default()
    });

    let total = Signal::derive(move || total_pages(discounts.pagination().get()));
    let current_page = Signal::derive(move || state.with(|s| s.page));
    let on_page_change = Callback::new(move |page: usize| {
        let total = total.get_untracked();
        state.maybe_update(|s| s.go_to(page, total));
    });

    let navigate = use_navigate();

    view! {
        <div class="page admin-list">
            <PageHeader title="Discounts" subtitle="Promotion codes applied at checkout">
                <form
                    class="search-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        apply_search();
                    }
                >
                    <Input value=search_input placeholder="Search by name or code" />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| apply_search()>
                        {icon("search")}
                    </Button>
                </form>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| navigate("/admin/discounts/new", Default::default())
                >
                    {icon("plus")}
                    "New discount"
                </Button>
            </PageHeader>

            {move || discounts.error().get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Code"</th>
                            <th>"Value"</th>
                            <th>"Min order"</th>
                            <th>"Usage"</th>
                            <th>"Period"</th>
                            <th>"Status"</th>
                            <th class="data-table__actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || discounts.loading().get()>
                            <tr><td colspan="8" class="loading"><Spinner /></td></tr>
                        </Show>
                        <For
                            each=move || discounts.items().with(|items| items.iter().map(|d| d.id).collect::<Vec<_>>())
                            key=|id: &i64| *id
                            children=move |id: i64| {
                                let row = Memo::new(move |_| {
                                    discounts
                                        .items()
                                        .with(|items| items.iter().find(|d| d.id == id).cloned())
                                });
                                move || {
                                    row.get().map(|discount| {
                                        view! { <DiscountRow discount=discount today=today on_delete=ask_delete /> }
                                    })
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || !discounts.loading().get() && discounts.items().with(Vec::is_empty)>
                    <p class="empty">"No discounts yet."</p>
                </Show>
            </div>

            <PaginationControls
                current_page=current_page
                total_pages=total
                on_page_change=on_page_change
            />

            <ConfirmDialog
                open=confirm_open
                title="Delete discount"
                message=delete_message
                on_confirm=confirm_delete
            />
        </div>
    }
}

#[component]
fn DiscountRow(
    discount: Discount,
    today: Option<chrono::NaiveDate>,
    on_delete: Callback<Discount>,
) -> impl IntoView {
    let edit_href = format!("/admin/discounts/{}/edit", discount.id);
    let status = DiscountState::of(&discount, today);
    let period = format!(
        "{} – {}",
        format_opt_date(discount.start_date.as_deref()),
        format_opt_date(discount.end_date.as_deref())
    );
    let min_order = discount
        .min_order_value
        .map(format_money)
        .unwrap_or_else(|| "-".to_string());
    let usage = usage_text(&discount);
    let value = discount.value_label();
    let name = discount.name.clone();
    let code = discount.code.clone();

    view! {
        <tr>
            <td>{name}</td>
            <td class="data-table__mono">{code}</td>
            <td>{value}</td>
            <td>{min_order}</td>
            <td>{usage}</td>
            <td>{period}</td>
            <td>
                <Badge appearance=BadgeAppearance::Tint color=status.color()>
                    {status.label()}
                </Badge>
            </td>
            <td class="data-table__actions">
                <A href=edit_href attr:class="icon-button" attr:title="Edit">
                    {icon("edit")}
                </A>
                <button
                    class="icon-button icon-button--danger"
                    title="Delete"
                    on:click=move |_| on_delete.run(discount.clone())
                >
                    {icon("delete")}
                </button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_discount::aggregate::DiscountType;

    fn discount() -> Discount {
        Discount {
            id: 1,
            name: "Spring".into(),
            code: "SPRING".into(),
            discount_type: DiscountType::Percentage,
            discount_value: 10.0,
            min_order_value: None,
            max_discount_amount: None,
            max_usage: Some(5),
            usage_count: 2,
            applicable_product_id: None,
            start_date: Some("2025-03-01".into()),
            end_date: Some("2025-03-31".into()),
            is_active: true,
        }
    }

    #[test]
    fn test_discount_state() {
        let in_period = parse_date("2025-03-10");
        let after = parse_date("2025-04-10");
        assert_eq!(DiscountState::of(&discount(), in_period), DiscountState::Usable);
        assert_eq!(DiscountState::of(&discount(), after), DiscountState::OutOfPeriod);

        let used_up = Discount { usage_count: 5, ..discount() };
        assert_eq!(DiscountState::of(&used_up, in_period), DiscountState::Exhausted);

        let off = Discount { is_active: false, ..discount() };
        assert_eq!(DiscountState::of(&off, in_period), DiscountState::Inactive);
    }

    #[test]
    fn test_usage_text() {
        assert_eq!(usage_text(&discount()), "2 / 5");
        let unlimited = Discount { max_usage: None, ..discount() };
        assert_eq!(usage_text(&unlimited), "2");
    }
}
