pub mod state;

use self::state::create_state;
use crate::domain::a003_order::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{ORDERS, ORDER_DETAIL, ORDER_EDIT};
use crate::layout::tabs::{detail_key, tab_label_for_key};
use crate::shared::collection::Collection;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::error_panel::ErrorPanel;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::OrderStatusBadge;
use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::format_date;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::list_utils::ListView;
use crate::shared::mutation::Mutations;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;
use contracts::domain::a003_order::{Order, OrderStats, OrderStatus};
use contracts::shared::list_query::filter::ALL;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn OrderList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_toast();
    let collection = Collection::<Order>::new();
    let mutations = Mutations::new(collection);
    let state = create_state();
    let is_filter_expanded = RwSignal::new(true);

    Effect::new(move |prev: Option<u32>| {
        let version = tabs_store.version(ORDERS);
        if prev != Some(version) {
            log::debug!("loading orders (v{})", version);
            collection.load(api::fetch_orders());
        }
        version
    });

    let list = ListView::new(collection.items, state);
    let (rows, sort) = (list.rows, list.sort);
    let selection = list.selection();

    let status = RwSignal::new(ALL.to_string());
    let search = RwSignal::new(String::new());
    Effect::new(move |_| {
        let (st, q) = (status.get(), search.get());
        list.update_filters(move |f| {
            f.status = st;
            f.search_text = q;
        });
    });

    let stats = Memo::new(move |_| collection.items.with(|items| OrderStats::from_orders(items)));

    let open_tab = move |key: String| tabs_store.open_tab(&key, &tab_label_for_key(&key));
    let refresh = move || collection.load(api::fetch_orders());

    let confirm_open = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<String>);
    let confirm_delete = Callback::new(move |_| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match mutations.delete_entity(id.clone(), api::delete_order(&id)).await {
                Some(Ok(())) => {
                    toasts.success("Order deleted");
                    list.collection_resized();
                }
                Some(Err(e)) => toasts.error(e.to_string()),
                None => {}
            }
        });
    });

    let stat = move |pick: fn(&OrderStats) -> usize| {
        Signal::derive(move || stats.with(|s| pick(s)).to_string())
    };

    view! {
        <PageFrame page_id="a003_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || collection.items.with(Vec::len).to_string()}
                    </UiBadge>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Total Orders" value=stat(|s| s.total) icon_name="orders" />
                    <StatCard label="Pending" value=stat(|s| s.pending) icon_name="clock" accent="warning" />
                    <StatCard label="Processing" value=stat(|s| s.processing) icon_name="refresh" accent="info" />
                    <StatCard label="Shipped" value=stat(|s| s.shipped) icon_name="truck" accent="primary" />
                    <StatCard label="Delivered" value=stat(|s| s.delivered) icon_name="check" accent="success" />
                    <StatCard label="Cancelled" value=stat(|s| s.cancelled) icon_name="x" accent="error" />
                    <StatCard
                        label="Revenue"
                        value=Signal::derive(move || stats.with(|s| format_money(s.total_revenue)))
                        icon_name="dollar"
                        accent="success"
                    />
                </div>

                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=list.active_filters_count()
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=list.current_page()
                            total_pages=list.total_pages()
                            total_count=list.total_count()
                            page_size=list.page_size()
                            on_page_change=Callback::new(move |p| list.go_to_page(p))
                            on_previous=Callback::new(move |_| list.previous_page())
                            on_next=Callback::new(move |_| list.next_page())
                        />
                    }
                    actions=move || view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| refresh()
                            disabled=Signal::derive(move || collection.loading.get())
                        >
                            {icon("refresh")}
                            {move || if collection.loading.get() { " Loading..." } else { " Refresh" }}
                        </Button>
                    }
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Status"</Label>
                            <Select value=status>
                                {OrderStatus::FILTER_OPTIONS.iter().map(|(value, label)| view! {
                                    <option value=*value>{*label}</option>
                                }).collect_view()}
                            </Select>
                        </Flex>
                        <div style="flex: 1; max-width: 320px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Search"</Label>
                                <Input value=search placeholder="Order id, customer or phone..." />
                            </Flex>
                        </div>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                status.set(ALL.to_string());
                                search.set(String::new());
                            }
                        >
                            "Clear"
                        </Button>
                    </Flex>
                </FilterPanel>

                {move || collection.error.get().map(|err| view! {
                    <ErrorPanel message=err on_retry=Callback::new(move |_| refresh()) />
                })}

                <Show when=move || collection.loading.get() && collection.items.with(Vec::is_empty)>
                    <div class="page__loading"><Spinner /></div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 960px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox state=list.header_state() on_change=Callback::new(move |checked| list.toggle_all(checked)) />
                                <SortableHeaderCell
                                    label="Order"
                                    sort_field="id"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                    min_width=100.0
                                />
                                <SortableHeaderCell
                                    label="Customer"
                                    sort_field="customer"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                    min_width=180.0
                                />
                                <SortableHeaderCell
                                    label="Items"
                                    sort_field="items"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                    min_width=70.0
                                />
                                <SortableHeaderCell
                                    label="Total"
                                    sort_field="totalPrice"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                    align="right"
                                />
                                <SortableHeaderCell
                                    label="Payment"
                                    sort_field="paymentMethod"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                />
                                <SortableHeaderCell
                                    label="Status"
                                    sort_field="orderStatus"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                />
                                <SortableHeaderCell
                                    label="Date"
                                    sort_field="createdAt"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                />
                                <TableHeaderCell resizable=false min_width=140.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || rows.get().into_iter().map(|order| {
                                let id = order.id.clone();
                                let id_for_view = id.clone();
                                let id_for_link = id.clone();
                                let id_for_edit = id.clone();
                                let id_for_delete = id.clone();
                                let id_for_pending = id.clone();
                                let status = order.order_status.clone();
                                let customer = order.customer_name().to_string();
                                let phone = order.phone().unwrap_or_default().to_string();
                                let short_id = format!("#{}", order.short_id());
                                let item_count = order.item_count();
                                let total = format_money(order.total_price);
                                let payment = order.payment_method.clone().unwrap_or_else(|| "-".to_string());
                                let created = order.created_at.as_deref().map(format_date).unwrap_or_else(|| "-".to_string());

                                view! {
                                    <TableRow>
                                        <TableCellCheckbox
                                            item_id=id
                                            selected=selection
                                            on_change=Callback::new(move |(id, checked): (String, bool)| list.toggle_selection(&id, checked))
                                        />
                                        <TableCell>
                                            <a
                                                href="#"
                                                class="table__link table__mono"
                                                on:click=move |e| {
                                                    e.prevent_default();
                                                    open_tab(detail_key(ORDER_DETAIL, &id_for_link));
                                                }
                                            >
                                                {short_id}
                                            </a>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <div class="table__stack">
                                                    <span>{customer}</span>
                                                    <span class="table__muted">{phone}</span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>{item_count}</TableCell>
                                        <TableCell class="table__cell--right">{total}</TableCell>
                                        <TableCell>{payment}</TableCell>
                                        <TableCell>
                                            <OrderStatusBadge status=Signal::derive(move || status.clone()) />
                                        </TableCell>
                                        <TableCell>{created}</TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <button
                                                    class="table__action"
                                                    title="View"
                                                    on:click=move |_| open_tab(detail_key(ORDER_DETAIL, &id_for_view))
                                                >
                                                    {icon("eye")}
                                                </button>
                                                <button
                                                    class="table__action"
                                                    title="Update status"
                                                    on:click=move |_| open_tab(detail_key(ORDER_EDIT, &id_for_edit))
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="table__action table__action--danger"
                                                    title="Delete"
                                                    disabled=move || mutations.is_pending(&id_for_pending)
                                                    on:click=move |_| {
                                                        pending_delete.set(Some(id_for_delete.clone()));
                                                        confirm_open.set(true);
                                                    }
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || !collection.loading.get() && rows.with(Vec::is_empty)>
                    <div class="table__empty">
                        {move || if collection.items.with(Vec::is_empty) {
                            "No orders yet."
                        } else {
                            "No orders match the current filters."
                        }}
                    </div>
                </Show>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Delete order".to_string()
                message=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|id| format!("Delete order {}? This cannot be undone.", id))
                        .unwrap_or_default()
                })
                on_confirm=confirm_delete
            />
        </PageFrame>
    }
}
