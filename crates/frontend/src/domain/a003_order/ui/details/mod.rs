use crate::domain::a003_order::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::ORDER_EDIT;
use crate::layout::tabs::{detail_key, tab_label_for_key};
use crate::shared::api_utils::image_url;
use crate::shared::components::error_panel::ErrorPanel;
use crate::shared::components::status_badge::OrderStatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::system::auth::context::AuthContext;
use contracts::domain::a003_order::{Order, OrderCustomer, OrderItem};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn item_row(item: OrderItem) -> impl IntoView {
    let thumb = item
        .product()
        .and_then(|p| p.images.first())
        .and_then(|p| image_url(p));
    let name = item.display_name().to_string();
    let unit_price = format_money(item.unit_price());
    let quantity = item.quantity;
    let line_total = format_money(item.line_total());
    view! {
        <TableRow>
            <TableCell>
                {match thumb {
                    Some(src) => view! { <img class="table__thumb" src=src alt="" /> }.into_any(),
                    None => view! { <span class="table__thumb table__thumb--empty">{icon("image")}</span> }.into_any(),
                }}
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{name}</TableCellLayout>
            </TableCell>
            <TableCell class="table__cell--right">{unit_price}</TableCell>
            <TableCell class="table__cell--right">{quantity}</TableCell>
            <TableCell class="table__cell--right">{line_total}</TableCell>
        </TableRow>
    }
}

fn summary_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-grid__row">
            <span class="detail-grid__label">{label}</span>
            <span class="detail-grid__value">{value}</span>
        </div>
    }
}

fn order_view(order: Order) -> impl IntoView {
    let address = order.shipping_address.clone().unwrap_or_default();
    let status = order.order_status.clone();
    let (customer_name, customer_email) = match &order.user {
        Some(OrderCustomer::Embedded { name, email, .. }) => (name.clone(), email.clone()),
        _ => (None, None),
    };
    let customer = customer_name.unwrap_or_else(|| order.customer_name().to_string());
    let placed = order.created_at.as_deref().map(format_datetime).unwrap_or_else(|| "-".into());
    let payment = order.payment_method.clone().unwrap_or_else(|| "-".into());
    let items_title = format!("Items ({})", order.item_count());
    let subtotal = format_money(order.subtotal());
    let shipping = format_money(order.shipping_price);
    let total = format_money(order.total_price);
    let items = order.order_items;

    view! {
        <div class="order-detail">
            <div class="order-detail__summary detail-grid">
                <div class="detail-grid__row">
                    <span class="detail-grid__label">"Status"</span>
                    <span class="detail-grid__value">
                        <OrderStatusBadge status=Signal::derive(move || status.clone()) />
                    </span>
                </div>
                {summary_row("Placed", placed)}
                {summary_row("Payment", payment)}
                {summary_row("Customer", customer)}
                {customer_email.map(|email| summary_row("Email", email))}
            </div>

            <div class="order-detail__card">
                <h3>"Shipping Address"</h3>
                <div class="detail-grid">
                    {summary_row("Name", address.full_name.clone().unwrap_or_else(|| "-".into()))}
                    {summary_row("Phone", address.phone.clone().unwrap_or_else(|| "-".into()))}
                    {summary_row("Address", address.one_line())}
                </div>
            </div>

            <div class="order-detail__card">
                <h3>{items_title}</h3>
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=64.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Product"</TableHeaderCell>
                                <TableHeaderCell resizable=false>"Price"</TableHeaderCell>
                                <TableHeaderCell resizable=false>"Qty"</TableHeaderCell>
                                <TableHeaderCell resizable=false>"Total"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {items.into_iter().map(item_row).collect_view()}
                        </TableBody>
                    </Table>
                </div>

                <div class="order-detail__totals detail-grid">
                    {summary_row("Subtotal", subtotal)}
                    {summary_row("Shipping", shipping)}
                    {summary_row("Total", total)}
                </div>
            </div>
        </div>
    }
}

/// Read-only order view.
#[component]
pub fn OrderDetail(id: String, on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_context::<AuthContext>();
    let id = StoredValue::new(id);
    let order = RwSignal::new(None::<Order>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        error.set(None);
        let id = id.get_value();
        spawn_local(async move {
            match api::fetch_order(&id).await {
                Ok(o) => {
                    let _ = order.try_set(Some(o));
                }
                Err(e) => {
                    log::error!("load order {}: {}", id, e);
                    if let Some(auth) = auth {
                        auth.expire_on(&e);
                    }
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
            let _ = loading.try_set(false);
        });
    };
    load();

    let open_edit = move |_| {
        let key = detail_key(ORDER_EDIT, &id.get_value());
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    view! {
        <PageFrame page_id="a003_order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || order.with(|o| match o {
                            Some(o) => format!("Order #{}", o.short_id()),
                            None => "Order".to_string(),
                        })}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=open_edit>
                        {icon("edit")}
                        " Update Status"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || loading.get() && order.with(Option::is_none)>
                    <div class="page__loading"><Spinner /></div>
                </Show>
                {move || error.get().map(|err| view! {
                    <ErrorPanel message=err on_retry=Callback::new(move |_| load()) />
                })}
                {move || order.get().map(order_view)}
            </div>
        </PageFrame>
    }
}
