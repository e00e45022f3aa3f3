mod chart;

use self::chart::MonthlyChart;
use crate::dashboards::d400_admin_stats::api;
use crate::domain::a001_product::api::fetch_products;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{PRODUCTS, PRODUCT_DETAIL, PRODUCT_NEW};
use crate::layout::tabs::{detail_key, tab_label_for_key};
use crate::shared::api_utils::image_url;
use crate::shared::collection::Collection;
use crate::shared::components::error_panel::ErrorPanel;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::{format_count, format_money};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_auth;
use crate::system::auth::api::test_session;
use contracts::dashboards::d400_admin_stats::{AdminStats, MonthlyPoint};
use contracts::domain::a001_product::Product;
use contracts::shared::list_query::paginate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const RECENT_PRODUCTS: usize = 5;

/// Newest products first; records without a timestamp go last.
fn recent_products(products: &[Product], limit: usize) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    paginate(&sorted, 1, limit).items
}

#[component]
pub fn AdminStatsDashboard() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();
    let toasts = use_toast();

    let stats = RwSignal::new(None::<AdminStats>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let series = RwSignal::new(Vec::<MonthlyPoint>::new());
    let series_error = RwSignal::new(None::<String>);

    let products = Collection::<Product>::new();

    // Session first, then the counters. A non-admin session signs out.
    let initialize = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match test_session().await {
                Ok(check) if check.valid_admin().is_none() => {
                    log::info!("dashboard opened without an admin session");
                    toasts.error("Please log in as admin to access the dashboard");
                    auth.clear();
                    let _ = loading.try_set(false);
                    return;
                }
                Ok(_) => {}
                Err(e) => {
                    if auth.expire_on(&e) {
                        toasts.error("Session expired. Please log in again.");
                    } else {
                        log::error!("session check failed: {}", e);
                        let _ = error.try_set(Some(e.to_string()));
                    }
                    let _ = loading.try_set(false);
                    return;
                }
            }

            match api::fetch_admin_stats().await {
                Ok(s) => {
                    log::debug!("admin stats: {:?}", s);
                    let _ = stats.try_set(Some(s));
                }
                Err(e) => {
                    log::error!("admin stats: {}", e);
                    if !auth.expire_on(&e) {
                        let _ = error.try_set(Some(e.to_string()));
                    }
                }
            }
            let _ = loading.try_set(false);
        });

        spawn_local(async move {
            match api::fetch_monthly_series().await {
                Ok(points) => {
                    let _ = series.try_set(points);
                    let _ = series_error.try_set(None);
                }
                Err(e) => {
                    log::warn!("monthly series: {}", e);
                    let _ = series_error.try_set(Some(e.to_string()));
                }
            }
        });

        products.load(fetch_products());
    };
    initialize();

    let recent = Memo::new(move |_| products.items.with(|p| recent_products(p, RECENT_PRODUCTS)));
    let counter = move |pick: fn(&AdminStats) -> u64| {
        Signal::derive(move || {
            stats.with(|s| s.as_ref().map(|s| format_count(pick(s) as f64)).unwrap_or_else(|| "-".into()))
        })
    };
    let open_tab = move |key: String| tabs_store.open_tab(&key, &tab_label_for_key(&key));

    let greeting = move || {
        auth.identity()
            .map(|u| format!("Welcome back, {}", if u.name.trim().is_empty() { u.email } else { u.name }))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <PageFrame page_id="d400_admin_stats--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                    <span class="page__subtitle">{greeting}</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| initialize()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_tab(PRODUCT_NEW.to_string())
                    >
                        {icon("plus")}
                        " Add Product"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! {
                    <ErrorPanel
                        title="Dashboard access error".to_string()
                        message=err
                        on_retry=Callback::new(move |_| initialize())
                    />
                })}

                <Show when=move || loading.get() && stats.with(Option::is_none)>
                    <div class="page__loading">
                        <Spinner />
                        <p>"Verifying session and fetching data..."</p>
                    </div>
                </Show>

                <div class="stat-grid">
                    <StatCard label="Total Users" value=counter(|s| s.total_users) icon_name="users" accent="success" />
                    <StatCard label="Total Orders" value=counter(|s| s.total_orders) icon_name="orders" accent="info" />
                    <StatCard label="Total Products" value=counter(|s| s.total_products) icon_name="products" />
                    <StatCard label="Total Categories" value=counter(|s| s.total_categories) icon_name="tag" accent="error" />
                </div>

                <div class="dashboard-card">
                    <h3 class="dashboard-card__title">"Monthly Overview"</h3>
                    {move || series_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    <MonthlyChart points=series />
                </div>

                <div class="dashboard-card">
                    <div class="dashboard-card__header">
                        <h3 class="dashboard-card__title">"Recent Products"</h3>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| open_tab(PRODUCTS.to_string())>
                            "View all"
                        </Button>
                    </div>
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell resizable=false min_width=64.0>"Image"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=220.0>"Name"</TableHeaderCell>
                                    <TableHeaderCell resizable=false>"Category"</TableHeaderCell>
                                    <TableHeaderCell resizable=false>"Price"</TableHeaderCell>
                                    <TableHeaderCell resizable=false>"Stock"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || recent.get().into_iter().map(|product| {
                                    let id = product.id.clone();
                                    let thumb = product.primary_image().and_then(image_url);
                                    let name = product.name.clone();
                                    let category_path = product.category_path();
                                    let price = format_money(product.price);
                                    let stock = format_count(product.stock_quantity);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                {thumb.map(|src| view! { <img class="table__thumb" src=src alt="" /> })}
                                            </TableCell>
                                            <TableCell>
                                                <a
                                                    href="#"
                                                    class="table__link"
                                                    on:click=move |e| {
                                                        e.prevent_default();
                                                        open_tab(detail_key(PRODUCT_DETAIL, &id));
                                                    }
                                                >
                                                    {name}
                                                </a>
                                            </TableCell>
                                            <TableCell>{category_path}</TableCell>
                                            <TableCell>{price}</TableCell>
                                            <TableCell>{stock}</TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    </div>
                    <Show when=move || !products.loading.get() && recent.with(Vec::is_empty)>
                        <div class="table__empty">"No products yet."</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, created_at: Option<&str>) -> Product {
        Product {
            id: id.into(),
            created_at: created_at.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn recent_products_are_newest_first_and_limited() {
        let items = vec![
            product("a", Some("2024-01-02T00:00:00Z")),
            product("b", None),
            product("c", Some("2024-03-01T00:00:00Z")),
            product("d", Some("2024-02-01T00:00:00Z")),
        ];
        let ids: Vec<String> = recent_products(&items, 3).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["c", "d", "a"]);
    }
}
