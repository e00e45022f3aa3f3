//! Tab content registry: the one place mapping `tab.key` to a view.

use super::tab_labels::*;
use crate::dashboards::d400_admin_stats::ui::AdminStatsDashboard;
use crate::domain::a001_product::ui::details::ProductDetail;
use crate::domain::a001_product::ui::form::ProductForm;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_category::ui::form::CategoryForm;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_order::ui::details::OrderDetail;
use crate::domain::a003_order::ui::form::OrderStatusForm;
use crate::domain::a003_order::ui::list::OrderList;
use crate::domain::a004_banner::ui::form::BannerForm;
use crate::domain::a004_banner::ui::list::BannerList;
use crate::domain::a005_user::ui::list::UserList;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Close callback for a read-only tab.
fn closer(tabs_store: AppGlobalContext, key: &str) -> Callback<()> {
    let key = key.to_string();
    Callback::new(move |_| tabs_store.close_tab(&key))
}

/// Save callback for a form tab: closes the form, marks the list outdated
/// and brings the list to front.
fn saver(tabs_store: AppGlobalContext, key: &str, list_key: &'static str) -> Callback<()> {
    let key = key.to_string();
    Callback::new(move |_| {
        tabs_store.close_tab(&key);
        tabs_store.mark_stale(list_key);
        tabs_store.open_tab(list_key, &tab_label_for_key(list_key));
    })
}

/// Renders tab content by key; unknown keys get a placeholder.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        DASHBOARD => view! { <AdminStatsDashboard /> }.into_any(),

        PRODUCTS => view! { <ProductList /> }.into_any(),
        PRODUCT_NEW => view! {
            <ProductForm
                id=None
                on_saved=saver(tabs_store, key, PRODUCTS)
                on_cancel=closer(tabs_store, key)
            />
        }
        .into_any(),
        k if k.starts_with(PRODUCT_EDIT) => {
            let id = k.strip_prefix(PRODUCT_EDIT).unwrap_or_default().to_string();
            view! {
                <ProductForm
                    id=Some(id)
                    on_saved=saver(tabs_store, key, PRODUCTS)
                    on_cancel=closer(tabs_store, key)
                />
            }
            .into_any()
        }
        k if k.starts_with(PRODUCT_DETAIL) => {
            let id = k.strip_prefix(PRODUCT_DETAIL).unwrap_or_default().to_string();
            view! { <ProductDetail id=id on_close=closer(tabs_store, key) /> }.into_any()
        }

        CATEGORIES => view! { <CategoryList /> }.into_any(),
        CATEGORY_NEW => view! {
            <CategoryForm
                id=None
                on_saved=saver(tabs_store, key, CATEGORIES)
                on_cancel=closer(tabs_store, key)
            />
        }
        .into_any(),
        k if k.starts_with(CATEGORY_EDIT) => {
            let id = k.strip_prefix(CATEGORY_EDIT).unwrap_or_default().to_string();
            view! {
                <CategoryForm
                    id=Some(id)
                    on_saved=saver(tabs_store, key, CATEGORIES)
                    on_cancel=closer(tabs_store, key)
                />
            }
            .into_any()
        }

        ORDERS => view! { <OrderList /> }.into_any(),
        k if k.starts_with(ORDER_DETAIL) => {
            let id = k.strip_prefix(ORDER_DETAIL).unwrap_or_default().to_string();
            view! { <OrderDetail id=id on_close=closer(tabs_store, key) /> }.into_any()
        }
        k if k.starts_with(ORDER_EDIT) => {
            let id = k.strip_prefix(ORDER_EDIT).unwrap_or_default().to_string();
            view! {
                <OrderStatusForm
                    id=id
                    on_saved=saver(tabs_store, key, ORDERS)
                    on_cancel=closer(tabs_store, key)
                />
            }
            .into_any()
        }

        BANNERS => view! { <BannerList /> }.into_any(),
        BANNER_NEW => view! {
            <BannerForm
                id=None
                on_saved=saver(tabs_store, key, BANNERS)
                on_cancel=closer(tabs_store, key)
            />
        }
        .into_any(),
        k if k.starts_with(BANNER_EDIT) => {
            let id = k.strip_prefix(BANNER_EDIT).unwrap_or_default().to_string();
            view! {
                <BannerForm
                    id=Some(id)
                    on_saved=saver(tabs_store, key, BANNERS)
                    on_cancel=closer(tabs_store, key)
                />
            }
            .into_any()
        }

        USERS => view! { <UserList /> }.into_any(),

        _ => {
            log::warn!("no view registered for tab '{}'", key);
            view! { <div class="placeholder">{format!("Unknown page: {}", key)}</div> }.into_any()
        }
    }
}
