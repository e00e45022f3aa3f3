//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! Puts two attributes on the root element:
//!   - `id` as `"{entity}--{category}"`, e.g. `"a001_product--list"`
//!   - `data-page-category` with one of the `PAGE_CAT_*` values

use leptos::prelude::*;

/// Table of records with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";
/// Read-only view of one record.
pub const PAGE_CAT_DETAIL: &str = "detail";
/// Create/edit form.
pub const PAGE_CAT_FORM: &str = "form";
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants.
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_FORM => "page page--form",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
