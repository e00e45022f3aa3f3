//! Tab keys and their titles.
//!
//! List and "new" tabs use fixed keys; record tabs append the record id to a
//! prefix (`a001_product_detail_<id>`).

pub const DASHBOARD: &str = "d400_admin_stats";
pub const PRODUCTS: &str = "a001_product";
pub const PRODUCT_NEW: &str = "a001_product_new";
pub const PRODUCT_EDIT: &str = "a001_product_edit_";
pub const PRODUCT_DETAIL: &str = "a001_product_detail_";
pub const CATEGORIES: &str = "a002_category";
pub const CATEGORY_NEW: &str = "a002_category_new";
pub const CATEGORY_EDIT: &str = "a002_category_edit_";
pub const ORDERS: &str = "a003_order";
pub const ORDER_DETAIL: &str = "a003_order_detail_";
pub const ORDER_EDIT: &str = "a003_order_edit_";
pub const BANNERS: &str = "a004_banner";
pub const BANNER_NEW: &str = "a004_banner_new";
pub const BANNER_EDIT: &str = "a004_banner_edit_";
pub const USERS: &str = "a005_user";

const RECORD_PREFIXES: [(&str, &str); 6] = [
    (PRODUCT_EDIT, "Edit Product"),
    (PRODUCT_DETAIL, "Product"),
    (CATEGORY_EDIT, "Edit Category"),
    (ORDER_DETAIL, "Order"),
    (ORDER_EDIT, "Edit Order"),
    (BANNER_EDIT, "Edit Banner"),
];

/// Key of a per-record tab.
pub fn detail_key(prefix: &str, id: &str) -> String {
    format!("{}{}", prefix, id)
}

fn short_id(id: &str) -> &str {
    let start = id.len().saturating_sub(6);
    id.get(start..).unwrap_or(id)
}

/// Title for a tab key. Record tabs show the last six id characters; unknown
/// keys fall back to the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    let fixed = match key {
        DASHBOARD => Some("Dashboard"),
        PRODUCTS => Some("Products"),
        PRODUCT_NEW => Some("Add Product"),
        CATEGORIES => Some("Categories"),
        CATEGORY_NEW => Some("Add Category"),
        ORDERS => Some("Orders"),
        BANNERS => Some("Home Banners"),
        BANNER_NEW => Some("Add Banner"),
        USERS => Some("Users"),
        _ => None,
    };
    if let Some(label) = fixed {
        return label.to_string();
    }

    RECORD_PREFIXES
        .iter()
        .find_map(|(prefix, label)| {
            key.strip_prefix(prefix)
                .filter(|id| !id.is_empty())
                .map(|id| format!("{} #{}", label, short_id(id)))
        })
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_labels() {
        assert_eq!(tab_label_for_key(DASHBOARD), "Dashboard");
        assert_eq!(tab_label_for_key(BANNERS), "Home Banners");
        assert_eq!(tab_label_for_key(PRODUCT_NEW), "Add Product");
    }

    #[test]
    fn record_labels_use_short_id() {
        let key = detail_key(ORDER_DETAIL, "64f1c2aa9b0e7d3c12ab34cd");
        assert_eq!(tab_label_for_key(&key), "Order #ab34cd");
        assert_eq!(tab_label_for_key("a002_category_edit_42"), "Edit Category #42");
    }

    #[test]
    fn unknown_key_falls_back() {
        assert_eq!(tab_label_for_key("something_else"), "something_else");
        assert_eq!(tab_label_for_key(PRODUCT_DETAIL), PRODUCT_DETAIL);
    }
}
