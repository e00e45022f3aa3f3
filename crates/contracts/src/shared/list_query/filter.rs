use serde::{Deserialize, Serialize};

/// Dropdown value meaning "no constraint".
pub const ALL: &str = "all";

/// Equality-filterable fields across the admin collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Category,
    SubCategory,
    ThirdLevelCategory,
    Status,
    Role,
}

/// Entities that can be narrowed by [`ListFilters`].
pub trait Filterable {
    /// Value of an equality-filterable field, `None` when the entity does not
    /// carry it or the backend omitted it.
    fn field(&self, field: FilterField) -> Option<&str>;

    /// Fields scanned by the free-text search, in no particular order.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether the field equals the wanted value. Exact match by default.
    fn field_matches(&self, field: FilterField, wanted: &str) -> bool {
        self.field(field) == Some(wanted)
    }
}

/// Filter selection of a list page. Empty strings and `"all"` impose no
/// constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilters {
    pub category: String,
    pub sub_category: String,
    pub third_level_category: String,
    pub status: String,
    pub role: String,
    pub search_text: String,
}

impl ListFilters {
    fn constraint(value: &str) -> Option<&str> {
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            None
        } else {
            Some(value)
        }
    }

    /// Active equality constraints as `(field, wanted value)` pairs.
    pub fn equality_constraints(&self) -> Vec<(FilterField, &str)> {
        [
            (FilterField::Category, self.category.as_str()),
            (FilterField::SubCategory, self.sub_category.as_str()),
            (FilterField::ThirdLevelCategory, self.third_level_category.as_str()),
            (FilterField::Status, self.status.as_str()),
            (FilterField::Role, self.role.as_str()),
        ]
        .into_iter()
        .filter_map(|(field, value)| Self::constraint(value).map(|v| (field, v)))
        .collect()
    }

    /// Lowercased search term, `None` when blank.
    pub fn search_term(&self) -> Option<String> {
        let term = self.search_text.trim();
        if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        }
    }

    /// Number of active constraints, search included (for the filter badge).
    pub fn active_count(&self) -> usize {
        self.equality_constraints().len() + usize::from(self.search_term().is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

/// Whether a single entity satisfies every active constraint.
pub fn matches_filters<T: Filterable>(item: &T, filters: &ListFilters) -> bool {
    let equality_ok = filters
        .equality_constraints()
        .into_iter()
        .all(|(field, wanted)| item.field_matches(field, wanted));
    if !equality_ok {
        return false;
    }

    match filters.search_term() {
        None => true,
        Some(term) => item
            .search_fields()
            .into_iter()
            .any(|value| value.to_lowercase().contains(&term)),
    }
}

/// Narrows a snapshot to the entities matching all active constraints,
/// preserving snapshot order.
pub fn apply_filters<T: Filterable + Clone>(items: &[T], filters: &ListFilters) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_filters(*item, filters))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::Product;
    use crate::domain::a003_order::{Order, OrderStatus, ShippingAddress};
    use crate::domain::a005_user::User;

    fn product(id: &str, name: &str, category: &str, sub: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: Some(category.to_string()),
            sub_category: sub.map(str::to_string),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                brand: Some("Acme".into()),
                sku: Some("AC-100".into()),
                ..product("1", "Red Shirt", "Clothing", Some("Shirts"))
            },
            product("2", "Blue Jeans", "Clothing", Some("Pants")),
            Product {
                brand: Some("Voltz".into()),
                ..product("3", "Phone Charger", "Electronics", None)
            },
            Product {
                third_level_category: Some("Slim".into()),
                ..product("4", "Black Jeans", "Clothing", Some("Pants"))
            },
        ]
    }

    fn ids(items: &[Product]) -> Vec<&str> {
        items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn empty_filters_keep_everything() {
        let items = catalog();
        assert_eq!(apply_filters(&items, &ListFilters::default()), items);
    }

    #[test]
    fn all_sentinel_is_no_constraint() {
        let filters = ListFilters {
            category: "All".into(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&catalog(), &filters).len(), 4);
        assert!(filters.is_empty());
    }

    #[test]
    fn equality_filters_are_anded() {
        let filters = ListFilters {
            category: "Clothing".into(),
            sub_category: "Pants".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&catalog(), &filters)), vec!["2", "4"]);
        assert_eq!(filters.active_count(), 2);
    }

    #[test]
    fn absent_field_never_matches_active_filter() {
        let filters = ListFilters {
            sub_category: "Chargers".into(),
            ..Default::default()
        };
        assert!(apply_filters(&catalog(), &filters).is_empty());

        let third = ListFilters {
            third_level_category: "Slim".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&catalog(), &third)), vec!["4"]);
    }

    #[test]
    fn search_is_case_insensitive_over_name_brand_sku() {
        let by_name = ListFilters {
            search_text: "JEANS".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&catalog(), &by_name)), vec!["2", "4"]);

        let by_brand = ListFilters {
            search_text: "voltz".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&catalog(), &by_brand)), vec!["3"]);

        let by_sku = ListFilters {
            search_text: "ac-1".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&catalog(), &by_sku)), vec!["1"]);
    }

    #[test]
    fn search_combines_with_equality() {
        let filters = ListFilters {
            category: "Clothing".into(),
            search_text: "black".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&catalog(), &filters)), vec!["4"]);
    }

    #[test]
    fn output_is_subset_satisfying_every_predicate() {
        let items = catalog();
        let combos = [
            ListFilters::default(),
            ListFilters {
                category: "Clothing".into(),
                ..Default::default()
            },
            ListFilters {
                sub_category: "Pants".into(),
                search_text: "blue".into(),
                ..Default::default()
            },
            ListFilters {
                category: "Electronics".into(),
                search_text: "zzz".into(),
                ..Default::default()
            },
        ];
        for filters in &combos {
            let out = apply_filters(&items, filters);
            for p in &out {
                assert!(items.contains(p));
                assert!(matches_filters(p, filters));
            }
            let expected = items.iter().filter(|p| matches_filters(*p, filters)).count();
            assert_eq!(out.len(), expected);
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let items = catalog();
        let filters = ListFilters {
            category: "Clothing".into(),
            search_text: "jeans".into(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&items, &filters), apply_filters(&items, &filters));
    }

    #[test]
    fn order_status_and_search_fields() {
        let orders = vec![
            Order {
                id: "ord-abc".into(),
                order_status: OrderStatus::Shipped,
                shipping_address: Some(ShippingAddress {
                    full_name: Some("Jane Doe".into()),
                    phone: Some("555-0101".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            Order {
                id: "ord-def".into(),
                order_status: OrderStatus::Processing,
                shipping_address: None,
                ..Default::default()
            },
        ];

        let shipped = ListFilters {
            status: "shipped".into(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&orders, &shipped).len(), 1);

        let by_phone = ListFilters {
            search_text: "0101".into(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&orders, &by_phone)[0].id, "ord-abc");

        let by_id = ListFilters {
            search_text: "DEF".into(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&orders, &by_id)[0].id, "ord-def");
    }

    #[test]
    fn user_role_status_and_search() {
        let users = vec![
            User {
                id: "u1".into(),
                name: "Alice".into(),
                email: "alice@shop.test".into(),
                role: Some("admin".into()),
                status: Some("active".into()),
                ..Default::default()
            },
            User {
                id: "u2".into(),
                name: "Bob".into(),
                email: "bob@shop.test".into(),
                phone: Some("+1 202".into()),
                role: Some("user".into()),
                status: Some("inactive".into()),
                ..Default::default()
            },
        ];

        let admins = ListFilters {
            role: "admin".into(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&users, &admins)[0].id, "u1");

        let inactive_by_phone = ListFilters {
            status: "inactive".into(),
            search_text: "202".into(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&users, &inactive_by_phone)[0].id, "u2");
    }
}
