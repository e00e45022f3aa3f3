use std::collections::BTreeSet;

use super::filter::{FilterField, Filterable};

/// Filter dropdown options derived from the current snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub categories: Vec<String>,
    pub sub_categories: Vec<String>,
}

/// Distinct non-empty values of `field`, sorted.
pub fn distinct_values<T: Filterable>(items: &[T], field: FilterField) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.field(field))
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn facets<T: Filterable>(items: &[T]) -> Facets {
    Facets {
        categories: distinct_values(items, FilterField::Category),
        sub_categories: distinct_values(items, FilterField::SubCategory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::Product;
    use crate::shared::list_query::snapshot::remove_by_id;

    fn product(id: &str, category: Option<&str>, sub: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            category: category.map(str::to_string),
            sub_category: sub.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn distinct_and_non_null() {
        let items = vec![
            product("1", Some("B"), Some("b1")),
            product("2", Some("A"), None),
            product("3", Some("B"), Some("b1")),
            product("4", None, Some("")),
        ];
        let f = facets(&items);
        assert_eq!(f.categories, vec!["A", "B"]);
        assert_eq!(f.sub_categories, vec!["b1"]);
    }

    #[test]
    fn deleting_sole_holder_drops_category() {
        let mut items = vec![
            product("1", Some("A"), None),
            product("2", Some("B"), None),
            product("3", Some("C"), None),
        ];
        assert!(facets(&items).categories.contains(&"C".to_string()));

        assert!(remove_by_id(&mut items, "3"));
        assert_eq!(facets(&items).categories, vec!["A", "B"]);
    }

    #[test]
    fn empty_snapshot_has_no_options() {
        assert_eq!(facets::<Product>(&[]), Facets::default());
    }
}
