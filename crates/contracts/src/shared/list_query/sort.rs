use std::cmp::Ordering;

/// Entities that can be ordered by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Column sort applied to the visible page only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

impl SortState {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    /// Clicking the active column flips direction; another column starts
    /// ascending.
    pub fn toggle(current: Option<&SortState>, field: &str) -> SortState {
        match current {
            Some(state) if state.field == field => SortState {
                field: state.field.clone(),
                ascending: !state.ascending,
            },
            _ => SortState::new(field),
        }
    }
}

/// Stable sort of one page slice. Rows on other pages are not considered, so
/// there is no global order across pages.
pub fn sort_page<T: Sortable>(items: &mut [T], state: &SortState) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, &state.field);
        if state.ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive comparison of optional text, absent values first.
pub fn cmp_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.map(str::to_lowercase).cmp(&b.map(str::to_lowercase))
}

/// Total order over floats for column sorting; NaN sorts as equal.
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::Product;
    use crate::shared::list_query::pagination::paginate;

    fn product(id: &str, name: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            ..Default::default()
        }
    }

    #[test]
    fn toggle_flips_same_column_and_resets_on_new_column() {
        let first = SortState::toggle(None, "price");
        assert!(first.ascending);
        let second = SortState::toggle(Some(&first), "price");
        assert!(!second.ascending);
        let other = SortState::toggle(Some(&second), "name");
        assert_eq!(other, SortState::new("name"));
    }

    #[test]
    fn sort_is_stable() {
        let mut items = vec![
            product("1", "b", 5.0),
            product("2", "a", 5.0),
            product("3", "c", 1.0),
        ];
        sort_page(&mut items, &SortState::new("price"));
        let ids: Vec<_> = items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn sort_touches_only_the_visible_page() {
        let all: Vec<Product> = (0..6)
            .map(|i| product(&i.to_string(), "x", (10 - i) as f64))
            .collect();
        let mut page = paginate(&all, 1, 3).items;
        sort_page(&mut page, &SortState::new("price"));
        let ids: Vec<_> = page.iter().map(|p| p.id.as_str()).collect();
        // Page one is sorted among itself; cheaper rows on page two are not pulled in.
        assert_eq!(ids, vec!["2", "1", "0"]);
    }

    #[test]
    fn descending_reverses() {
        let mut items = vec![product("1", "Banana", 1.0), product("2", "apple", 1.0)];
        sort_page(
            &mut items,
            &SortState {
                field: "name".into(),
                ascending: false,
            },
        );
        assert_eq!(items[0].name, "Banana");
    }
}
