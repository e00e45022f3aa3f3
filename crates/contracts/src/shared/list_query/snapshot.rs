//! Local patches applied to a held collection after a successful mutation.

/// Entities addressable by their backend id.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Removes the first element with `id`. Returns whether one was removed.
pub fn remove_by_id<T: Identifiable>(items: &mut Vec<T>, id: &str) -> bool {
    match items.iter().position(|item| item.id() == id) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

/// Replaces the element sharing `entity`'s id, keeping its position.
/// Returns whether a match was found; the snapshot is untouched otherwise.
pub fn replace_by_id<T: Identifiable>(items: &mut [T], entity: T) -> bool {
    match items.iter_mut().find(|item| item.id() == entity.id()) {
        Some(slot) => {
            *slot = entity;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_category::Category;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            image: None,
        }
    }

    #[test]
    fn remove_takes_exactly_the_matching_element() {
        let mut items = vec![category("a", "One"), category("b", "Two"), category("c", "Three")];
        assert!(remove_by_id(&mut items, "b"));
        assert_eq!(items, vec![category("a", "One"), category("c", "Three")]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut items = vec![category("a", "One")];
        assert!(!remove_by_id(&mut items, "zzz"));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn replace_keeps_position() {
        let mut items = vec![category("a", "One"), category("b", "Two")];
        assert!(replace_by_id(&mut items, category("a", "Uno")));
        assert_eq!(items[0].name, "Uno");
        assert_eq!(items[1].name, "Two");

        assert!(!replace_by_id(&mut items, category("x", "Ghost")));
        assert_eq!(items.len(), 2);
    }
}
