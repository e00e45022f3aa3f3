use std::collections::HashSet;

/// State of the "select all" checkbox in a table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Selected row ids. Scoped to the rendered page: ids that scroll out of
/// view are dropped by [`RowSelection::retain_visible`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    selected: HashSet<String>,
}

impl RowSelection {
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn set(&mut self, id: &str, checked: bool) {
        if checked {
            self.selected.insert(id.to_string());
        } else {
            self.selected.remove(id);
        }
    }

    /// Select-all / clear-all over the rows currently rendered.
    pub fn set_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a str>, checked: bool) {
        for id in visible {
            self.set(id, checked);
        }
    }

    /// Drops every id not in `visible`.
    pub fn retain_visible<'a>(&mut self, visible: impl IntoIterator<Item = &'a str>) {
        let visible: HashSet<&str> = visible.into_iter().collect();
        self.selected.retain(|id| visible.contains(id.as_str()));
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn header_state<'a>(&self, visible: impl IntoIterator<Item = &'a str>) -> HeaderCheckState {
        let mut total = 0usize;
        let mut checked = 0usize;
        for id in visible {
            total += 1;
            if self.is_selected(id) {
                checked += 1;
            }
        }
        match (total, checked) {
            (0, _) | (_, 0) => HeaderCheckState::Unchecked,
            (t, c) if t == c => HeaderCheckState::Checked,
            _ => HeaderCheckState::Indeterminate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_affects_only_visible_rows() {
        let mut sel = RowSelection::default();
        sel.set("offpage", true);
        sel.set_all(["a", "b"], true);
        assert_eq!(sel.len(), 3);

        sel.set_all(["a", "b"], false);
        assert!(sel.is_selected("offpage"));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn header_state_tracks_visible_rows() {
        let mut sel = RowSelection::default();
        assert_eq!(sel.header_state(["a", "b"]), HeaderCheckState::Unchecked);
        sel.set("a", true);
        assert_eq!(sel.header_state(["a", "b"]), HeaderCheckState::Indeterminate);
        sel.set("b", true);
        assert_eq!(sel.header_state(["a", "b"]), HeaderCheckState::Checked);
        assert_eq!(sel.header_state(std::iter::empty()), HeaderCheckState::Unchecked);
    }

    #[test]
    fn page_change_drops_hidden_selection() {
        let mut sel = RowSelection::default();
        sel.set_all(["a", "b"], true);
        sel.retain_visible(["c", "d"]);
        assert!(sel.is_empty());
    }
}
