//! Helpers shared by the list pages: sort header decoration, the
//! page-local sort/selection state and the [`ListView`] memo chain every
//! table screen is built on.

use contracts::shared::list_query::{
    apply_filters, sort_page, Filterable, HeaderCheckState, Identifiable, ListFilters, ListQuery,
    Page, RowSelection, SortState, Sortable,
};
use leptos::prelude::*;

/// Arrow shown next to a column header.
pub fn get_sort_indicator(current: Option<&SortState>, field: &str) -> &'static str {
    match current {
        Some(state) if state.field == field => {
            if state.ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

pub fn get_sort_class(current: Option<&SortState>, field: &str) -> &'static str {
    match current {
        Some(state) if state.field == field => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

/// Page slice in display order. Without an active sort the server order is
/// kept.
pub fn sorted_page<T: Sortable + Clone>(items: &[T], sort: Option<&SortState>) -> Vec<T> {
    let mut rows = items.to_vec();
    if let Some(state) = sort {
        sort_page(&mut rows, state);
    }
    rows
}

/// Header checkbox state for the rows currently rendered.
pub fn header_state_for(selection: &RowSelection, visible_ids: &[String]) -> HeaderCheckState {
    selection.header_state(visible_ids.iter().map(String::as_str))
}

/// Query, page-local sort and row selection of one list screen.
///
/// The selection belongs to the rendered page, so anything that moves the
/// page (filters, paging, a resized snapshot) clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub query: ListQuery,
    pub sort: Option<SortState>,
    pub selection: RowSelection,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: ListQuery::new(page_size),
            sort: None,
            selection: RowSelection::default(),
        }
    }

    pub fn filters(&self) -> &ListFilters {
        self.query.filters()
    }

    pub fn update_filters(&mut self, edit: impl FnOnce(&mut ListFilters)) {
        if self.query.update_filters(edit) {
            self.selection.clear();
        }
    }

    pub fn go_to_page(&mut self, page: usize, filtered_count: usize) {
        let before = self.query.page();
        self.query.go_to_page(page, filtered_count);
        if self.query.page() != before {
            self.selection.clear();
        }
    }

    /// One page back or forward, clamped to `[1, total_pages]`.
    pub fn step_page(&mut self, forward: bool, filtered_count: usize) {
        let before = self.query.page();
        if forward {
            self.query.next_page(filtered_count);
        } else {
            self.query.previous_page();
        }
        if self.query.page() != before {
            self.selection.clear();
        }
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(SortState::toggle(self.sort.as_ref(), field));
    }

    /// After a local delete: back to page 1 with nothing selected.
    pub fn collection_resized(&mut self) {
        self.query.collection_resized();
        self.selection.clear();
    }

    /// After a refetch: keep the cursor inside the filtered list.
    pub fn fit_to(&mut self, filtered_count: usize) {
        if self.query.fit_to(filtered_count) {
            self.selection.clear();
        }
    }

    /// Whether any selected id is no longer rendered.
    pub fn selection_outside(&self, visible_ids: &[String]) -> bool {
        self.selection
            .ids()
            .any(|id| !visible_ids.iter().any(|v| v == id))
    }

    pub fn prune_selection(&mut self, visible_ids: &[String]) {
        self.selection
            .retain_visible(visible_ids.iter().map(String::as_str));
    }
}

/// Reactive pipeline of one list screen:
/// `snapshot -> filtered -> page -> rows (page-local sort)`.
///
/// Every memo reads the shared [`TableState`], so paging, sorting and
/// selecting are plain state updates. A refetch that shrinks the filtered
/// list pulls the cursor back in range, and rows that disappear drop out of
/// the selection.
pub struct ListView<T: Send + Sync + 'static> {
    pub state: RwSignal<TableState>,
    pub filters: Memo<ListFilters>,
    pub filtered: Memo<Vec<T>>,
    pub page: Memo<Page<T>>,
    pub sort: Memo<Option<SortState>>,
    pub rows: Memo<Vec<T>>,
    pub visible_ids: Memo<Vec<String>>,
}

impl<T: Send + Sync + 'static> Clone for ListView<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListView<T> {}

impl<T> ListView<T>
where
    T: Filterable + Sortable + Identifiable + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(items: RwSignal<Vec<T>>, state: RwSignal<TableState>) -> Self {
        let filters = Memo::new(move |_| state.with(|s| s.filters().clone()));
        let filtered = Memo::new(move |_| {
            let filters = filters.get();
            items.with(|items| apply_filters(items, &filters))
        });
        let page = Memo::new(move |_| state.with(|s| filtered.with(|f| s.query.page_of(f))));
        let sort = Memo::new(move |_| state.with(|s| s.sort.clone()));
        let rows = Memo::new(move |_| page.with(|p| sorted_page(&p.items, sort.get().as_ref())));
        let visible_ids = Memo::new(move |_| {
            rows.with(|r| r.iter().map(|row| row.id().to_string()).collect::<Vec<_>>())
        });

        Effect::new(move |_| {
            let count = filtered.with(Vec::len);
            if state.with_untracked(|s| s.query.is_past_end(count)) {
                log::debug!("list shrank to {} rows, moving back into range", count);
                let _ = state.try_update(|s| s.fit_to(count));
            }
        });
        Effect::new(move |_| {
            let ids = visible_ids.get();
            if state.with_untracked(|s| s.selection_outside(&ids)) {
                let _ = state.try_update(|s| s.prune_selection(&ids));
            }
        });

        Self {
            state,
            filters,
            filtered,
            page,
            sort,
            rows,
            visible_ids,
        }
    }

    /// Applies a filter edit coming from an input effect.
    pub fn update_filters(&self, edit: impl FnOnce(&mut ListFilters)) {
        let state = self.state;
        untrack(move || state.update(|s| s.update_filters(edit)));
    }

    pub fn go_to_page(&self, page: usize) {
        let filtered_count = self.filtered.with_untracked(Vec::len);
        self.state.update(|s| s.go_to_page(page, filtered_count));
    }

    pub fn previous_page(&self) {
        self.state.update(|s| s.step_page(false, 0));
    }

    pub fn next_page(&self) {
        let filtered_count = self.filtered.with_untracked(Vec::len);
        self.state.update(|s| s.step_page(true, filtered_count));
    }

    pub fn toggle_sort(&self, field: &str) {
        self.state.update(|s| s.toggle_sort(field));
    }

    pub fn toggle_selection(&self, id: &str, checked: bool) {
        self.state.update(|s| s.selection.set(id, checked));
    }

    pub fn toggle_all(&self, checked: bool) {
        let ids = self.visible_ids.get_untracked();
        self.state
            .update(|s| s.selection.set_all(ids.iter().map(String::as_str), checked));
    }

    /// Call after a local mutation changed the snapshot size.
    pub fn collection_resized(&self) {
        let _ = self.state.try_update(|s| s.collection_resized());
    }

    pub fn selection(&self) -> Signal<RowSelection> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.selection.clone()))
    }

    pub fn header_state(&self) -> Signal<HeaderCheckState> {
        let (state, visible_ids) = (self.state, self.visible_ids);
        Signal::derive(move || {
            state.with(|s| visible_ids.with(|ids| header_state_for(&s.selection, ids)))
        })
    }

    pub fn active_filters_count(&self) -> Signal<usize> {
        let filters = self.filters;
        Signal::derive(move || filters.with(ListFilters::active_count))
    }

    /// Page number actually rendered, which the pager should show.
    pub fn current_page(&self) -> Signal<usize> {
        let page = self.page;
        Signal::derive(move || page.with(|p| p.page))
    }

    pub fn total_pages(&self) -> Signal<usize> {
        let page = self.page;
        Signal::derive(move || page.with(|p| p.total_pages))
    }

    pub fn total_count(&self) -> Signal<usize> {
        let page = self.page;
        Signal::derive(move || page.with(|p| p.total_count))
    }

    pub fn page_size(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.query.cursor().page_size()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_follows_active_column() {
        let state = SortState::new("name");
        assert_eq!(get_sort_indicator(Some(&state), "name"), " ▲");
        assert_eq!(get_sort_indicator(Some(&state), "price"), " ⇅");
        assert_eq!(get_sort_indicator(None, "name"), " ⇅");

        let desc = SortState::toggle(Some(&state), "name");
        assert_eq!(get_sort_indicator(Some(&desc), "name"), " ▼");
        assert!(get_sort_class(Some(&desc), "name").ends_with("--active"));
    }

    #[test]
    fn header_state_counts_visible_rows_only() {
        let visible = vec!["a".to_string(), "b".to_string()];
        let mut selection = RowSelection::default();
        assert_eq!(header_state_for(&selection, &visible), HeaderCheckState::Unchecked);
        selection.set("a", true);
        assert_eq!(header_state_for(&selection, &visible), HeaderCheckState::Indeterminate);
        selection.set("b", true);
        assert_eq!(header_state_for(&selection, &visible), HeaderCheckState::Checked);
    }

    #[test]
    fn paging_clears_selection_but_sorting_keeps_it() {
        let mut state = TableState::new(10);
        state.selection.set("a", true);
        state.toggle_sort("name");
        assert_eq!(state.selection.len(), 1);

        state.go_to_page(2, 25);
        assert_eq!(state.query.page(), 2);
        assert!(state.selection.is_empty());

        state.selection.set("b", true);
        state.go_to_page(2, 25);
        assert_eq!(state.selection.len(), 1);
    }

    #[test]
    fn filter_change_resets_page_and_selection() {
        let mut state = TableState::new(10);
        state.go_to_page(3, 30);
        state.selection.set("x", true);

        state.update_filters(|f| f.search_text = "lamp".into());
        assert_eq!(state.query.page(), 1);
        assert!(state.selection.is_empty());
        assert_eq!(state.filters().active_count(), 1);

        state.selection.set("y", true);
        state.update_filters(|f| f.search_text = "lamp".into());
        assert_eq!(state.selection.len(), 1);
    }

    #[test]
    fn resize_returns_to_first_page() {
        let mut state = TableState::new(5);
        state.go_to_page(2, 12);
        state.collection_resized();
        assert_eq!(state.query.page(), 1);
    }

    #[test]
    fn refetch_past_the_end_moves_back_and_clears_selection() {
        let mut state = TableState::new(10);
        state.go_to_page(3, 25);
        state.selection.set("p21", true);

        state.fit_to(25);
        assert_eq!(state.query.page(), 3);
        assert_eq!(state.selection.len(), 1);

        state.fit_to(5);
        assert_eq!(state.query.page(), 1);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn selection_drops_rows_that_left_the_page() {
        let mut state = TableState::new(10);
        state.selection.set("a", true);
        state.selection.set("b", true);
        let visible = vec!["b".to_string(), "c".to_string()];

        assert!(state.selection_outside(&visible));
        state.prune_selection(&visible);
        assert!(!state.selection_outside(&visible));
        assert!(state.selection.is_selected("b"));
        assert!(!state.selection.is_selected("a"));
    }

    #[test]
    fn stepping_stops_at_both_edges() {
        let mut state = TableState::new(10);
        state.step_page(false, 25);
        assert_eq!(state.query.page(), 1);

        state.step_page(true, 25);
        state.step_page(true, 25);
        state.selection.set("p25", true);
        state.step_page(true, 25);
        assert_eq!(state.query.page(), 3);
        assert_eq!(state.selection.len(), 1);

        state.step_page(false, 25);
        assert_eq!(state.query.page(), 2);
        assert!(state.selection.is_empty());
    }
}
