use super::filter::ListFilters;
use super::pagination::{paginate, total_pages, Page, PageCursor};

/// Filter selection plus page position of one list screen.
///
/// The page is reset to 1 whenever the filters actually change, so a user
/// can never be left on a page that no longer exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    filters: ListFilters,
    cursor: PageCursor,
}

impl ListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            filters: ListFilters::default(),
            cursor: PageCursor::new(page_size),
        }
    }

    pub fn filters(&self) -> &ListFilters {
        &self.filters
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn page(&self) -> usize {
        self.cursor.page()
    }

    /// Applies an edit to the filters. Returns whether anything changed.
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut ListFilters)) -> bool {
        let before = self.filters.clone();
        edit(&mut self.filters);
        let changed = before != self.filters;
        if changed {
            self.cursor.reset();
        }
        changed
    }

    pub fn go_to_page(&mut self, page: usize, filtered_count: usize) {
        self.cursor
            .go_to(page, total_pages(filtered_count, self.cursor.page_size()));
    }

    pub fn previous_page(&mut self) {
        self.cursor.previous();
    }

    pub fn next_page(&mut self, filtered_count: usize) {
        self.cursor
            .next(total_pages(filtered_count, self.cursor.page_size()));
    }

    /// A local delete or status change shrank the snapshot.
    pub fn collection_resized(&mut self) {
        self.cursor.reset();
    }

    /// Whether the cursor sits past the last page of `filtered_count` rows.
    pub fn is_past_end(&self, filtered_count: usize) -> bool {
        self.cursor.page() > total_pages(filtered_count, self.cursor.page_size())
    }

    /// Pulls the cursor back onto the last page when a refetch shrank the
    /// filtered list underneath it. Returns whether it moved.
    pub fn fit_to(&mut self, filtered_count: usize) -> bool {
        if !self.is_past_end(filtered_count) {
            return false;
        }
        self.go_to_page(self.cursor.page(), filtered_count);
        true
    }

    /// Visible page of an already filtered list. A cursor left behind by a
    /// shrinking snapshot reads as the last page.
    pub fn page_of<T: Clone>(&self, filtered: &[T]) -> Page<T> {
        let size = self.cursor.page_size();
        let page = self.cursor.page().min(total_pages(filtered.len(), size));
        paginate(filtered, page, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::Product;
    use crate::shared::list_query::filter::apply_filters;
    use crate::shared::list_query::snapshot::remove_by_id;

    fn view(query: &ListQuery, items: &[Product]) -> Page<Product> {
        query.page_of(&apply_filters(items, query.filters()))
    }

    /// 25 products: 10 in category A, 15 in category B.
    fn catalog() -> Vec<Product> {
        (0..25)
            .map(|i| Product {
                id: format!("p{i}"),
                name: format!("Item {i}"),
                category: Some(if i < 10 { "A" } else { "B" }.to_string()),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn selecting_category_from_page_three_lands_on_page_one() {
        let items = catalog();
        let mut query = ListQuery::new(10);
        query.go_to_page(3, items.len());
        assert_eq!(query.page(), 3);
        assert_eq!(view(&query, &items).items.len(), 5);

        assert!(query.update_filters(|f| f.category = "A".into()));
        let page = view(&query, &items);
        assert_eq!(query.page(), 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 10);
        assert!(page.items.iter().all(|p| p.category.as_deref() == Some("A")));
    }

    #[test]
    fn any_filter_change_resets_page() {
        let items = catalog();
        let edits: [fn(&mut ListFilters); 5] = [
            |f| f.category = "B".into(),
            |f| f.sub_category = "x".into(),
            |f| f.third_level_category = "y".into(),
            |f| f.status = "active".into(),
            |f| f.search_text = "item".into(),
        ];
        for edit in edits {
            let mut query = ListQuery::new(10);
            query.go_to_page(2, items.len());
            assert_eq!(query.page(), 2);
            query.update_filters(edit);
            assert_eq!(query.page(), 1);
        }
    }

    #[test]
    fn unchanged_filters_keep_page() {
        let items = catalog();
        let mut query = ListQuery::new(10);
        query.go_to_page(2, items.len());
        assert!(!query.update_filters(|f| f.category.clear()));
        assert_eq!(query.page(), 2);
    }

    #[test]
    fn zero_matches_is_one_empty_page() {
        let items = catalog();
        let mut query = ListQuery::new(10);
        query.update_filters(|f| f.search_text = "no such thing".into());
        let page = view(&query, &items);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn delete_resets_page_and_shrinks_by_one() {
        let mut items = catalog();
        let mut query = ListQuery::new(10);
        query.go_to_page(3, items.len());

        assert!(remove_by_id(&mut items, "p24"));
        query.collection_resized();
        assert_eq!(items.len(), 24);
        assert_eq!(query.page(), 1);
        assert_eq!(view(&query, &items).items.len(), 10);
    }

    #[test]
    fn paging_clamps_to_filtered_total() {
        let items = catalog();
        let mut query = ListQuery::new(10);
        query.update_filters(|f| f.category = "A".into());
        let filtered = apply_filters(&items, query.filters()).len();
        query.go_to_page(2, filtered);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn next_page_is_bounded_by_the_filtered_list() {
        let items = catalog();
        let mut query = ListQuery::new(10);
        query.update_filters(|f| f.category = "B".into());
        let filtered = apply_filters(&items, query.filters()).len();

        query.next_page(filtered);
        query.next_page(filtered);
        assert_eq!(query.page(), 2);
        assert_eq!(view(&query, &items).items.len(), 5);

        query.previous_page();
        query.previous_page();
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn shrinking_refetch_pulls_cursor_back_in_range() {
        let items = catalog();
        let mut query = ListQuery::new(10);
        query.go_to_page(3, items.len());

        let refetched = &items[..5];
        let page = view(&query, refetched);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 5);

        assert!(query.is_past_end(refetched.len()));
        assert!(query.fit_to(refetched.len()));
        assert_eq!(query.page(), 1);
        assert!(!query.fit_to(refetched.len()));
    }

    #[test]
    fn refetch_that_keeps_the_page_does_not_move_it() {
        let items = catalog();
        let mut query = ListQuery::new(10);
        query.go_to_page(2, items.len());
        assert!(!query.fit_to(15));
        assert_eq!(query.page(), 2);

        assert!(query.fit_to(8));
        assert_eq!(query.page(), 1);
    }
}
