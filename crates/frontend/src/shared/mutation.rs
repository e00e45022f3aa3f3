//! Row mutations against a [`Collection`].
//!
//! A successful call patches the snapshot synchronously; a failed one leaves
//! it untouched. At most one request per row id is in flight: a second
//! trigger while the first is pending is ignored and reported as `None`.

use std::collections::HashSet;
use std::future::Future;

use contracts::shared::api_error::ApiError;
use contracts::shared::list_query::Identifiable;
use leptos::prelude::*;

use super::collection::Collection;

pub struct Mutations<T: Send + Sync + 'static> {
    collection: Collection<T>,
    pending: RwSignal<HashSet<String>>,
}

impl<T: Send + Sync + 'static> Clone for Mutations<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Mutations<T> {}

impl<T> Mutations<T>
where
    T: Identifiable + Clone + Send + Sync + 'static,
{
    pub fn new(collection: Collection<T>) -> Self {
        Self {
            collection,
            pending: RwSignal::new(HashSet::new()),
        }
    }

    /// Whether a request for this row is outstanding. Tracked, so row
    /// controls can bind `disabled` to it.
    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.with(|p| p.contains(id))
    }

    fn begin(&self, id: &str) -> bool {
        self.pending
            .try_update(|p| p.insert(id.to_string()))
            .unwrap_or(false)
    }

    fn finish(&self, id: &str) {
        let _ = self.pending.try_update(|p| p.remove(id));
    }

    /// Deletes a row remotely, then removes it from the snapshot.
    pub async fn delete_entity<F>(self, id: String, request: F) -> Option<Result<(), ApiError>>
    where
        F: Future<Output = Result<(), ApiError>>,
    {
        if !self.begin(&id) {
            log::debug!("delete of {} already in flight", id);
            return None;
        }

        let result = request.await;
        match &result {
            Ok(()) => {
                self.collection.remove_by_id(&id);
            }
            Err(err) => {
                log::error!("delete of {} failed: {}", id, err);
                self.collection.report(err);
            }
        }

        self.finish(&id);
        Some(result)
    }

    /// Sends an update and swaps in the canonical entity the server returns.
    pub async fn update_entity<F>(self, id: String, request: F) -> Option<Result<T, ApiError>>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        if !self.begin(&id) {
            log::debug!("update of {} already in flight", id);
            return None;
        }

        let result = request.await;
        match &result {
            Ok(entity) => {
                if !self.collection.replace_by_id(entity.clone()) {
                    log::warn!("updated row {} is no longer in the snapshot", id);
                }
            }
            Err(err) => {
                log::error!("update of {} failed: {}", id, err);
                self.collection.report(err);
            }
        }

        self.finish(&id);
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category::Category;
    use futures::executor::block_on;
    use futures::task::noop_waker;
    use std::future::{pending, ready};
    use std::task::{Context, Poll};

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            image: None,
        }
    }

    fn seeded() -> (Collection<Category>, Mutations<Category>) {
        let collection = Collection::new();
        collection.set_items(vec![category("c1", "Shoes"), category("c2", "Bags")]);
        (collection, Mutations::new(collection))
    }

    #[test]
    fn delete_removes_exactly_one_row() {
        Owner::new().with(|| {
            let (collection, mutations) = seeded();
            let result = block_on(mutations.delete_entity("c1".into(), ready(Ok(()))));
            assert_eq!(result, Some(Ok(())));
            assert_eq!(collection.items.get_untracked(), vec![category("c2", "Bags")]);
            assert!(!mutations.is_pending("c1"));
        });
    }

    #[test]
    fn failed_delete_leaves_snapshot_untouched() {
        Owner::new().with(|| {
            let (collection, mutations) = seeded();
            let before = collection.items.get_untracked();
            let result = block_on(mutations.delete_entity(
                "c1".into(),
                ready(Err(ApiError::Network("connection refused".into()))),
            ));
            assert!(matches!(result, Some(Err(ApiError::Network(_)))));
            assert_eq!(collection.items.get_untracked(), before);
            assert!(!mutations.is_pending("c1"));
        });
    }

    #[test]
    fn second_request_for_a_busy_row_is_ignored() {
        Owner::new().with(|| {
            let (collection, mutations) = seeded();
            let waker = noop_waker();
            let mut cx = Context::from_waker(&waker);

            let mut first = Box::pin(
                mutations.delete_entity("c1".into(), pending::<Result<(), ApiError>>()),
            );
            assert!(matches!(first.as_mut().poll(&mut cx), Poll::Pending));
            assert!(mutations.is_pending("c1"));

            let again = block_on(mutations.delete_entity("c1".into(), ready(Ok(()))));
            assert_eq!(again, None);
            assert_eq!(collection.items.with_untracked(Vec::len), 2);

            let other = block_on(mutations.update_entity("c2".into(), ready(Ok(category("c2", "Totes")))));
            assert!(matches!(other, Some(Ok(_))));
        });
    }

    #[test]
    fn update_swaps_in_the_server_entity_in_place() {
        Owner::new().with(|| {
            let (collection, mutations) = seeded();
            let result = block_on(mutations.update_entity(
                "c1".into(),
                ready(Ok(category("c1", "Sneakers"))),
            ));
            assert_eq!(result, Some(Ok(category("c1", "Sneakers"))));
            assert_eq!(
                collection.items.get_untracked(),
                vec![category("c1", "Sneakers"), category("c2", "Bags")]
            );
        });
    }

    #[test]
    fn failed_update_keeps_the_old_row() {
        Owner::new().with(|| {
            let (collection, mutations) = seeded();
            let result = block_on(mutations.update_entity(
                "c2".into(),
                ready(Err(ApiError::Validation {
                    status: 422,
                    message: "Name taken".into(),
                })),
            ));
            assert!(matches!(result, Some(Err(ApiError::Validation { .. }))));
            assert_eq!(collection.items.get_untracked()[1], category("c2", "Bags"));
        });
    }
}
