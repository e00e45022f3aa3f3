//! Fetch-and-cache store for one remote collection.
//!
//! A page creates its own [`Collection`], loads it once on mount and then
//! patches the snapshot locally after mutations. Nothing is shared between
//! pages. All writes go through `try_*` so a response arriving after the
//! page was closed is dropped instead of panicking.

use std::future::Future;

use contracts::shared::api_error::ApiError;
use contracts::shared::list_query::{remove_by_id, replace_by_id, Identifiable};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::AuthContext;

pub struct Collection<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    auth: Option<AuthContext>,
}

impl<T: Send + Sync + 'static> Clone for Collection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Collection<T> {}

impl<T> Collection<T>
where
    T: Identifiable + Clone + Send + Sync + 'static,
{
    /// Empty snapshot. Must be called inside a component so the auth
    /// context can be picked up for 401 handling.
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            auth: use_context::<AuthContext>(),
        }
    }

    /// Runs one full-collection GET and stores the result verbatim.
    ///
    /// On failure the previous snapshot stays untouched and the message lands
    /// in `error`. `loading` is cleared either way.
    pub async fn fetch_all<F>(self, request: F) -> Result<Vec<T>, ApiError>
    where
        F: Future<Output = Result<Vec<T>, ApiError>>,
    {
        let _ = self.loading.try_set(true);
        let _ = self.error.try_set(None);

        let result = request.await;
        match &result {
            Ok(items) => {
                log::debug!("collection loaded: {} items", items.len());
                let _ = self.items.try_set(items.clone());
            }
            Err(err) => {
                log::error!("collection load failed: {}", err);
                let _ = self.error.try_set(Some(err.to_string()));
                self.report(err);
            }
        }

        let _ = self.loading.try_set(false);
        result
    }

    /// Fire-and-forget variant of [`Collection::fetch_all`] for mount effects
    /// and refresh buttons.
    pub fn load<F>(self, request: F)
    where
        F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        spawn_local(async move {
            let _ = self.fetch_all(request).await;
        });
    }

    pub fn set_items(&self, items: Vec<T>) {
        let _ = self.items.try_set(items);
    }

    pub fn remove_by_id(&self, id: &str) -> bool {
        self.items
            .try_update(|items| remove_by_id(items, id))
            .unwrap_or(false)
    }

    pub fn replace_by_id(&self, entity: T) -> bool {
        self.items
            .try_update(|items| replace_by_id(items, entity))
            .unwrap_or(false)
    }

    /// Ends the session when the backend says it is gone.
    pub fn report(&self, err: &ApiError) {
        if let Some(auth) = self.auth {
            auth.expire_on(err);
        }
    }
}

impl<T> Default for Collection<T>
where
    T: Identifiable + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category::Category;
    use futures::executor::block_on;
    use std::future::ready;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            image: None,
        }
    }

    #[test]
    fn fetch_stores_the_list_verbatim() {
        Owner::new().with(|| {
            let collection = Collection::<Category>::new();
            let fetched = vec![category("c2", "Bags"), category("c1", "Shoes")];
            let result = block_on(collection.fetch_all(ready(Ok(fetched.clone()))));

            assert_eq!(result, Ok(fetched.clone()));
            assert_eq!(collection.items.get_untracked(), fetched);
            assert!(!collection.loading.get_untracked());
            assert_eq!(collection.error.get_untracked(), None);
        });
    }

    #[test]
    fn failed_fetch_keeps_previous_snapshot() {
        Owner::new().with(|| {
            let collection = Collection::<Category>::new();
            collection.set_items(vec![category("c1", "Shoes")]);

            let result = block_on(collection.fetch_all(ready(Err(ApiError::Server {
                status: 500,
                message: "Database unavailable".into(),
            }))));

            assert!(result.is_err());
            assert_eq!(collection.items.get_untracked(), vec![category("c1", "Shoes")]);
            assert_eq!(collection.error.get_untracked().as_deref(), Some("Database unavailable"));
            assert!(!collection.loading.get_untracked());
        });
    }

    #[test]
    fn refetch_clears_the_previous_error() {
        Owner::new().with(|| {
            let collection = Collection::<Category>::new();
            collection.error.set(Some("Network error: offline".into()));
            let _ = block_on(collection.fetch_all(ready(Ok(Vec::new()))));
            assert_eq!(collection.error.get_untracked(), None);
        });
    }

    #[test]
    fn local_patches_by_id() {
        Owner::new().with(|| {
            let collection = Collection::<Category>::new();
            collection.set_items(vec![category("c1", "Shoes"), category("c2", "Bags")]);

            assert!(collection.replace_by_id(category("c2", "Totes")));
            assert!(!collection.replace_by_id(category("c9", "Hats")));
            assert!(collection.remove_by_id("c1"));
            assert!(!collection.remove_by_id("c1"));
            assert_eq!(collection.items.get_untracked(), vec![category("c2", "Totes")]);
        });
    }
}
