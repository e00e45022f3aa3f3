use crate::domain::a001_product::api;
use crate::shared::toast::ToastService;
use crate::system::auth::context::AuthContext;
use contracts::domain::a001_product::{Product, ReviewRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// State of the product detail tab.
#[derive(Clone, Copy)]
pub struct ProductDetailsVm {
    id: StoredValue<String>,
    pub product: RwSignal<Option<Product>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Index into `product.images` shown large.
    pub active_image: RwSignal<usize>,
    pub review_rating: RwSignal<String>,
    pub review_comment: RwSignal<String>,
    pub review_error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
    auth: Option<AuthContext>,
}

impl ProductDetailsVm {
    pub fn new(id: String) -> Self {
        let vm = Self {
            id: StoredValue::new(id),
            product: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            active_image: RwSignal::new(0),
            review_rating: RwSignal::new("5".to_string()),
            review_comment: RwSignal::new(String::new()),
            review_error: RwSignal::new(None),
            submitting: RwSignal::new(false),
            auth: use_context::<AuthContext>(),
        };
        vm.load();
        vm
    }

    pub fn id(&self) -> String {
        self.id.get_value()
    }

    pub fn load(&self) {
        let this = *self;
        let id = self.id();
        let _ = this.loading.try_set(true);
        let _ = this.error.try_set(None);
        spawn_local(async move {
            match api::fetch_product(&id).await {
                Ok(product) => {
                    let _ = this.active_image.try_set(0);
                    let _ = this.product.try_set(Some(product));
                }
                Err(e) => {
                    log::error!("product {}: {}", id, e);
                    if let Some(auth) = this.auth {
                        auth.expire_on(&e);
                    }
                    let _ = this.error.try_set(Some(e.to_string()));
                }
            }
            let _ = this.loading.try_set(false);
        });
    }

    /// Posts the review form, then reloads the product so the new review and
    /// average rating show up.
    pub fn submit_review(&self, toasts: ToastService) {
        let rating = self.review_rating.get_untracked().parse::<u8>().unwrap_or(0);
        let request = match ReviewRequest::new(rating, &self.review_comment.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                self.review_error.set(Some(message));
                return;
            }
        };

        let this = *self;
        let id = self.id();
        this.review_error.set(None);
        this.submitting.set(true);
        spawn_local(async move {
            match api::add_review(&id, &request).await {
                Ok(_) => {
                    toasts.success("Review added");
                    let _ = this.review_comment.try_set(String::new());
                    let _ = this.review_rating.try_set("5".to_string());
                    this.load();
                }
                Err(e) => {
                    toasts.error(e.to_string());
                    let _ = this.review_error.try_set(Some(e.to_string()));
                }
            }
            let _ = this.submitting.try_set(false);
        });
    }
}
