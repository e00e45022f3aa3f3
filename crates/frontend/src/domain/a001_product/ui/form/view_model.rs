use crate::domain::a001_product::api;
use crate::shared::components::image_upload::{files_of, pending_images, PendingImages};
use crate::shared::toast::ToastService;
use crate::system::auth::context::AuthContext;
use contracts::domain::a001_product::{Product, ProductForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// One input signal per form field, bound straight to thaw inputs.
#[derive(Clone, Copy)]
pub struct ProductFormVm {
    id: StoredValue<Option<String>>,
    pub name: RwSignal<String>,
    pub brand: RwSignal<String>,
    pub description: RwSignal<String>,
    pub category: RwSignal<String>,
    pub sub_category: RwSignal<String>,
    pub third_level_category: RwSignal<String>,
    pub original_price: RwSignal<String>,
    pub price: RwSignal<String>,
    pub stock_quantity: RwSignal<String>,
    pub sku: RwSignal<String>,
    pub weight: RwSignal<String>,
    pub dimensions: RwSignal<String>,
    pub tags: RwSignal<String>,
    pub existing_images: RwSignal<Vec<String>>,
    pub pending: PendingImages,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    auth: Option<AuthContext>,
}

impl ProductFormVm {
    pub fn new(id: Option<String>) -> Self {
        let vm = Self {
            id: StoredValue::new(id.clone()),
            name: RwSignal::new(String::new()),
            brand: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            sub_category: RwSignal::new(String::new()),
            third_level_category: RwSignal::new(String::new()),
            original_price: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            stock_quantity: RwSignal::new(String::new()),
            sku: RwSignal::new(String::new()),
            weight: RwSignal::new(String::new()),
            dimensions: RwSignal::new(String::new()),
            tags: RwSignal::new(String::new()),
            existing_images: RwSignal::new(Vec::new()),
            pending: pending_images(),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            auth: use_context::<AuthContext>(),
        };
        if let Some(id) = id {
            vm.load(id);
        }
        vm
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(Option::is_some)
    }

    fn load(&self, id: String) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match api::fetch_product(&id).await {
                Ok(product) => this.fill(&product),
                Err(e) => {
                    log::error!("load product {} for edit: {}", id, e);
                    if let Some(auth) = this.auth {
                        auth.expire_on(&e);
                    }
                    let _ = this.error.try_set(Some(e.to_string()));
                }
            }
            let _ = this.loading.try_set(false);
        });
    }

    fn fill(&self, product: &Product) {
        let form = ProductForm::from_product(product);
        let _ = self.name.try_set(form.name);
        let _ = self.brand.try_set(form.brand);
        let _ = self.description.try_set(form.description);
        let _ = self.category.try_set(form.category);
        let _ = self.sub_category.try_set(form.sub_category);
        let _ = self.third_level_category.try_set(form.third_level_category);
        let _ = self.original_price.try_set(form.original_price);
        let _ = self.price.try_set(form.price);
        let _ = self.stock_quantity.try_set(form.stock_quantity);
        let _ = self.sku.try_set(form.sku);
        let _ = self.weight.try_set(form.weight);
        let _ = self.dimensions.try_set(form.dimensions);
        let _ = self.tags.try_set(form.tags);
        let _ = self.existing_images.try_set(product.images.clone());
    }

    fn form(&self) -> ProductForm {
        ProductForm {
            name: self.name.get_untracked(),
            brand: self.brand.get_untracked(),
            description: self.description.get_untracked(),
            category: self.category.get_untracked(),
            sub_category: self.sub_category.get_untracked(),
            third_level_category: self.third_level_category.get_untracked(),
            original_price: self.original_price.get_untracked(),
            price: self.price.get_untracked(),
            stock_quantity: self.stock_quantity.get_untracked(),
            sku: self.sku.get_untracked(),
            weight: self.weight.get_untracked(),
            dimensions: self.dimensions.get_untracked(),
            tags: self.tags.get_untracked(),
        }
    }

    /// Validates, uploads and calls `on_saved` once the backend accepted it.
    pub fn save(&self, toasts: ToastService, on_saved: Callback<()>) {
        let fields = match self.form().to_fields() {
            Ok(fields) => fields,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };
        if !self.is_edit_mode() && self.pending.with_untracked(Vec::is_empty) {
            self.error.set(Some("At least one product image is required".into()));
            return;
        }

        let this = *self;
        let id = self.id.get_value();
        let files = files_of(self.pending);
        this.error.set(None);
        this.saving.set(true);
        spawn_local(async move {
            match api::save_product(id.as_deref(), &fields, files).await {
                Ok(product) => {
                    let verb = if id.is_some() { "updated" } else { "created" };
                    log::info!("product {} {}", product.id, verb);
                    toasts.success(format!("Product \"{}\" {}", product.name, verb));
                    on_saved.run(());
                }
                Err(e) => {
                    if let Some(auth) = this.auth {
                        auth.expire_on(&e);
                    }
                    toasts.error(e.to_string());
                    let _ = this.error.try_set(Some(e.to_string()));
                }
            }
            let _ = this.saving.try_set(false);
        });
    }
}
