use crate::domain::a002_category::api;
use crate::shared::components::image_upload::{files_of, pending_images, PendingImages};
use crate::shared::toast::ToastService;
use crate::system::auth::context::AuthContext;
use contracts::domain::a002_category::CategoryForm as CategoryFields;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct CategoryFormVm {
    id: StoredValue<Option<String>>,
    pub name: RwSignal<String>,
    pub existing_image: RwSignal<Option<String>>,
    pub pending: PendingImages,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    auth: Option<AuthContext>,
}

impl CategoryFormVm {
    pub fn new(id: Option<String>) -> Self {
        let vm = Self {
            id: StoredValue::new(id.clone()),
            name: RwSignal::new(String::new()),
            existing_image: RwSignal::new(None),
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
            match api::fetch_category(&id).await {
                Ok(category) => {
                    let form = CategoryFields::from_category(&category);
                    let _ = this.name.try_set(form.name);
                    let _ = this.existing_image.try_set(category.image);
                }
                Err(e) => {
                    log::error!("load category {} for edit: {}", id, e);
                    if let Some(auth) = this.auth {
                        auth.expire_on(&e);
                    }
                    let _ = this.error.try_set(Some(e.to_string()));
                }
            }
            let _ = this.loading.try_set(false);
        });
    }

    pub fn save(&self, toasts: ToastService, on_saved: Callback<()>) {
        let form = CategoryFields {
            name: self.name.get_untracked(),
        };
        let image = files_of(self.pending).into_iter().next();
        let fields = match form.to_fields(image.is_some(), !self.is_edit_mode()) {
            Ok(fields) => fields,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };

        let this = *self;
        let id = self.id.get_value();
        this.error.set(None);
        this.saving.set(true);
        spawn_local(async move {
            match api::save_category(id.as_deref(), &fields, image).await {
                Ok(category) => {
                    let verb = if id.is_some() { "updated" } else { "created" };
                    log::info!("category {} {}", category.id, verb);
                    toasts.success(format!("Category \"{}\" {}", category.name, verb));
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
