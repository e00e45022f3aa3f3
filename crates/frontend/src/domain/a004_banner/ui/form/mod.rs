use crate::domain::a004_banner::api;
use crate::shared::components::image_upload::{files_of, pending_images, ImageUpload};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};
use crate::shared::toast::use_toast;
use crate::system::auth::context::AuthContext;
use contracts::domain::a004_banner::BannerStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Create/edit banner. A new banner needs an image; an edit may change only
/// the status.
#[component]
pub fn BannerForm(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_toast();
    let auth = use_context::<AuthContext>();
    let is_edit = id.is_some();
    let id = StoredValue::new(id);
    let status = RwSignal::new(BannerStatus::Active.as_str().to_string());
    let existing_image = RwSignal::new(None::<String>);
    let pending = pending_images();
    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    if let Some(banner_id) = id.get_value() {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_banner(&banner_id).await {
                Ok(banner) => {
                    let _ = status.try_set(banner.status.as_str().to_string());
                    let _ = existing_image.try_set(banner.image);
                }
                Err(e) => {
                    log::error!("load banner {} for edit: {}", banner_id, e);
                    if let Some(auth) = auth {
                        auth.expire_on(&e);
                    }
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
            let _ = loading.try_set(false);
        });
    }

    let save = move || {
        let image = files_of(pending).into_iter().next();
        if !is_edit && image.is_none() {
            error.set(Some("Banner image is required".into()));
            return;
        }
        let next = if status.get_untracked() == BannerStatus::Inactive.as_str() {
            BannerStatus::Inactive
        } else {
            BannerStatus::Active
        };

        let id = id.get_value();
        error.set(None);
        saving.set(true);
        spawn_local(async move {
            match api::save_banner(id.as_deref(), next, image).await {
                Ok(banner) => {
                    let verb = if id.is_some() { "updated" } else { "created" };
                    log::info!("banner {} {}", banner.id, verb);
                    toasts.success(format!("Banner {}", verb));
                    on_saved.run(());
                }
                Err(e) => {
                    if let Some(auth) = auth {
                        auth.expire_on(&e);
                    }
                    toasts.error(e.to_string());
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
            let _ = saving.try_set(false);
        });
    };

    view! {
        <PageFrame page_id="a004_banner--form" category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{if is_edit { "Edit Banner" } else { "Add Banner" }}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| save()
                        disabled=Signal::derive(move || saving.get() || loading.get())
                    >
                        {icon("save")}
                        {move || if saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                        " Cancel"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show when=move || !loading.get() fallback=|| view! { <div class="page__loading"><Spinner /></div> }>
                    <div class="form" style="max-width: 640px;">
                        <div class="form__group">
                            <label class="form__label">"Status"</label>
                            <Select value=status>
                                <option value=BannerStatus::Active.as_str()>"Active"</option>
                                <option value=BannerStatus::Inactive.as_str()>"Inactive"</option>
                            </Select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Banner Image"</label>
                            <ImageUpload
                                pending=pending
                                existing=Signal::derive(move || existing_image.get().into_iter().collect::<Vec<_>>())
                            />
                        </div>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
