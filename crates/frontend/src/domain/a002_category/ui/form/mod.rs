mod view_model;

use self::view_model::CategoryFormVm;
use crate::shared::components::image_upload::ImageUpload;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategoryForm(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_toast();
    let vm = CategoryFormVm::new(id);
    let title = if vm.is_edit_mode() { "Edit Category" } else { "Add Category" };

    view! {
        <PageFrame page_id="a002_category--form" category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save(toasts, on_saved)
                        disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                        " Cancel"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show when=move || !vm.loading.get() fallback=|| view! { <div class="page__loading"><Spinner /></div> }>
                    <div class="form" style="max-width: 520px;">
                        <div class="form__group">
                            <label class="form__label">"Category Name *"</label>
                            <Input value=vm.name placeholder="e.g. Shoes" />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Image"</label>
                            <ImageUpload
                                pending=vm.pending
                                existing=Signal::derive(move || vm.existing_image.get().into_iter().collect::<Vec<_>>())
                            />
                        </div>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
