mod view_model;

use self::view_model::ProductFormVm;
use crate::domain::a002_category::api::fetch_categories;
use crate::shared::collection::Collection;
use crate::shared::components::image_upload::ImageUpload;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};
use crate::shared::toast::use_toast;
use contracts::domain::a002_category::Category;
use leptos::prelude::*;
use thaw::*;

#[component]
fn Field(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            {children()}
        </div>
    }
}

/// Create/edit product form. `id == None` creates.
#[component]
pub fn ProductForm(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_toast();
    let vm = ProductFormVm::new(id);

    // Category names for the picker; the stored value is kept even when it
    // is not among them.
    let categories = Collection::<Category>::new();
    categories.load(fetch_categories());
    let category_options = Memo::new(move |_| {
        let current = vm.category.get();
        let mut names: Vec<String> =
            categories.items.with(|c| c.iter().map(|c| c.name.clone()).collect());
        if !current.is_empty() && !names.contains(&current) {
            names.insert(0, current);
        }
        names
    });

    let title = if vm.is_edit_mode() { "Edit Product" } else { "Add Product" };

    view! {
        <PageFrame page_id="a001_product--form" category=PAGE_CAT_FORM>
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
                    <div class="form form--two-columns">
                        <Field label="Product Name *">
                            <Input value=vm.name placeholder="Product name" />
                        </Field>
                        <Field label="Brand *">
                            <Input value=vm.brand placeholder="Brand" />
                        </Field>
                        <Field label="Category *">
                            <Select value=vm.category>
                                <option value="">"Select category"</option>
                                {move || category_options.get().into_iter().map(|name| view! {
                                    <option value=name.clone()>{name.clone()}</option>
                                }).collect_view()}
                            </Select>
                        </Field>
                        <Field label="Sub Category *">
                            <Input value=vm.sub_category placeholder="Sub category" />
                        </Field>
                        <Field label="Third Level Category">
                            <Input value=vm.third_level_category placeholder="Optional" />
                        </Field>
                        <Field label="SKU">
                            <Input value=vm.sku placeholder="SKU" />
                        </Field>
                        <Field label="Original Price *">
                            <Input value=vm.original_price input_type=InputType::Number placeholder="0" />
                        </Field>
                        <Field label="Sale Price *">
                            <Input value=vm.price input_type=InputType::Number placeholder="0" />
                        </Field>
                        <Field label="Stock Quantity *">
                            <Input value=vm.stock_quantity input_type=InputType::Number placeholder="0" />
                        </Field>
                        <Field label="Weight (kg)">
                            <Input value=vm.weight input_type=InputType::Number placeholder="Optional" />
                        </Field>
                        <Field label="Dimensions">
                            <Input value=vm.dimensions placeholder="e.g. 10 x 20 x 5 cm" />
                        </Field>
                        <Field label="Tags">
                            <Input value=vm.tags placeholder="Comma separated" />
                        </Field>
                    </div>

                    <Field label="Description *">
                        <Textarea value=vm.description placeholder="Describe the product" attr:rows=5 />
                    </Field>

                    <Field label="Images">
                        <ImageUpload
                            pending=vm.pending
                            existing=Signal::derive(move || vm.existing_images.get())
                            multiple=true
                        />
                    </Field>
                </Show>
            </div>
        </PageFrame>
    }
}
