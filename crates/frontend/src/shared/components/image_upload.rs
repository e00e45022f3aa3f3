use crate::shared::api_utils::image_url;
use crate::shared::icons::icon;
use leptos::prelude::*;
use web_sys::{File, HtmlInputElement, Url};

/// A picked file and its `blob:` preview URL.
#[derive(Debug, Clone)]
pub struct PendingImage {
    pub file: File,
    pub preview: String,
}

/// Files chosen in the form and not yet uploaded. `File` is not `Send`, so
/// the signal lives in local storage.
pub type PendingImages = RwSignal<Vec<PendingImage>, LocalStorage>;

pub fn pending_images() -> PendingImages {
    RwSignal::new_local(Vec::new())
}

/// The files to put in the multipart body.
pub fn files_of(pending: PendingImages) -> Vec<File> {
    pending.with_untracked(|p| p.iter().map(|img| img.file.clone()).collect())
}

fn revoke(image: &PendingImage) {
    let _ = Url::revoke_object_url(&image.preview);
}

/// Click-to-pick image field with previews of current and new images.
///
/// With `multiple` unset a new pick replaces the previous one.
#[component]
pub fn ImageUpload(
    pending: PendingImages,
    /// Images already stored on the record.
    #[prop(optional, into)]
    existing: Signal<Vec<String>>,
    #[prop(optional)] multiple: bool,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(list) = input.files() else {
            return;
        };
        let picked: Vec<PendingImage> = (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|file| match Url::create_object_url_with_blob(&file) {
                Ok(preview) => Some(PendingImage { file, preview }),
                Err(e) => {
                    log::warn!("no preview for {}: {:?}", file.name(), e);
                    None
                }
            })
            .collect();
        log::debug!("picked {} image(s)", picked.len());

        pending.update(|p| {
            if !multiple {
                p.iter().for_each(revoke);
                p.clear();
            }
            p.extend(picked);
        });
        input.set_value("");
    };

    let remove = move |index: usize| {
        pending.update(|p| {
            if index < p.len() {
                let image = p.remove(index);
                revoke(&image);
            }
        });
    };

    on_cleanup(move || {
        let _ = pending.try_with_untracked(|p| p.iter().for_each(revoke));
    });

    view! {
        <div class="image-upload">
            <div
                class="image-upload__drop"
                on:click=move |_| {
                    if let Some(input) = input_ref.get() {
                        input.click();
                    }
                }
            >
                {icon("upload")}
                <p>{if multiple { "Click to upload images" } else { "Click to upload an image" }}</p>
                <input
                    node_ref=input_ref
                    type="file"
                    accept="image/*"
                    multiple=multiple
                    class="image-upload__input"
                    style="display: none;"
                    on:change=on_change
                />
            </div>

            <div class="image-upload__grid">
                {move || {
                    existing
                        .get()
                        .into_iter()
                        .filter_map(|path| image_url(&path))
                        .map(|src| view! {
                            <div class="image-upload__item image-upload__item--existing">
                                <img src=src alt="Current image" />
                            </div>
                        })
                        .collect_view()
                }}
                {move || {
                    pending.with(|p| {
                        p.iter()
                            .enumerate()
                            .map(|(index, image)| {
                                let name = image.file.name();
                                view! {
                                    <div class="image-upload__item">
                                        <img src=image.preview.clone() alt=name.clone() />
                                        <button
                                            type="button"
                                            class="image-upload__remove"
                                            title="Remove"
                                            on:click=move |_| remove(index)
                                        >
                                            {icon("x")}
                                        </button>
                                        <span class="image-upload__name">{name}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
        </div>
    }
}
