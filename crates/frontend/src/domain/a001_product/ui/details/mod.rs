mod view_model;

use self::view_model::ProductDetailsVm;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::PRODUCT_EDIT;
use crate::layout::tabs::{detail_key, tab_label_for_key};
use crate::shared::api_utils::image_url;
use crate::shared::components::error_panel::ErrorPanel;
use crate::shared::components::star_rating::StarRating;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::format_date;
use crate::shared::format::{format_count, format_money};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::toast::use_toast;
use contracts::domain::a001_product::{Product, ProductReview};
use leptos::prelude::*;
use thaw::*;

fn info_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-grid__row">
            <span class="detail-grid__label">{label}</span>
            <span class="detail-grid__value">{value}</span>
        </div>
    }
}

fn review_item(review: ProductReview) -> impl IntoView {
    let rating = review.rating;
    view! {
        <div class="review">
            <div class="review__header">
                <span class="review__author">
                    {review.name.unwrap_or_else(|| "Anonymous".to_string())}
                </span>
                <StarRating rating=Signal::derive(move || rating) />
                {review.created_at.map(|d| view! {
                    <span class="review__date">{format_date(&d)}</span>
                })}
            </div>
            <p class="review__comment">{review.comment.unwrap_or_default()}</p>
        </div>
    }
}

#[component]
fn Gallery(product: Product, active: RwSignal<usize>) -> impl IntoView {
    let images: Vec<String> = product.images.iter().filter_map(|p| image_url(p)).collect();
    if images.is_empty() {
        return view! {
            <div class="gallery gallery--empty">{icon("image")}<span>"No images"</span></div>
        }
        .into_any();
    }

    let main_images = images.clone();
    let main = move || {
        let index = active.get().min(main_images.len().saturating_sub(1));
        main_images.get(index).cloned().unwrap_or_default()
    };

    view! {
        <div class="gallery">
            <img class="gallery__main" src=main alt=product.name.clone() />
            <div class="gallery__thumbs">
                {images
                    .into_iter()
                    .enumerate()
                    .map(|(index, src)| view! {
                        <img
                            class="gallery__thumb"
                            class:gallery__thumb--active=move || active.get() == index
                            src=src
                            alt=""
                            on:click=move |_| active.set(index)
                        />
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

/// Read-only product card with reviews and an add-review form.
#[component]
pub fn ProductDetail(id: String, on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_toast();
    let vm = ProductDetailsVm::new(id);

    let open_edit = move |_| {
        let key = detail_key(PRODUCT_EDIT, &vm.id());
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    let product_view = move || {
        vm.product.get().map(|product| {
            let discount = product.discount_percent();
            let rating = product.average_rating;
            let review_count = product.reviews.len();
            let reviews = product.reviews.clone();
            let tags = product.tags.clone();

            view! {
                <div class="product-detail">
                    <Gallery product=product.clone() active=vm.active_image />

                    <div class="product-detail__info">
                        <h2 class="product-detail__name">{product.name.clone()}</h2>
                        <div class="product-detail__rating">
                            <StarRating rating=Signal::derive(move || rating) show_value=true />
                            <span>{format!("({} reviews)", review_count)}</span>
                        </div>

                        <div class="product-detail__price">
                            <span class="price-cell__current">{format_money(product.price)}</span>
                            {(discount > 0).then(|| view! {
                                <span class="price-cell__original">{format_money(product.original_price)}</span>
                                <UiBadge variant="success".to_string()>{format!("{}% off", discount)}</UiBadge>
                            })}
                        </div>

                        <div class="detail-grid">
                            {info_row("Brand", product.brand.clone().unwrap_or_else(|| "-".into()))}
                            {info_row("Category", product.category_path())}
                            {info_row("SKU", product.sku.clone().unwrap_or_else(|| "-".into()))}
                            {info_row("In stock", format_count(product.stock_quantity))}
                            {info_row(
                                "Weight",
                                product.weight.map(|w| format!("{} kg", w)).unwrap_or_else(|| "-".into()),
                            )}
                            {info_row("Dimensions", product.dimensions.clone().unwrap_or_else(|| "-".into()))}
                            {info_row(
                                "Added",
                                product.created_at.as_deref().map(format_date).unwrap_or_else(|| "-".into()),
                            )}
                        </div>

                        {(!tags.is_empty()).then(|| view! {
                            <div class="product-detail__tags">
                                {tags.into_iter().map(|t| view! { <UiBadge>{t}</UiBadge> }).collect_view()}
                            </div>
                        })}

                        <p class="product-detail__description">
                            {product.description.clone().unwrap_or_default()}
                        </p>
                    </div>
                </div>

                <div class="reviews">
                    <h3>"Customer Reviews"</h3>
                    {if reviews.is_empty() {
                        view! { <p class="reviews__empty">"No reviews yet."</p> }.into_any()
                    } else {
                        reviews.into_iter().map(review_item).collect_view().into_any()
                    }}
                </div>
            }
        })
    };

    view! {
        <PageFrame page_id="a001_product--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || vm.product.with(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_else(|| "Product".into()))}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=open_edit>
                        {icon("edit")}
                        " Edit"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || vm.loading.get() && vm.product.with(Option::is_none)>
                    <div class="page__loading"><Spinner /></div>
                </Show>

                {move || vm.error.get().map(|err| view! {
                    <ErrorPanel message=err on_retry=Callback::new(move |_| vm.load()) />
                })}

                {product_view}

                <Show when=move || vm.product.with(Option::is_some)>
                    <form
                        class="review-form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            vm.submit_review(toasts);
                        }
                    >
                        <h3>"Add a Review"</h3>
                        {move || vm.review_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Rating"</Label>
                                <Select value=vm.review_rating>
                                    {(1..=5).rev().map(|n| view! {
                                        <option value=n.to_string()>{format!("{} ★", n)}</option>
                                    }).collect_view()}
                                </Select>
                            </Flex>
                            <div style="flex: 1;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Comment"</Label>
                                    <Textarea value=vm.review_comment placeholder="What did the customer think?" />
                                </Flex>
                            </div>
                            <button
                                type="submit"
                                class="button button--primary"
                                disabled=move || vm.submitting.get()
                            >
                                {move || if vm.submitting.get() { "Submitting..." } else { "Submit Review" }}
                            </button>
                        </Flex>
                    </form>
                </Show>
            </div>
        </PageFrame>
    }
}
