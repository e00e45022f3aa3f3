use contracts::domain::a001_product::{Product, ProductResponse, ProductsResponse, ReviewRequest};
use contracts::shared::api_error::ApiError;
use contracts::shared::multipart::MultipartFields;
use contracts::system::auth::SuccessResponse;
use web_sys::File;

use crate::shared::api_utils::{delete, form_data, get_json, send_json, send_multipart, Verb};

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    let response: ProductsResponse = get_json("/product/", "Failed to fetch products").await?;
    Ok(response.products)
}

pub async fn fetch_product(id: &str) -> Result<Product, ApiError> {
    let response: ProductResponse =
        get_json(&format!("/product/{}", id), "Failed to fetch product").await?;
    Ok(response.product)
}

pub async fn delete_product(id: &str) -> Result<(), ApiError> {
    delete(&format!("/product/admin/{}", id), "Failed to delete product").await
}

/// Creates (`id == None`) or updates a product. New images go under the
/// repeated `images` field; an update without files keeps the stored ones.
pub async fn save_product(
    id: Option<&str>,
    fields: &MultipartFields,
    images: Vec<File>,
) -> Result<Product, ApiError> {
    let files: Vec<(&str, File)> = images.into_iter().map(|f| ("images", f)).collect();
    let body = form_data(fields, &files)?;

    let response: ProductResponse = match id {
        None => {
            send_multipart(
                Verb::Post,
                "/product/admin/create-product",
                body,
                "Failed to create product",
            )
            .await?
        }
        Some(id) => {
            send_multipart(
                Verb::Put,
                &format!("/product/admin/{}", id),
                body,
                "Failed to update product",
            )
            .await?
        }
    };
    Ok(response.product)
}

pub async fn add_review(id: &str, review: &ReviewRequest) -> Result<SuccessResponse, ApiError> {
    send_json(
        Verb::Post,
        &format!("/product/admin/{}/reviews", id),
        review,
        "Failed to add review",
    )
    .await
}
