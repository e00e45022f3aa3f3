use contracts::domain::a002_category::{CategoriesResponse, Category, CategoryResponse};
use contracts::shared::api_error::ApiError;
use contracts::shared::multipart::MultipartFields;
use web_sys::File;

use crate::shared::api_utils::{delete, form_data, get_json, send_multipart, Verb};

pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    let response: CategoriesResponse = get_json("/category", "Failed to fetch categories").await?;
    Ok(response.categories)
}

pub async fn fetch_category(id: &str) -> Result<Category, ApiError> {
    let response: CategoryResponse =
        get_json(&format!("/category/{}", id), "Failed to fetch category").await?;
    Ok(response.category)
}

pub async fn delete_category(id: &str) -> Result<(), ApiError> {
    delete(&format!("/category/{}", id), "Failed to delete category").await
}

/// Creates (`id == None`) or updates a category. The tile goes as the single
/// `image` part; an update without it keeps the stored image.
pub async fn save_category(
    id: Option<&str>,
    fields: &MultipartFields,
    image: Option<File>,
) -> Result<Category, ApiError> {
    let files: Vec<(&str, File)> = image.into_iter().map(|f| ("image", f)).collect();
    let body = form_data(fields, &files)?;

    let response: CategoryResponse = match id {
        None => send_multipart(Verb::Post, "/category", body, "Failed to create category").await?,
        Some(id) => {
            send_multipart(
                Verb::Put,
                &format!("/category/{}", id),
                body,
                "Failed to update category",
            )
            .await?
        }
    };
    Ok(response.category)
}
