use contracts::domain::a004_banner::{
    Banner, BannerResponse, BannerStatus, BannerStatusRequest, BannersResponse,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::multipart::MultipartFields;
use web_sys::File;

use crate::shared::api_utils::{delete, form_data, get_json, send_json, send_multipart, Verb};

pub async fn fetch_banners() -> Result<Vec<Banner>, ApiError> {
    let response: BannersResponse = get_json("/banner", "Failed to fetch banners").await?;
    Ok(response.banners)
}

pub async fn fetch_banner(id: &str) -> Result<Banner, ApiError> {
    let response: BannerResponse =
        get_json(&format!("/banner/{}", id), "Failed to fetch banner").await?;
    Ok(response.banner)
}

pub async fn delete_banner(id: &str) -> Result<(), ApiError> {
    delete(&format!("/banner/{}", id), "Failed to delete banner").await
}

/// Multipart create/update with the single `image` part.
pub async fn save_banner(
    id: Option<&str>,
    status: BannerStatus,
    image: Option<File>,
) -> Result<Banner, ApiError> {
    let fields = MultipartFields::new().text("status", status.as_str());
    let files: Vec<(&str, File)> = image.into_iter().map(|f| ("image", f)).collect();
    let body = form_data(&fields, &files)?;

    let response: BannerResponse = match id {
        None => send_multipart(Verb::Post, "/banner", body, "Failed to create banner").await?,
        Some(id) => {
            send_multipart(Verb::Put, &format!("/banner/{}", id), body, "Failed to update banner")
                .await?
        }
    };
    Ok(response.banner)
}

/// Status-only update, sent as JSON so the stored image is left alone.
pub async fn set_banner_status(id: &str, status: BannerStatus) -> Result<Banner, ApiError> {
    let response: BannerResponse = send_json(
        Verb::Put,
        &format!("/banner/{}", id),
        &BannerStatusRequest { status },
        "Failed to update banner status",
    )
    .await?;
    Ok(response.banner)
}
