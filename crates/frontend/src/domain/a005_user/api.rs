use contracts::domain::a005_user::{User, UsersResponse};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

/// Users are read-only in the admin.
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    let response: UsersResponse = get_json("/user", "Failed to fetch users").await?;
    Ok(response.users)
}
