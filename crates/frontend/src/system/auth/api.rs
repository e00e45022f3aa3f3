use contracts::shared::api_error::ApiError;
use contracts::system::auth::{
    AdminIdentity, AdminLoginRequest, AdminSignUpRequest, LoginResponse, SessionCheckResponse,
    SuccessResponse,
};

use crate::shared::api_utils::{get_json, post_empty, send_json, Verb};

/// Admin login. The backend sets the session cookie on success.
pub async fn admin_login(request: &AdminLoginRequest) -> Result<AdminIdentity, ApiError> {
    let response: LoginResponse =
        send_json(Verb::Post, "/auth/admin-login", request, "Login failed").await?;
    log::info!("signed in as {}", response.user.email);
    Ok(response.user)
}

pub async fn admin_sign_up(request: &AdminSignUpRequest) -> Result<SuccessResponse, ApiError> {
    send_json(Verb::Post, "/auth/admin-sign-up", request, "Sign-up failed").await
}

/// Drops the server session.
pub async fn logout() -> Result<(), ApiError> {
    post_empty("/auth/log-out", "Logout failed").await
}

pub async fn test_session() -> Result<SessionCheckResponse, ApiError> {
    get_json("/auth/test-session", "Session check failed").await
}
