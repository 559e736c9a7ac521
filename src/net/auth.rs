//! Request builders for the auth service.
//!
//! The service accepts either username or email credentials on separate
//! endpoints; `state::auth` decides which one a given identifier uses.

use super::error::ApiError;
use super::http::HttpClient;
use super::types::{LoginResponse, RegisterRequest, User};

/// `POST /api/auth/login` with username credentials.
pub async fn login_with_username(http: &HttpClient, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let payload = serde_json::json!({ "username": username, "password": password });
    http.post_json("/api/auth/login", &payload).await
}

/// `POST /api/auth/login-with-email` with email credentials.
pub async fn login_with_email(http: &HttpClient, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let payload = serde_json::json!({ "email": email, "password": password });
    http.post_json("/api/auth/login-with-email", &payload).await
}

/// `POST /api/auth/register`.
pub async fn register(http: &HttpClient, request: &RegisterRequest) -> Result<(), ApiError> {
    http.post_json_unit("/api/auth/register", request).await
}

/// `POST /api/auth/logout`. The session header still carries the token;
/// callers clear local state regardless of the outcome.
pub async fn logout(http: &HttpClient) -> Result<(), ApiError> {
    http.post_unit("/api/auth/logout").await
}

/// `GET /api/users/me`, the identity endpoint used for revalidation.
pub async fn current_user(http: &HttpClient) -> Result<User, ApiError> {
    http.get_json("/api/users/me").await
}
