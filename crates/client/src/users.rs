//! Profile and user search endpoints.

use tracing::instrument;

use scrutin_core::{Profile, UserHit};

use crate::gateway::{ApiClient, GatewayError, RequestOptions};

/// Fetch the caller's own profile. Requires a logged-in session.
///
/// # Errors
///
/// Returns `GatewayError` if the request fails (typically a 401 when no
/// session is stored).
pub async fn me(api: &ApiClient) -> Result<Profile, GatewayError> {
    api.request_json("/users/me", RequestOptions::get(true))
        .await
}

/// Search users by name fragment.
///
/// # Errors
///
/// Returns `GatewayError` if the request fails.
#[instrument(skip(api))]
pub async fn search(api: &ApiClient, query: &str) -> Result<Vec<UserHit>, GatewayError> {
    api.request_json(
        &format!("/users/search?q={}", urlencoding::encode(query)),
        RequestOptions::get(false),
    )
    .await
}
