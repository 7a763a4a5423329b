//! Admin-only endpoints.
//!
//! Survey creation also requires admin rights server-side but lives with
//! the other survey calls in [`crate::surveys`]; this module holds the
//! endpoints under the `/admin` prefix.

use tracing::instrument;

use scrutin_core::UserId;

use crate::gateway::{ApiClient, GatewayError, RequestOptions};

/// Grant or revoke admin rights on an account.
///
/// The flag travels as a query parameter; the request has no body.
///
/// # Errors
///
/// Returns `GatewayError` if the request fails.
#[instrument(skip(api))]
pub async fn set_role(api: &ApiClient, user: UserId, is_admin: bool) -> Result<(), GatewayError> {
    api.request(
        &format!("/admin/users/{user}/role?is_admin={is_admin}"),
        RequestOptions::patch(true),
    )
    .await?;

    Ok(())
}
