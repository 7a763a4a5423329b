//! The comment forum attached to each survey.

use serde_json::json;
use tracing::instrument;

use scrutin_core::{Comment, SurveyId};

use crate::gateway::{ApiClient, GatewayError, RequestOptions};

/// List the comments on a survey.
///
/// # Errors
///
/// Returns `GatewayError` if the request fails.
pub async fn list(api: &ApiClient, survey: SurveyId) -> Result<Vec<Comment>, GatewayError> {
    api.request_json(
        &format!("/surveys/{survey}/comments"),
        RequestOptions::get(false),
    )
    .await
}

/// Post a comment on a survey. Requires a logged-in session; without a
/// stored token the server rejects the anonymous request.
///
/// # Errors
///
/// Returns `GatewayError` if the request fails.
#[instrument(skip(api, content))]
pub async fn post(api: &ApiClient, survey: SurveyId, content: &str) -> Result<(), GatewayError> {
    api.request(
        &format!("/surveys/{survey}/comments"),
        RequestOptions::post(json!({ "content": content }), true),
    )
    .await?;

    Ok(())
}
