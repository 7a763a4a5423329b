//! Survey endpoints: listing, detail, responding, results, creation.

use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use scrutin_core::{NewSurvey, OptionId, ResultRow, SurveyDetail, SurveyId, SurveySummary};

use crate::gateway::{ApiClient, GatewayError, RequestOptions};

/// How a response submission went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Submitted with the stored bearer token.
    Authenticated,
    /// Submitted anonymously after the authenticated attempt failed.
    Anonymous,
}

/// List all visible surveys.
///
/// # Errors
///
/// Returns `GatewayError` if the request fails.
pub async fn list(api: &ApiClient) -> Result<Vec<SurveySummary>, GatewayError> {
    api.request_json("/surveys", RequestOptions::get(false))
        .await
}

/// Fetch one survey with its options.
///
/// # Errors
///
/// Returns `GatewayError` if the request fails.
pub async fn get(api: &ApiClient, id: SurveyId) -> Result<SurveyDetail, GatewayError> {
    api.request_json(&format!("/surveys/{id}"), RequestOptions::get(false))
        .await
}

/// Submit a response to a survey.
///
/// The first attempt is authenticated. If it fails for any reason, one
/// anonymous retry follows before the error surfaces — the token is
/// optional server-side, so an anonymous vote still counts. This conflates
/// auth failures with unrelated server errors; the behavior is kept as the
/// original client had it.
///
/// # Errors
///
/// Returns the anonymous attempt's `GatewayError` when both attempts fail.
#[instrument(skip(api))]
pub async fn respond(
    api: &ApiClient,
    id: SurveyId,
    option: OptionId,
) -> Result<Submission, GatewayError> {
    let path = format!("/surveys/{id}/respond");
    let body = json!({ "option_id": option });

    match api
        .request(&path, RequestOptions::post(body.clone(), true))
        .await
    {
        Ok(_) => Ok(Submission::Authenticated),
        Err(first) => {
            tracing::debug!(error = %first, "Authenticated response failed, retrying anonymously");
            api.request(&path, RequestOptions::post(body, false))
                .await?;
            Ok(Submission::Anonymous)
        }
    }
}

/// Fetch aggregated results for a survey.
///
/// # Errors
///
/// Returns `GatewayError` if the request fails.
pub async fn results(api: &ApiClient, id: SurveyId) -> Result<Vec<ResultRow>, GatewayError> {
    api.request_json(&format!("/surveys/{id}/results"), RequestOptions::get(false))
        .await
}

/// Create a survey. The server only accepts this from admin accounts.
///
/// Returns the new survey's ID.
///
/// # Errors
///
/// Returns `GatewayError` if the request fails or the response carries no
/// usable ID.
#[instrument(skip(api, survey), fields(title = %survey.title))]
pub async fn create(api: &ApiClient, survey: &NewSurvey) -> Result<SurveyId, GatewayError> {
    #[derive(Deserialize)]
    struct Created {
        id: SurveyId,
    }

    let body = serde_json::to_value(survey).map_err(|e| GatewayError::Decode(e.to_string()))?;

    let created: Created = api
        .request_json("/surveys", RequestOptions::post(body, true))
        .await?;

    Ok(created.id)
}
