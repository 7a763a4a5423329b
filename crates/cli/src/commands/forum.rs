//! Comment forum commands.

use scrutin_client::{ApiClient, GatewayError, comments};
use scrutin_core::SurveyId;

/// List comments on a survey.
#[allow(clippy::print_stdout)]
pub async fn list(api: &ApiClient, id: SurveyId) -> Result<(), GatewayError> {
    let all = comments::list(api, id).await?;

    if all.is_empty() {
        println!("No comments yet.");
        return Ok(());
    }

    for comment in all {
        println!("#{}: {}", comment.user_id, comment.content);
    }
    Ok(())
}

/// Post a comment (requires login).
#[allow(clippy::print_stdout)]
pub async fn post(
    api: &ApiClient,
    id: SurveyId,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = content.trim();
    if content.is_empty() {
        return Err("write a comment first".into());
    }

    comments::post(api, id, content).await?;
    println!("Comment posted.");
    Ok(())
}
