//! Survey browsing, responding, results, and creation commands.

use scrutin_client::{ApiClient, GatewayError, Submission, surveys};
use scrutin_core::{NewOption, NewSurvey, OptionId, ResultSeries, SurveyId};

use crate::render;

/// List all visible surveys.
#[allow(clippy::print_stdout)]
pub async fn list(api: &ApiClient) -> Result<(), GatewayError> {
    let all = surveys::list(api).await?;

    if all.is_empty() {
        println!("No surveys yet.");
        return Ok(());
    }

    for survey in all {
        println!("#{}  {}", survey.id, survey.title);
        println!("    {}", survey.question);
    }
    Ok(())
}

/// Show one survey with its options.
#[allow(clippy::print_stdout)]
pub async fn show(api: &ApiClient, id: SurveyId) -> Result<(), GatewayError> {
    let survey = surveys::get(api, id).await?;

    println!("{}", survey.title);
    println!("{}", survey.question);
    println!();
    for option in survey.options {
        println!("  [{}] {}", option.id, option.text);
    }
    println!();
    println!("Respond with: scrutin surveys respond {id} <option-id>");
    Ok(())
}

/// Submit a response.
#[allow(clippy::print_stdout)]
pub async fn respond(api: &ApiClient, id: SurveyId, option: OptionId) -> Result<(), GatewayError> {
    match surveys::respond(api, id, option).await? {
        Submission::Authenticated => println!("Response submitted."),
        Submission::Anonymous => println!("Response submitted anonymously."),
    }
    Ok(())
}

/// Show aggregated results as a table plus a bar chart.
#[allow(clippy::print_stdout)]
pub async fn results(api: &ApiClient, id: SurveyId) -> Result<(), GatewayError> {
    let rows = surveys::results(api, id).await?;
    let series = ResultSeries::from_rows(&rows);

    println!("{}", render::results_table(&rows));
    println!();
    println!("{}", render::bar_chart(&series));
    Ok(())
}

/// Create a survey (admin only).
///
/// Mirrors the original form's presence check: title, question, and at
/// least two non-empty options.
#[allow(clippy::print_stdout)]
pub async fn create(
    api: &ApiClient,
    title: String,
    question: String,
    public: bool,
    options: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options: Vec<NewOption> = options
        .into_iter()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .map(|text| NewOption { text })
        .collect();

    if title.trim().is_empty() || question.trim().is_empty() || options.len() < 2 {
        return Err("a survey needs a title, a question, and at least two options".into());
    }

    let survey = NewSurvey {
        title,
        question,
        is_public: public,
        options,
    };

    let id = surveys::create(api, &survey).await?;
    println!("Survey created (#{id}).");
    Ok(())
}
