//! Survey payload types.
//!
//! These mirror the survey service's JSON payloads. Unknown fields are
//! ignored on deserialization; the client renders what it recognizes and
//! does not validate payload shape beyond that.

use serde::{Deserialize, Serialize};

use super::{OptionId, SurveyId, UserId};

/// One entry in the survey listing (`GET /surveys`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SurveySummary {
    /// Survey ID.
    pub id: SurveyId,
    /// Survey title.
    pub title: String,
    /// The question being asked.
    pub question: String,
}

/// Full survey detail (`GET /surveys/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SurveyDetail {
    /// Survey title.
    pub title: String,
    /// The question being asked.
    pub question: String,
    /// Answer options to choose from.
    pub options: Vec<SurveyOption>,
}

/// A single answer option within a survey.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SurveyOption {
    /// Option ID, submitted back when responding.
    pub id: OptionId,
    /// Display text.
    pub text: String,
}

/// One row of aggregated results (`GET /surveys/{id}/results`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultRow {
    /// Option text.
    pub text: String,
    /// Number of votes received.
    pub count: i64,
}

/// Chart-ready series split out of a result listing: parallel label and
/// value vectors, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSeries {
    /// Option labels, one per row.
    pub labels: Vec<String>,
    /// Vote counts, parallel to `labels`.
    pub values: Vec<i64>,
}

impl ResultSeries {
    /// Split result rows into parallel label/value vectors.
    #[must_use]
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        Self {
            labels: rows.iter().map(|r| r.text.clone()).collect(),
            values: rows.iter().map(|r| r.count).collect(),
        }
    }

    /// Whether the series has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A comment attached to a survey (`GET /surveys/{id}/comments`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Comment {
    /// Author's user ID. The service does not expose usernames here.
    pub user_id: UserId,
    /// Comment body.
    pub content: String,
}

/// Request body for creating a survey (`POST /surveys`, admin only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSurvey {
    /// Survey title.
    pub title: String,
    /// The question being asked.
    pub question: String,
    /// Whether the survey is publicly visible.
    pub is_public: bool,
    /// Answer options, at least two.
    pub options: Vec<NewOption>,
}

/// One answer option in a survey-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOption {
    /// Display text.
    pub text: String,
}
