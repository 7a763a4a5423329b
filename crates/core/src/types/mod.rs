//! Core types for Scrutin.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod session;
pub mod survey;
pub mod user;

pub use id::*;
pub use session::Session;
pub use survey::{
    Comment, NewOption, NewSurvey, ResultRow, ResultSeries, SurveyDetail, SurveyOption,
    SurveySummary,
};
pub use user::{LoginGrant, Profile, UserHit};
