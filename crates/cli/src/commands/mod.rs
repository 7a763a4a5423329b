//! Command implementations, one module per page of the original app.

pub mod admin;
pub mod auth;
pub mod forum;
pub mod surveys;
pub mod users;
