//! User payload types.

use serde::Deserialize;

use super::UserId;

/// The caller's own profile (`GET /users/me`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    /// Username.
    pub username: String,
    /// Account email.
    pub email: String,
    /// Whether the account has admin rights.
    #[serde(default)]
    pub is_admin: bool,
    /// Whether the profile is publicly visible.
    #[serde(default)]
    pub profile_public: bool,
}

/// One hit in a user search (`GET /users/search?q=`).
///
/// Only the username is exposed; emails stay private in search results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserHit {
    /// Username.
    pub username: String,
}

/// Successful login response (`POST /auth/login`).
#[derive(Debug, Clone, Deserialize)]
pub struct LoginGrant {
    /// Bearer token for subsequent authenticated calls.
    pub access_token: String,
    /// Username of the authenticated account.
    pub username: String,
    /// User ID of the authenticated account.
    pub user_id: UserId,
    /// Whether the account has admin rights.
    #[serde(default)]
    pub is_admin: bool,
}
