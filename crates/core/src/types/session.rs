//! The persisted session record.

use serde::{Deserialize, Serialize};

use super::LoginGrant;

/// The four session fields persisted together on successful login.
///
/// All values are stored as strings, matching what the original client kept
/// in its key-value store: `user_id` is the decimal rendering of the numeric
/// ID and `is_admin` is `"1"` or `"0"`. The record is either absent or
/// reflects the last successful login in full; partial states never exist
/// because the store writes all four fields in one atomic operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token.
    pub access_token: String,
    /// Username of the logged-in account.
    pub username: String,
    /// User ID, as a decimal string.
    pub user_id: String,
    /// Admin flag, `"1"` or `"0"`.
    pub is_admin: String,
}

impl Session {
    /// Whether the session belongs to an admin account.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_admin == "1"
    }
}

impl From<LoginGrant> for Session {
    fn from(grant: LoginGrant) -> Self {
        Self {
            access_token: grant.access_token,
            username: grant.username,
            user_id: grant.user_id.to_string(),
            is_admin: if grant.is_admin { "1" } else { "0" }.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;

    #[test]
    fn test_session_from_grant() {
        let grant = LoginGrant {
            access_token: "abc".to_string(),
            username: "bob".to_string(),
            user_id: UserId::new(1),
            is_admin: false,
        };

        let session = Session::from(grant);
        assert_eq!(session.access_token, "abc");
        assert_eq!(session.username, "bob");
        assert_eq!(session.user_id, "1");
        assert_eq!(session.is_admin, "0");
        assert!(!session.is_admin());
    }

    #[test]
    fn test_session_admin_flag() {
        let grant = LoginGrant {
            access_token: "t".to_string(),
            username: "root".to_string(),
            user_id: UserId::new(7),
            is_admin: true,
        };

        let session = Session::from(grant);
        assert_eq!(session.is_admin, "1");
        assert!(session.is_admin());
    }
}
