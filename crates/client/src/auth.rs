//! Authentication flow.
//!
//! Login is the one endpoint that does not go through the gateway: the
//! service expects `application/x-www-form-urlencoded` credentials there
//! (everything else is JSON). That inconsistency belongs to the remote API,
//! so login keeps its own request path here rather than bending the
//! gateway's contract.

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use tracing::instrument;

use scrutin_core::{LoginGrant, Session};

use crate::gateway::{ApiClient, GatewayError, RequestOptions};
use crate::session::{SessionError, SessionStore};

/// Fallback message when a rejected login carries no detail.
const LOGIN_FAILED_MESSAGE: &str = "login failed";

/// Errors that can occur during authentication.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The login request never reached the server.
    #[error("backend unreachable")]
    Unreachable,

    /// The server rejected the credentials.
    #[error("{0}")]
    Rejected(String),

    /// A gateway call failed (registration goes through the gateway).
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Persisting the session failed after a successful login.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Log in with username and password.
///
/// On success all four session fields are persisted together through the
/// gateway's session store, and the resulting session is returned.
///
/// # Errors
///
/// Returns `AuthError::Rejected` with the server's `detail` message (or a
/// fixed fallback) if the credentials are refused, `AuthError::Unreachable`
/// on transport failure, and `AuthError::Session` if the session cannot be
/// persisted.
#[instrument(skip(api, password), fields(username = %username))]
pub async fn login(
    api: &ApiClient,
    username: &str,
    password: &SecretString,
) -> Result<Session, AuthError> {
    let response = api
        .http()
        .post(api.endpoint("/auth/login"))
        .form(&[("username", username), ("password", password.expose_secret())])
        .send()
        .await
        .map_err(|_| AuthError::Unreachable)?;

    let status = response.status();
    // Same lossy recovery as the gateway: an unparseable body becomes an
    // empty object and the fixed fallback message takes over.
    let body: Value = response
        .json()
        .await
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

    if !status.is_success() {
        let message = body
            .get("detail")
            .and_then(Value::as_str)
            .unwrap_or(LOGIN_FAILED_MESSAGE)
            .to_string();
        return Err(AuthError::Rejected(message));
    }

    let grant: LoginGrant = serde_json::from_value(body)
        .map_err(|e| AuthError::Gateway(GatewayError::Decode(e.to_string())))?;

    let session = Session::from(grant);
    api.store().save(&session)?;

    tracing::info!(username = %session.username, "Logged in");
    Ok(session)
}

/// Register a new account. Plain JSON through the gateway; no session is
/// created until the user logs in.
///
/// # Errors
///
/// Returns `AuthError::Gateway` with the server's normalized error if
/// registration is refused.
#[instrument(skip(api, password), fields(username = %username))]
pub async fn register(
    api: &ApiClient,
    username: &str,
    email: &str,
    password: &SecretString,
) -> Result<(), AuthError> {
    let body = json!({
        "username": username,
        "email": email,
        "password": password.expose_secret(),
    });

    api.request("/auth/register", RequestOptions::post(body, false))
        .await?;

    Ok(())
}

/// Discard the stored session.
///
/// # Errors
///
/// Returns `AuthError::Session` if the session file cannot be removed.
pub fn logout(store: &SessionStore) -> Result<(), AuthError> {
    store.clear()?;
    Ok(())
}
