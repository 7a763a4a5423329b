//! Login, registration, and logout commands.

use secrecy::SecretString;

use scrutin_client::{ApiClient, AuthError, auth};

/// Log in and persist the session.
#[allow(clippy::print_stdout)]
pub async fn login(api: &ApiClient, username: &str, password: SecretString) -> Result<(), AuthError> {
    let session = auth::login(api, username, &password).await?;

    println!("Logged in as {}.", session.username);
    if session.is_admin() {
        println!("This account has admin rights.");
    }
    Ok(())
}

/// Create a new account.
#[allow(clippy::print_stdout)]
pub async fn register(
    api: &ApiClient,
    username: &str,
    email: &str,
    password: SecretString,
) -> Result<(), AuthError> {
    auth::register(api, username, email, &password).await?;

    println!("Account created. You can now log in with `scrutin login`.");
    Ok(())
}

/// Discard the stored session.
#[allow(clippy::print_stdout)]
pub fn logout(api: &ApiClient) -> Result<(), AuthError> {
    auth::logout(api.store())?;

    println!("Logged out.");
    Ok(())
}
