//! Profile and user search commands.

use scrutin_client::{ApiClient, GatewayError, users};

use crate::render::yes_no;

/// Show the logged-in profile.
///
/// A rejected call renders as "not logged in" rather than an error,
/// matching the original profile page.
#[allow(clippy::print_stdout)]
pub async fn whoami(api: &ApiClient) -> Result<(), GatewayError> {
    match users::me(api).await {
        Ok(profile) => {
            println!("Username:       {}", profile.username);
            println!("Email:          {}", profile.email);
            println!("Admin:          {}", yes_no(profile.is_admin));
            println!("Public profile: {}", yes_no(profile.profile_public));
            Ok(())
        }
        Err(GatewayError::Api { .. }) => {
            println!("Not logged in. Use `scrutin login`.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Search users by name fragment.
#[allow(clippy::print_stdout)]
pub async fn search(api: &ApiClient, query: &str) -> Result<(), GatewayError> {
    let hits = users::search(api, query).await?;

    if hits.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for hit in hits {
        println!("{}", hit.username);
    }
    Ok(())
}
