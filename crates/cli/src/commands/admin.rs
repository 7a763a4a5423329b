//! Admin commands.

use scrutin_client::{ApiClient, GatewayError, admin};
use scrutin_core::UserId;

/// Grant or revoke admin rights on an account.
#[allow(clippy::print_stdout)]
pub async fn set_role(api: &ApiClient, user: UserId, is_admin: bool) -> Result<(), GatewayError> {
    admin::set_role(api, user, is_admin).await?;

    println!("Role updated: user #{user} admin={is_admin}.");
    Ok(())
}
