mod root;
pub use root::{parse, Command, IdguardCommand, SessionOptions};

pub mod route;
pub mod sign_in;
pub mod sign_up;

use crate::client::Api;
use crate::core::Principal;
use crate::notify::Toast;
use crate::router;
use crate::Result;

// Print the toast, then where the principal lands.
pub(super) fn report(toast: &Toast, principal: &Principal, json: bool) -> Result<()> {
    println!("{}", toast);

    if let Some(user) = principal.user() {
        if json {
            let encoded = serde_json::to_string_pretty(user)
                .map_err(crate::error::internal::Error::from)?;
            println!("{}", encoded);
        } else {
            println!("{} <{}> [{}]", user.name(), user.email(), user.role());
        }
    }

    let landing = router::resolve_landing_view(principal);
    println!("landing: {} ({})", landing, landing.path());
    Ok(())
}

pub(super) async fn sign_in_if_requested(
    client: &impl Api,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    match (email, password) {
        (Some(email), Some(password)) => client.sign_in(&email, &password).await,
        _ => Ok(()),
    }
}
