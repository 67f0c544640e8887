use clap::Args;

use crate::cli::sign_in_if_requested;
use crate::client::{Api, SessionHandle};
use crate::router::{self, Route};
use crate::Result;

/// Resolve which view a navigation request ends up on
#[derive(Args, Debug)]
pub struct RouteCommand {
    /// Requested path(e.g. /admin, /user-dashboard)
    #[arg(index = 1, default_value = "/")]
    path: String,
    /// Sign in with this email before routing
    #[arg(long, requires = "password")]
    email: Option<String>,
    /// Password for --email
    #[arg(long, env = "IDGUARD_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

impl RouteCommand {
    pub async fn run(self, client: SessionHandle) -> Result<()> {
        sign_in_if_requested(&client, self.email, self.password).await?;

        let principal = client.current();
        match router::route_path(&principal, &self.path) {
            Route::Allow(view) => println!("allow {} ({})", view, view.path()),
            Route::Redirect(view) => println!("redirect {} ({})", view, view.path()),
        }

        if let Some(entry) = router::dashboard_entry(&principal, &self.path) {
            println!(
                "nav: {} -> {}{}",
                entry.label,
                entry.target.path(),
                if entry.active { " (active)" } else { "" }
            );
        }

        Ok(())
    }
}
