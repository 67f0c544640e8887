use clap::Args;

use crate::cli::report;
use crate::client::{Api, SessionHandle};
use crate::notify::{Operation, Toast};
use crate::Result;

/// Sign in against the directory
#[derive(Args, Debug)]
pub struct SignInCommand {
    /// Account email
    #[arg(long, env = "IDGUARD_EMAIL")]
    email: String,
    /// Account password
    #[arg(long, env = "IDGUARD_PASSWORD", hide_env_values = true)]
    password: String,
    /// Sign out right after signing in
    #[arg(long)]
    sign_out: bool,
    /// Print the principal as json
    #[arg(long)]
    json: bool,
}

impl SignInCommand {
    pub async fn run(self, client: SessionHandle) -> Result<()> {
        let result = client.sign_in(&self.email, &self.password).await;
        let toast = Toast::from_result(Operation::SignIn, &result);
        report(&toast, &client.current(), self.json)?;
        result?;

        if self.sign_out {
            let result = client.sign_out().await;
            let toast = Toast::from_result(Operation::SignOut, &result);
            report(&toast, &client.current(), self.json)?;
            result?;
        }

        Ok(())
    }
}
