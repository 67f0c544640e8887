use clap::Args;

use crate::cli::report;
use crate::client::{Api, SessionHandle};
use crate::core::Registration;
use crate::notify::{Operation, Toast};
use crate::Result;

/// Register an account and sign it in
#[derive(Args, Debug)]
pub struct SignUpCommand {
    /// Account email
    #[arg(long)]
    email: String,
    /// Account password
    #[arg(long, env = "IDGUARD_PASSWORD", hide_env_values = true)]
    password: String,
    /// Display name
    #[arg(long)]
    name: String,
    /// Print the principal as json
    #[arg(long)]
    json: bool,
}

impl SignUpCommand {
    pub async fn run(self, client: SessionHandle) -> Result<()> {
        let SignUpCommand {
            email,
            password,
            name,
            json,
        } = self;

        let result = client
            .sign_up(Registration::new(email, password, name))
            .await;
        let toast = Toast::from_result(Operation::SignUp, &result);
        report(&toast, &client.current(), json)?;

        result
    }
}
