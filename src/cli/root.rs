use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::cli::{route, sign_in, sign_up};
use crate::client::SessionHandle;
use crate::config::{Config, Initializer};
use crate::Result;

/// Idguard command
#[derive(Parser, Debug)]
#[command(version, propagate_version = true, subcommand_required = true)]
pub struct IdguardCommand {
    /// Session options
    #[command(flatten)]
    pub session: SessionOptions,
    /// Subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Session options
#[derive(Args, Debug)]
pub struct SessionOptions {
    /// Configuration file path. built-in accounts are used when omitted
    #[arg(long, short = 'C', env = "IDGUARD_CONFIG_PATH", global = true)]
    pub config: Option<PathBuf>,
    /// Buffer size of the session request channel
    #[arg(long, env = "IDGUARD_REQUEST_CHANNEL_BUFFER", global = true)]
    pub request_channel_buffer: Option<usize>,
}

impl SessionOptions {
    /// Start the session service.
    pub async fn start(self) -> Result<SessionHandle> {
        let mut initializer = match self.config {
            Some(path) => Initializer::load_config_file(path).await?,
            None => Initializer::from_config(Config::default()),
        };
        initializer.set_request_channel_buffer(self.request_channel_buffer);

        Ok(initializer.run_session())
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in with email and password
    SignIn(sign_in::SignInCommand),
    /// Register a new account
    SignUp(sign_up::SignUpCommand),
    /// Resolve a navigation request
    Route(route::RouteCommand),
}

impl Command {
    pub async fn run(self, session: SessionOptions) -> Result<()> {
        let client = session.start().await?;
        match self {
            Command::SignIn(cmd) => cmd.run(client).await,
            Command::SignUp(cmd) => cmd.run(client).await,
            Command::Route(cmd) => cmd.run(client).await,
        }
    }
}

/// Parse command line args
pub fn parse() -> IdguardCommand {
    IdguardCommand::parse()
}
