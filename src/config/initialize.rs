use std::path::Path;

use tokio::fs;

use crate::client::SessionHandle;
use crate::common::{debug, info};
use crate::config::Config;
use crate::core;
use crate::error::internal;
use crate::Result;

#[derive(Debug)]
pub struct Initializer {
    pub config: Config,
}

impl Initializer {
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub async fn load_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Load config file {}", path.display());

        let raw = fs::read_to_string(path).await?;
        let config = serde_yaml::from_str::<Config>(&raw).map_err(internal::Error::from)?;

        Ok(Self { config })
    }

    pub fn set_request_channel_buffer(&mut self, buffer: Option<usize>) {
        if let Some(buffer) = buffer {
            self.config.session.request_channel_buffer = Some(buffer);
        }
    }

    /// Spawn the session service and return a handle to it.
    /// Must be called within a tokio runtime.
    pub fn run_session(self) -> SessionHandle {
        info!(users = self.config.session.users.len(), "Start session service");

        let (service, handle) = core::Builder::from_config(self.config.session).build();
        tokio::spawn(service.run());

        handle
    }
}
