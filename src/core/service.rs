use std::sync::Arc;

use tokio::sync::mpsc::{self, Receiver};
use tokio::sync::watch;

use crate::client::SessionHandle;
use crate::common::{error, info};
use crate::core::middleware::{Dispatcher, MiddlewareChain};
use crate::core::{Config, Directory, MemoryDirectory, Principal, SessionStore, UnitOfWork};

#[derive(Default)]
pub struct Builder {
    config: Option<Config>,
    directory: Option<Box<dyn Directory>>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: Config) -> Self {
        let mut builder = Builder::new();
        builder.config = Some(config);
        builder
    }

    /// Replace the in-memory directory built from the configured users.
    pub fn directory(mut self, directory: impl Directory + 'static) -> Self {
        self.directory = Some(Box::new(directory));
        self
    }

    pub fn build(self) -> (SessionService, SessionHandle) {
        let config = self.config.unwrap_or_default();
        let (send, recv) = mpsc::channel(config.request_channel_buffer());
        let (observer_send, observer_recv) = watch::channel(Arc::new(Principal::AnonymousUser));

        let directory = match self.directory {
            Some(directory) => directory,
            None => Box::new(MemoryDirectory::new(config.users)),
        };
        let dispatcher = Dispatcher::new(SessionStore::from_boxed(directory), observer_send);

        let service = SessionService {
            request_recv: recv,
            middlewares: MiddlewareChain::new(dispatcher),
        };

        (service, SessionHandle::new(send, observer_recv))
    }
}

/// Single writer of the session. Runs until every handle is dropped.
pub struct SessionService {
    request_recv: Receiver<UnitOfWork>,
    middlewares: MiddlewareChain,
}

impl SessionService {
    pub async fn run(mut self) {
        info!("Session service running");

        while let Some(uow) = self.request_recv.recv().await {
            if let Err(err) = self.middlewares.apply(uow).await {
                error!("Handle uow {}", err);
            }
        }

        info!("Session service stopped");
    }
}
