use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot, watch};

use crate::client::Api;
use crate::common::ErrorKind;
use crate::core::{Principal, Registration, SignIn, UnitOfWork};
use crate::error::internal;
use crate::{IdguardError, Result};

/// Cloneable access to the session service.
///
/// Every clone may submit operations; they are applied one at a time
/// by the service. Observers get the published principal through
/// [`SessionHandle::subscribe`].
#[derive(Clone)]
pub struct SessionHandle {
    request_send: mpsc::Sender<UnitOfWork>,
    observer: watch::Receiver<Arc<Principal>>,
}

impl SessionHandle {
    pub(crate) fn new(
        request_send: mpsc::Sender<UnitOfWork>,
        observer: watch::Receiver<Arc<Principal>>,
    ) -> Self {
        Self {
            request_send,
            observer,
        }
    }

    /// Receiver notified whenever the current principal changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Principal>> {
        self.observer.clone()
    }

    async fn submit(
        &self,
        uow: UnitOfWork,
        rx: oneshot::Receiver<std::result::Result<(), crate::AuthError>>,
    ) -> Result<()> {
        self.request_send
            .send(uow)
            .await
            .map_err(|_| service_gone("send uow"))?;

        rx.await
            .map_err(|_| service_gone("receive response"))?
            .map_err(IdguardError::from)
    }
}

fn service_gone(description: &str) -> IdguardError {
    internal::Error::from(ErrorKind::Internal(format!(
        "session service closed. {}",
        description
    )))
    .into()
}

#[async_trait]
impl Api for SessionHandle {
    async fn sign_in(&self, email: &str, password: &str) -> Result<()> {
        let (uow, rx) = UnitOfWork::new_sign_in(SignIn::new(email, password));
        self.submit(uow, rx).await
    }

    async fn sign_up(&self, registration: Registration) -> Result<()> {
        let (uow, rx) = UnitOfWork::new_sign_up(registration);
        self.submit(uow, rx).await
    }

    async fn sign_out(&self) -> Result<()> {
        let (uow, rx) = UnitOfWork::new_sign_out();
        self.submit(uow, rx).await
    }

    fn current(&self) -> Arc<Principal> {
        self.observer.borrow().clone()
    }
}
