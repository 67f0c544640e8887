use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::common::{trace, Result};
use crate::core::credential::Credential;
use crate::core::middleware::Middleware;
use crate::core::{Principal, SessionStore, UnitOfWork};

// Applies session mutations and publishes the resulting principal.
pub(crate) struct Dispatcher {
    store: SessionStore,
    observer: watch::Sender<Arc<Principal>>,
}

impl Dispatcher {
    pub(crate) fn new(store: SessionStore, observer: watch::Sender<Arc<Principal>>) -> Self {
        Self { store, observer }
    }

    fn publish(&self) {
        let current = self.store.current();
        let modified = self.observer.send_if_modified(|published| {
            if published.as_ref() != current {
                *published = Arc::new(current.clone());
                true
            } else {
                false
            }
        });
        trace!(modified, "Publish session");
    }
}

#[async_trait]
impl Middleware for Dispatcher {
    async fn apply(&mut self, uow: UnitOfWork) -> Result<()> {
        match uow {
            UnitOfWork::SignIn(mut work) => {
                let response = match work.request.credential() {
                    Credential::Password(password) => self.store.sign_in(&password).await,
                };
                self.publish();
                work.send_response(response)
            }
            UnitOfWork::SignUp(mut work) => {
                let registration = work.request.clone();
                let response = self.store.sign_up(registration).await;
                self.publish();
                work.send_response(response)
            }
            UnitOfWork::SignOut(mut work) => {
                self.store.sign_out();
                self.publish();
                work.send_response(Ok(()))
            }
        }
    }
}
