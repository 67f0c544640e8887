use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{Principal, Registration};
use crate::router::{self, ViewId};
use crate::Result;

mod handle;
pub use self::handle::SessionHandle;

/// Operations the presentation layer performs against the session.
#[async_trait]
pub trait Api {
    async fn sign_in(&self, email: &str, password: &str) -> Result<()>;
    async fn sign_up(&self, registration: Registration) -> Result<()>;
    async fn sign_out(&self) -> Result<()>;

    /// Snapshot of the current principal.
    fn current(&self) -> Arc<Principal>;

    fn is_authenticated(&self) -> bool {
        self.current().is_authenticated()
    }

    fn landing_view(&self) -> ViewId {
        router::resolve_landing_view(&self.current())
    }
}
