#![allow(clippy::module_inception)]

pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod error;
pub mod notify;
pub mod router;

pub use crate::error::{AuthError, IdguardError};
pub type Result<T, E = crate::error::IdguardError> = std::result::Result<T, E>;

pub use crate::core::{Principal, Role, User};
pub use crate::router::{Route, ViewId};

pub(crate) mod common {
    pub(crate) type Result<T, E = crate::error::internal::Error> = std::result::Result<T, E>;

    pub(crate) type ErrorKind = crate::error::internal::ErrorKind;

    pub use crate::error::AuthError;

    pub type Time = chrono::DateTime<chrono::Utc>;

    pub use tracing::{debug, error, info, trace, warn};
}
