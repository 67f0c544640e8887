mod service;
pub use self::service::{Builder, SessionService};

mod config;
pub use self::config::{Config, UserEntry};

mod principal;
pub use self::principal::{Principal, Role, User};

mod credential;
pub(crate) use self::credential::SignIn;
pub use self::credential::{Credential, Password, Provider as CredentialProvider, Registration};

mod directory;
pub use self::directory::{Directory, MemoryDirectory};

mod session;
pub use self::session::SessionStore;

mod uow;
pub(crate) use self::uow::UnitOfWork;

mod middleware;
