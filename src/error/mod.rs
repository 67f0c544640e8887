pub(crate) mod internal;

use std::fmt;

/// Business rule rejections of the session operations.
/// Messages are deliberately generic so that callers can not tell
/// which field was wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    // Email/password pair not found in the directory.
    InvalidCredentials,
    // One or more registration fields missing, or the email is taken.
    InvalidRegistration,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::InvalidRegistration => write!(f, "Registration failed"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Error returned from the public api.
#[derive(Debug)]
pub enum IdguardError {
    Auth(AuthError),
    Internal(internal::Error),
}

impl IdguardError {
    pub fn auth_error(&self) -> Option<AuthError> {
        match self {
            IdguardError::Auth(err) => Some(*err),
            IdguardError::Internal(_) => None,
        }
    }
}

impl fmt::Display for IdguardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IdguardError::Auth(err) => err.fmt(f),
            IdguardError::Internal(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for IdguardError {}

impl From<AuthError> for IdguardError {
    fn from(err: AuthError) -> Self {
        IdguardError::Auth(err)
    }
}

impl From<internal::Error> for IdguardError {
    fn from(err: internal::Error) -> Self {
        IdguardError::Internal(err)
    }
}

impl From<std::io::Error> for IdguardError {
    fn from(err: std::io::Error) -> Self {
        IdguardError::Internal(err.into())
    }
}
