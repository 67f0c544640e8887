use std::borrow::Cow;
use std::fmt;

/// Credential presented to the directory.
pub enum Credential<'a> {
    Password(Password<'a>),
}

/// Email/password pair. `Debug` masks the password.
#[derive(Clone, PartialEq)]
pub struct Password<'a> {
    pub email: Cow<'a, str>,
    pub password: Cow<'a, str>,
}

impl<'a> Password<'a> {
    pub fn new(email: impl Into<Cow<'a, str>>, password: impl Into<Cow<'a, str>>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Password<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Password")
            .field("email", &self.email)
            .field("password", &"****")
            .finish()
    }
}

/// Anything that can present a credential.
pub trait Provider {
    fn credential(&self) -> Credential<'_>;
}

/// Fields submitted on sign-up. `Debug` masks the password.
#[derive(Clone, PartialEq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl Registration {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    pub(crate) fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty() && !self.name.is_empty()
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("password", &"****")
            .field("name", &self.name)
            .finish()
    }
}

/// Fields submitted on sign-in.
pub(crate) struct SignIn {
    email: String,
    password: String,
}

impl SignIn {
    pub(crate) fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Provider for SignIn {
    fn credential(&self) -> Credential<'_> {
        Credential::Password(Password::new(
            self.email.as_str(),
            self.password.as_str(),
        ))
    }
}
