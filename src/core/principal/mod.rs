mod user;
pub use user::{Role, User};

/// The subject of the current session.
#[derive(Debug, Clone, PartialEq)]
pub enum Principal {
    AnonymousUser,
    User(User),
}

impl Principal {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Principal::User(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Principal::User(user) => Some(user),
            Principal::AnonymousUser => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(User::role)
    }
}

impl Default for Principal {
    fn default() -> Self {
        Principal::AnonymousUser
    }
}
