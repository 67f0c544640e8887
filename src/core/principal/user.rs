use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::Time;

/// Access tier of a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated account.
///
/// `role` has no setter: it is decided when the account is created
/// and a role change requires signing in as a different account.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: String,
    email: String,
    name: String,
    role: Role,
    created_at: Time,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_login: Option<Time>,
}

impl User {
    /// Account as returned by a [`Directory`](crate::core::Directory).
    /// `last_login` starts unset and is stamped on sign-in.
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        created_at: Time,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            role,
            created_at,
            last_login: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn created_at(&self) -> Time {
        self.created_at
    }
    pub fn last_login(&self) -> Option<Time> {
        self.last_login
    }

    pub(crate) fn stamp_login(&mut self, now: Time) {
        self.last_login = Some(now);
    }
}
