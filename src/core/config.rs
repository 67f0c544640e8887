use std::fmt;

use chrono::TimeZone;
use serde::Deserialize;

use crate::common::Time;
use crate::core::Role;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Accounts known to the sign-in directory.
    pub users: Vec<UserEntry>,
    /// Buffer size of the channel feeding the session service.
    pub request_channel_buffer: Option<usize>,
}

#[derive(Deserialize, Clone)]
pub struct UserEntry {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub created_at: Option<Time>,
}

impl fmt::Debug for UserEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UserEntry")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"****")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl Config {
    const DEFAULT_REQUEST_CHANNEL_BUFFER: usize = 64;

    pub(crate) fn request_channel_buffer(&self) -> usize {
        self.request_channel_buffer
            .map(|n| std::cmp::max(n, 1))
            .unwrap_or(Config::DEFAULT_REQUEST_CHANNEL_BUFFER)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users: builtin_users(),
            request_channel_buffer: None,
        }
    }
}

// The two demo accounts.
fn builtin_users() -> Vec<UserEntry> {
    vec![
        UserEntry {
            id: "1".into(),
            email: "admin@gmail.com".into(),
            password: "admin123".into(),
            name: "Admin User".into(),
            role: Role::Admin,
            created_at: chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single(),
        },
        UserEntry {
            id: "2".into(),
            email: "user@gmail.com".into(),
            password: "user123".into(),
            name: "John Doe".into(),
            role: Role::User,
            created_at: chrono::Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).single(),
        },
    ]
}
