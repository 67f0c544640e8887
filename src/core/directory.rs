use async_trait::async_trait;

use crate::common::{debug, AuthError, Time};
use crate::core::{Password, User, UserEntry};

/// Sign-in directory. A remote identity provider can be plugged in
/// by implementing this trait.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Return the account matching the given email/password pair.
    async fn lookup(&self, password: &Password<'_>) -> Option<User>;

    /// Whether an account with the given id exists.
    async fn contains_id(&self, id: &str) -> bool;

    /// Add a self registered account. Fails when the email is taken.
    async fn register(&mut self, user: User, password: String) -> Result<(), AuthError>;
}

struct Account {
    user: User,
    password: String,
}

/// Directory held in process memory.
pub struct MemoryDirectory {
    accounts: Vec<Account>,
}

impl MemoryDirectory {
    pub fn new(entries: Vec<UserEntry>) -> Self {
        let now = chrono::Utc::now();
        Self {
            accounts: entries
                .into_iter()
                .map(|entry| Account::from_entry(entry, now))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Account {
    fn from_entry(entry: UserEntry, now: Time) -> Self {
        let UserEntry {
            id,
            email,
            password,
            name,
            role,
            created_at,
        } = entry;
        Self {
            user: User::new(id, email, name, role, created_at.unwrap_or(now)),
            password,
        }
    }
}

#[async_trait]
impl Directory for MemoryDirectory {
    async fn lookup(&self, password: &Password<'_>) -> Option<User> {
        self.accounts
            .iter()
            .find(|account| {
                account.user.email() == password.email && account.password == password.password
            })
            .map(|account| account.user.clone())
    }

    async fn contains_id(&self, id: &str) -> bool {
        self.accounts.iter().any(|account| account.user.id() == id)
    }

    async fn register(&mut self, user: User, password: String) -> Result<(), AuthError> {
        if self
            .accounts
            .iter()
            .any(|account| account.user.email() == user.email())
        {
            debug!(email = user.email(), "Email already registered");
            return Err(AuthError::InvalidRegistration);
        }
        self.accounts.push(Account { user, password });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Config, Role};

    #[test]
    fn lookup_builtin_accounts() {
        tokio_test::block_on(async move {
            let directory = MemoryDirectory::new(Config::default().users);
            assert_eq!(directory.len(), 2);

            let admin = directory
                .lookup(&Password::new("admin@gmail.com", "admin123"))
                .await
                .unwrap();
            assert_eq!(admin.role(), Role::Admin);
            assert_eq!(admin.name(), "Admin User");
            assert_eq!(admin.last_login(), None);

            let user = directory
                .lookup(&Password::new("user@gmail.com", "user123"))
                .await
                .unwrap();
            assert_eq!(user.role(), Role::User);
            assert_eq!(user.id(), "2");
        })
    }

    #[test]
    fn lookup_requires_both_fields() {
        tokio_test::block_on(async move {
            let directory = MemoryDirectory::new(Config::default().users);

            assert!(directory
                .lookup(&Password::new("admin@gmail.com", "user123"))
                .await
                .is_none());
            assert!(directory
                .lookup(&Password::new("nobody@x.com", "admin123"))
                .await
                .is_none());
        })
    }

    #[test]
    fn register_rejects_taken_email() {
        tokio_test::block_on(async move {
            let mut directory = MemoryDirectory::new(Config::default().users);
            let now = chrono::Utc::now();

            let dup = User::new("x", "user@gmail.com", "Dup", Role::User, now);
            assert_eq!(
                directory.register(dup, "pw".into()).await,
                Err(AuthError::InvalidRegistration)
            );

            let ann = User::new("abc", "a@b.com", "Ann", Role::User, now);
            directory.register(ann.clone(), "pw".into()).await.unwrap();

            assert!(directory.contains_id("abc").await);
            assert_eq!(
                directory.lookup(&Password::new("a@b.com", "pw")).await,
                Some(ann)
            );
        })
    }
}
