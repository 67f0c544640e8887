use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::common::{info, warn, AuthError};
use crate::core::{Directory, Password, Principal, Registration, Role, User};

const GENERATED_ID_LEN: usize = 9;

/// Owner of the current principal.
///
/// Only `sign_in`, `sign_up` and `sign_out` mutate the session. Every
/// failed operation leaves the session exactly as it was.
pub struct SessionStore {
    directory: Box<dyn Directory>,
    current: Principal,
}

impl SessionStore {
    pub fn new(directory: impl Directory + 'static) -> Self {
        Self::from_boxed(Box::new(directory))
    }

    pub(crate) fn from_boxed(directory: Box<dyn Directory>) -> Self {
        Self {
            directory,
            current: Principal::AnonymousUser,
        }
    }

    pub fn current(&self) -> &Principal {
        &self.current
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_authenticated()
    }

    pub async fn sign_in(&mut self, credential: &Password<'_>) -> Result<(), AuthError> {
        match self.directory.lookup(credential).await {
            Some(mut user) => {
                user.stamp_login(chrono::Utc::now());
                info!(email = user.email(), role = %user.role(), "Signed in");
                self.current = Principal::User(user);
                Ok(())
            }
            None => {
                warn!(?credential, "Sign in rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    pub async fn sign_up(&mut self, registration: Registration) -> Result<(), AuthError> {
        if !registration.is_complete() {
            return Err(AuthError::InvalidRegistration);
        }
        let Registration {
            email,
            password,
            name,
        } = registration;

        let id = self.generate_id().await;
        let user = User::new(id, email, name, Role::User, chrono::Utc::now());

        self.directory.register(user.clone(), password).await?;

        info!(id = user.id(), email = user.email(), "Signed up");
        self.current = Principal::User(user);
        Ok(())
    }

    pub fn sign_out(&mut self) {
        if let Principal::User(user) = &self.current {
            info!(email = user.email(), "Signed out");
        }
        self.current = Principal::AnonymousUser;
    }

    async fn generate_id(&self) -> String {
        loop {
            let id = random_id();
            if !self.directory.contains_id(&id).await {
                return id;
            }
        }
    }
}

fn random_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_ID_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Config, MemoryDirectory};

    fn store() -> SessionStore {
        SessionStore::new(MemoryDirectory::new(Config::default().users))
    }

    #[test]
    fn anonymous_by_default() {
        let store = store();
        assert!(!store.is_authenticated());
        assert_eq!(store.current(), &Principal::AnonymousUser);
    }

    #[test]
    fn sign_in_admin() {
        tokio_test::block_on(async move {
            let mut store = store();
            let before = chrono::Utc::now();

            store.sign_in(&Password::new("admin@gmail.com", "admin123")).await.unwrap();

            assert!(store.is_authenticated());
            let user = store.current().user().unwrap();
            assert_eq!(user.role(), Role::Admin);
            assert!(user.last_login().unwrap() >= before);
        })
    }

    #[test]
    fn sign_in_restamps_last_login() {
        tokio_test::block_on(async move {
            let mut store = store();

            store.sign_in(&Password::new("user@gmail.com", "user123")).await.unwrap();
            let first = store.current().user().unwrap().last_login().unwrap();

            store.sign_in(&Password::new("user@gmail.com", "user123")).await.unwrap();
            let second = store.current().user().unwrap().last_login().unwrap();

            assert!(second >= first);
            assert_eq!(store.current().role(), Some(Role::User));
        })
    }

    #[test]
    fn failed_sign_in_keeps_session() {
        tokio_test::block_on(async move {
            let mut store = store();

            assert_eq!(
                store.sign_in(&Password::new("nobody@x.com", "wrong")).await,
                Err(AuthError::InvalidCredentials)
            );
            assert!(!store.is_authenticated());

            store.sign_in(&Password::new("user@gmail.com", "user123")).await.unwrap();
            let before = store.current().clone();

            assert_eq!(
                store.sign_in(&Password::new("admin@gmail.com", "wrong")).await,
                Err(AuthError::InvalidCredentials)
            );
            assert_eq!(store.current(), &before);
        })
    }

    #[test]
    fn sign_up_mints_user() {
        tokio_test::block_on(async move {
            let mut store = store();
            let before = chrono::Utc::now();

            store
                .sign_up(Registration::new("a@b.com", "pw", "Ann"))
                .await
                .unwrap();

            let user = store.current().user().unwrap();
            assert_eq!(user.role(), Role::User);
            assert_eq!(user.name(), "Ann");
            assert_eq!(user.id().len(), GENERATED_ID_LEN);
            assert_ne!(user.id(), "1");
            assert_ne!(user.id(), "2");
            assert!(user.created_at() >= before);
            assert_eq!(user.last_login(), None);
        })
    }

    #[test]
    fn sign_up_ids_are_unique() {
        tokio_test::block_on(async move {
            let mut store = store();
            let mut ids = std::collections::HashSet::new();

            for i in 0..50 {
                store
                    .sign_up(Registration::new(format!("u{}@b.com", i), "pw", "U"))
                    .await
                    .unwrap();
                let id = store.current().user().unwrap().id().to_owned();
                assert!(ids.insert(id));
            }
        })
    }

    #[test]
    fn sign_up_requires_every_field() {
        tokio_test::block_on(async move {
            let mut store = store();

            for registration in [
                Registration::new("", "pw", "Ann"),
                Registration::new("a@b.com", "", "Ann"),
                Registration::new("a@b.com", "pw", ""),
            ] {
                assert_eq!(
                    store.sign_up(registration).await,
                    Err(AuthError::InvalidRegistration)
                );
                assert!(!store.is_authenticated());
            }
        })
    }

    #[test]
    fn registered_account_can_sign_in_again() {
        tokio_test::block_on(async move {
            let mut store = store();

            store
                .sign_up(Registration::new("a@b.com", "pw", "Ann"))
                .await
                .unwrap();
            let id = store.current().user().unwrap().id().to_owned();
            store.sign_out();

            store.sign_in(&Password::new("a@b.com", "pw")).await.unwrap();
            let user = store.current().user().unwrap();
            assert_eq!(user.id(), id);
            assert!(user.last_login().is_some());
        })
    }

    #[test]
    fn sign_up_with_taken_email_keeps_session() {
        tokio_test::block_on(async move {
            let mut store = store();
            store.sign_in(&Password::new("admin@gmail.com", "admin123")).await.unwrap();
            let before = store.current().clone();

            assert_eq!(
                store
                    .sign_up(Registration::new("user@gmail.com", "pw", "Imposter"))
                    .await,
                Err(AuthError::InvalidRegistration)
            );
            assert_eq!(store.current(), &before);
        })
    }

    #[test]
    fn sign_out_is_idempotent() {
        tokio_test::block_on(async move {
            let mut store = store();
            store.sign_in(&Password::new("admin@gmail.com", "admin123")).await.unwrap();

            store.sign_out();
            assert!(!store.is_authenticated());

            store.sign_out();
            assert!(!store.is_authenticated());
            assert_eq!(store.current(), &Principal::AnonymousUser);
        })
    }
}
