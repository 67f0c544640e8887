use async_trait::async_trait;

use idguard::client::Api;
use idguard::core::{Builder, Directory, Password, Registration};
use idguard::{AuthError, Role, User, ViewId};

// Directory answering from a fixed remote account list.
struct RemoteDirectory {
    accounts: Vec<(User, String)>,
}

impl RemoteDirectory {
    fn new() -> Self {
        let created_at = chrono::Utc::now();
        Self {
            accounts: vec![(
                User::new("r-1", "ops@remote.io", "Remote Ops", Role::Admin, created_at),
                "remote-secret".to_owned(),
            )],
        }
    }
}

#[async_trait]
impl Directory for RemoteDirectory {
    async fn lookup(&self, password: &Password<'_>) -> Option<User> {
        self.accounts
            .iter()
            .find(|(user, secret)| user.email() == password.email && *secret == password.password)
            .map(|(user, _)| user.clone())
    }

    async fn contains_id(&self, id: &str) -> bool {
        self.accounts.iter().any(|(user, _)| user.id() == id)
    }

    async fn register(&mut self, _user: User, _password: String) -> Result<(), AuthError> {
        Err(AuthError::InvalidRegistration)
    }
}

#[test]
fn sign_in_through_external_directory() {
    tokio_test::block_on(async move {
        let (service, client) = Builder::new().directory(RemoteDirectory::new()).build();
        tokio::spawn(service.run());

        // Built-in accounts are not consulted.
        let err = client
            .sign_in("admin@gmail.com", "admin123")
            .await
            .unwrap_err();
        assert_eq!(err.auth_error(), Some(AuthError::InvalidCredentials));

        let before = chrono::Utc::now();
        client
            .sign_in("ops@remote.io", "remote-secret")
            .await
            .unwrap();

        let current = client.current();
        let user = current.user().unwrap();
        assert_eq!(user.id(), "r-1");
        assert_eq!(user.role(), Role::Admin);
        assert!(user.last_login().unwrap() >= before);
        assert_eq!(client.landing_view(), ViewId::AdminDashboard);

        let err = client
            .sign_up(Registration::new("new@remote.io", "pw", "New"))
            .await
            .unwrap_err();
        assert_eq!(err.auth_error(), Some(AuthError::InvalidRegistration));
        assert_eq!(client.current().user().unwrap().id(), "r-1");
    });
}
