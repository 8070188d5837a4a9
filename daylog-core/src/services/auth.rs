//! Auth service - local login simulation
//!
//! There is no security here: credentials are compared in plaintext and
//! live in the same store as the tracker data. The service only decides
//! which local identity is "signed in".

use std::sync::Arc;

use crate::domain::result::{AuthError, Result};
use crate::domain::{Credentials, SessionState, User, ADMIN_USERNAME};
use crate::ports::{load_json, save_json, Store};

const REGISTERED_USERS_KEY: &str = "registeredUsers";
const CURRENT_USER_KEY: &str = "currentUser";

/// Registered username/password pairs, persisted under `registeredUsers`
///
/// Append-only. The built-in admin account is not part of the list.
pub struct CredentialRegistry {
    store: Arc<dyn Store>,
    users: Vec<Credentials>,
}

impl CredentialRegistry {
    pub fn load(store: Arc<dyn Store>) -> Result<Self> {
        let users = load_json(store.as_ref(), REGISTERED_USERS_KEY)?.unwrap_or_default();
        Ok(Self { store, users })
    }

    pub fn users(&self) -> &[Credentials] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Whether `username` is the admin or already registered
    pub fn is_taken(&self, username: &str) -> bool {
        username == ADMIN_USERNAME || self.users.iter().any(|u| u.username == username)
    }

    /// Whether the pair matches the admin account or a registered user
    pub fn verify(&self, username: &str, password: &str) -> bool {
        Credentials::admin().matches(username, password)
            || self.users.iter().any(|u| u.matches(username, password))
    }

    fn append(&mut self, credentials: Credentials) -> Result<()> {
        let mut next = self.users.clone();
        next.push(credentials);
        save_json(self.store.as_ref(), REGISTERED_USERS_KEY, &next)?;
        self.users = next;
        Ok(())
    }
}

/// Session manager
///
/// Construction restores the persisted session synchronously, so callers
/// never see an unresolved state.
pub struct AuthService {
    store: Arc<dyn Store>,
    registry: CredentialRegistry,
    current: Option<User>,
}

impl AuthService {
    /// Load the registry and restore the persisted session
    pub fn new(store: Arc<dyn Store>) -> Result<Self> {
        let registry = CredentialRegistry::load(Arc::clone(&store))?;
        let mut service = Self {
            store,
            registry,
            current: None,
        };
        service.restore_session()?;
        Ok(service)
    }

    /// Re-read the persisted session
    ///
    /// An unreadable `currentUser` value is treated as signed out.
    pub fn restore_session(&mut self) -> Result<()> {
        self.current = match self.store.get(CURRENT_USER_KEY)? {
            Some(raw) => serde_json::from_str::<User>(&raw).ok(),
            None => None,
        };
        Ok(())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn state(&self) -> SessionState {
        match &self.current {
            Some(user) => SessionState::Authenticated(user.username.clone()),
            None => SessionState::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn registry(&self) -> &CredentialRegistry {
        &self.registry
    }

    /// Try to sign in
    ///
    /// Returns false (leaving the session untouched) when the credentials
    /// match neither the admin account nor a registered user.
    pub fn login(&mut self, username: &str, password: &str) -> Result<bool> {
        if !self.registry.verify(username, password) {
            return Ok(false);
        }

        let user = User::new(username);
        save_json(self.store.as_ref(), CURRENT_USER_KEY, &user)?;
        self.current = Some(user);
        Ok(true)
    }

    /// Register a new user without signing them in
    pub fn register(&mut self, username: &str, password: &str, confirm_password: &str) -> Result<()> {
        if username.is_empty() || password.is_empty() || confirm_password.is_empty() {
            return Err(AuthError::AllFieldsRequired.into());
        }
        if password != confirm_password {
            return Err(AuthError::PasswordsMismatch.into());
        }
        if self.registry.is_taken(username) {
            return Err(AuthError::UsernameTaken.into());
        }

        self.registry.append(Credentials::new(username, password))
    }

    /// Sign out and forget the persisted session
    pub fn logout(&mut self) -> Result<()> {
        self.store.remove(CURRENT_USER_KEY)?;
        self.current = None;
        Ok(())
    }

    /// The signed-in user; tracker commands refuse to run without one
    pub fn require_user(&self) -> std::result::Result<&User, AuthError> {
        self.current.as_ref().ok_or(AuthError::NotLoggedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;
    use crate::domain::result::Error;
    use crate::domain::ADMIN_PASSWORD;

    fn service() -> (Arc<MemoryStore>, AuthService) {
        let store = Arc::new(MemoryStore::new());
        let auth = AuthService::new(store.clone()).unwrap();
        (store, auth)
    }

    fn auth_error(result: Result<()>) -> AuthError {
        match result {
            Err(Error::Auth(e)) => e,
            other => panic!("expected auth error, got {:?}", other),
        }
    }

    #[test]
    fn test_admin_login() {
        let (store, mut auth) = service();
        assert_eq!(auth.state(), SessionState::Unauthenticated);

        assert!(auth.login(ADMIN_USERNAME, ADMIN_PASSWORD).unwrap());
        assert_eq!(auth.state(), SessionState::Authenticated("admin".to_string()));
        assert_eq!(
            store.get("currentUser").unwrap(),
            Some(r#"{"username":"admin"}"#.to_string())
        );
    }

    #[test]
    fn test_failed_login_keeps_session() {
        let (_store, mut auth) = service();
        assert!(auth.login("admin", "123").unwrap());

        assert!(!auth.login("admin", "wrong").unwrap());
        assert!(!auth.login("ghost", "123").unwrap());
        assert_eq!(auth.current_user().unwrap().username, "admin");
    }

    #[test]
    fn test_register_validation_order() {
        let (_store, mut auth) = service();

        assert_eq!(auth_error(auth.register("", "a", "a")), AuthError::AllFieldsRequired);
        assert_eq!(auth_error(auth.register("bob", "a", "")), AuthError::AllFieldsRequired);
        assert_eq!(auth_error(auth.register("bob", "a", "b")), AuthError::PasswordsMismatch);
        assert_eq!(auth_error(auth.register("admin", "a", "a")), AuthError::UsernameTaken);
        assert!(auth.registry().is_empty());
    }

    #[test]
    fn test_register_does_not_log_in() {
        let (store, mut auth) = service();
        auth.register("bob", "pw", "pw").unwrap();

        assert!(!auth.is_authenticated());
        assert_eq!(
            store.get("registeredUsers").unwrap(),
            Some(r#"[{"username":"bob","password":"pw"}]"#.to_string())
        );
    }

    #[test]
    fn test_logout_clears_store() {
        let (store, mut auth) = service();
        auth.login("admin", "123").unwrap();
        auth.logout().unwrap();

        assert_eq!(auth.state(), SessionState::Unauthenticated);
        assert_eq!(store.get("currentUser").unwrap(), None);
    }

    #[test]
    fn test_malformed_session_is_signed_out() {
        let store = Arc::new(MemoryStore::with_values([("currentUser", "not json")]));
        let auth = AuthService::new(store).unwrap();
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_require_user() {
        let (_store, mut auth) = service();
        assert_eq!(auth.require_user().unwrap_err(), AuthError::NotLoggedIn);
        auth.login("admin", "123").unwrap();
        assert_eq!(auth.require_user().unwrap().username, "admin");
    }
}
