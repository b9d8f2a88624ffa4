use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

use super::{AuthError, UserRole};

/// A signed-in user, as exposed to the UI (never carries a password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

/// Session-scoped authentication capability
///
/// Injected into whatever needs to know who is signed in; tests use
/// [`MockAuthContext`].
pub trait AuthContext: Send + Sync {
    /// The signed-in user, if any
    fn current_user(&self) -> Option<User>;

    /// Sign in with email and password
    fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Sign out; a no-op when nobody is signed in
    fn logout(&self);
}

/// An account known to the [`UserDirectory`]
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub user: User,
    password: String,
}

impl DirectoryEntry {
    pub fn new(user: User, password: impl Into<String>) -> Self {
        Self {
            user,
            password: password.into(),
        }
    }
}

/// Fixed in-memory account list
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    entries: Vec<DirectoryEntry>,
}

impl UserDirectory {
    pub fn new(entries: Vec<DirectoryEntry>) -> Self {
        Self { entries }
    }

    /// The demo accounts: one admin, one editor, one basic user
    pub fn demo() -> Self {
        let account = |id: &str, email: &str, password: &str, name: &str, role| {
            DirectoryEntry::new(
                User {
                    id: id.to_string(),
                    email: email.to_string(),
                    name: name.to_string(),
                    role,
                },
                password,
            )
        };

        Self::new(vec![
            account("1", "admin@rethread.org", "admin123", "Admin User", UserRole::Admin),
            account("2", "editor@rethread.org", "editor123", "Editor User", UserRole::Editor),
            account("3", "user@rethread.org", "user123", "Basic User", UserRole::User),
        ])
    }

    /// Find the account matching both email and password
    pub fn verify(&self, email: &str, password: &str) -> Option<&User> {
        self.entries
            .iter()
            .find(|entry| entry.user.email == email && entry.password == password)
            .map(|entry| &entry.user)
    }
}

/// In-memory auth context backed by a [`UserDirectory`]
pub struct MockAuthContext {
    directory: Arc<UserDirectory>,
    session: RwLock<Option<User>>,
}

impl MockAuthContext {
    pub fn new(directory: Arc<UserDirectory>) -> Self {
        Self {
            directory,
            session: RwLock::new(None),
        }
    }

    /// Resume a previously stored session
    pub fn with_user(self, user: User) -> Self {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
        self
    }
}

impl AuthContext for MockAuthContext {
    fn current_user(&self) -> Option<User> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .directory
            .verify(email, password)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;

        tracing::info!(email = %user.email, role = ?user.role, "User signed in");
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Some(user.clone());
        Ok(user)
    }

    fn logout(&self) {
        let previous = self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(user) = previous {
            tracing::info!(email = %user.email, "User signed out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> MockAuthContext {
        MockAuthContext::new(Arc::new(UserDirectory::demo()))
    }

    #[test]
    fn test_login_and_logout() {
        let auth = context();
        assert_eq!(auth.current_user(), None);

        let user = auth.login("editor@rethread.org", "editor123").unwrap();
        assert_eq!(user.role, UserRole::Editor);
        assert_eq!(auth.current_user(), Some(user));

        auth.logout();
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn test_wrong_password_rejected() {
        let auth = context();
        assert_eq!(
            auth.login("admin@rethread.org", "nope"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let auth = context();
        auth.login("user@rethread.org", "user123").unwrap();
        assert!(auth.login("admin@rethread.org", "wrong").is_err());
        assert_eq!(auth.current_user().map(|u| u.role), Some(UserRole::User));
    }

    #[test]
    fn test_contexts_are_independent() {
        let directory = Arc::new(UserDirectory::demo());
        let first = MockAuthContext::new(directory.clone());
        let second = MockAuthContext::new(directory);

        first.login("admin@rethread.org", "admin123").unwrap();
        assert!(first.current_user().is_some());
        assert!(second.current_user().is_none());
    }

    #[test]
    fn test_serialized_user_has_no_password() {
        let user = UserDirectory::demo()
            .verify("admin@rethread.org", "admin123")
            .cloned()
            .unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "admin");
    }
}
