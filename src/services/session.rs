use std::sync::Arc;

use chrono::Utc;

use crate::models::User;
use crate::services::local_store::LocalStore;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SessionError {
    #[error("please sign in to continue")]
    NotAuthenticated,
}

/// Who is signed in right now. The state itself lives in the local store so
/// a session survives restarts.
pub struct SessionContext {
    store: Arc<LocalStore>,
}

impl SessionContext {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }

    pub fn current_user(&self) -> Option<User> {
        self.store.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.user().is_some()
    }

    pub fn login(&self, user: User) {
        self.store.set_user(Some(user));
    }

    pub fn logout(&self) {
        self.store.set_user(None);
    }

    /// Gate for flows that need an account, like the booking dashboard.
    pub fn require_user(&self) -> Result<User, SessionError> {
        self.store.user().ok_or(SessionError::NotAuthenticated)
    }

    /// Registers a new user and signs them in in one step.
    pub fn sign_up(&self, name: &str, email: &str, phone: &str) -> User {
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            created_at: Utc::now().naive_utc(),
        };
        self.store.set_user(Some(user.clone()));
        user
    }
}

/// Credential check in front of the admin dashboard. Credentials come from
/// configuration, one fixed pair per deployment.
pub struct AdminGate {
    email: String,
    password: String,
}

impl AdminGate {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }

    pub fn verify(&self, email: &str, password: &str) -> bool {
        email == self.email && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_session() -> SessionContext {
        let path =
            std::env::temp_dir().join(format!("labdesk-session-{}.json", uuid::Uuid::new_v4()));
        SessionContext::new(Arc::new(LocalStore::open(path)))
    }

    #[test]
    fn test_sign_up_logs_in() {
        let session = temp_session();
        assert!(!session.is_authenticated());

        let user = session.sign_up("  Asha Verma ", "asha@example.com", "+919800000001");
        assert_eq!(user.name, "Asha Verma");
        assert!(session.is_authenticated());
        assert_eq!(session.current_user().unwrap().id, user.id);
    }

    #[test]
    fn test_require_user_when_signed_out() {
        let session = temp_session();
        assert_eq!(session.require_user(), Err(SessionError::NotAuthenticated));

        session.sign_up("Asha", "asha@example.com", "+911234567890");
        assert!(session.require_user().is_ok());

        session.logout();
        assert_eq!(session.require_user(), Err(SessionError::NotAuthenticated));
    }

    #[test]
    fn test_admin_gate_checks_both_fields() {
        let gate = AdminGate::new("admin@thelabs.in".to_string(), "admin123".to_string());

        assert!(gate.verify("admin@thelabs.in", "admin123"));
        assert!(!gate.verify("admin@thelabs.in", "wrong"));
        assert!(!gate.verify("other@thelabs.in", "admin123"));
        assert!(!gate.verify("", ""));
    }
}
