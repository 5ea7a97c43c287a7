//! Session state and the auth context
//!
//! One `AuthContext` is provided at app start, wrapping a
//! `Signal<AuthSession>`. Consumers only see the session flag, the user
//! record, and the login/logout operations; persistence stays in `storage`.

pub mod session;
pub mod storage;

pub use session::{AuthSession, UserRole, UserSummary};

use dioxus::prelude::*;
use tracing::info;

/// Logout notice surfaced once on the landing page.
const LOGOUT_NOTICE: &str = "Anda telah berhasil logout.";

#[derive(Clone, Copy)]
pub struct AuthContext {
    session: Signal<AuthSession>,
}

impl AuthContext {
    /// Build the context from persisted credentials. Called exactly once at
    /// app start by the provider.
    fn restore() -> Self {
        let session = AuthSession {
            user: storage::load_user(),
        };
        if session.is_authenticated() {
            info!("session restored from storage");
        }
        Self {
            session: Signal::new(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn user(&self) -> Option<UserSummary> {
        self.session.read().user.clone()
    }

    /// Establish the session after a successful login.
    pub fn login(&mut self, token: &str, user: UserSummary) {
        storage::store_credentials(token, &user);
        self.session.set(AuthSession { user: Some(user) });
    }

    /// Tear the session down and leave the one-time landing-page notice.
    pub fn logout(&mut self) {
        storage::clear_credentials();
        storage::set_auth_alert(LOGOUT_NOTICE);
        self.session.set(AuthSession::default());
        info!("session cleared");
    }
}

/// Provide the auth context at the app root.
pub fn provide_auth() -> AuthContext {
    use_context_provider(AuthContext::restore)
}

/// Consume the auth context from any component below the provider.
pub fn use_auth() -> AuthContext {
    use_context()
}
