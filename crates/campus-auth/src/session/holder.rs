//! The session holder: single source of truth for who is using the application.

use tracing::{info, warn};

use campus_core::config::AuthConfig;
use campus_core::result::AppResult;
use campus_entity::session::{AuthState, Session};

use crate::credentials::{CredentialVerifier, DemoVerifier, LoginRequest, build_verifier};

/// Holds at most one session for the lifetime of the application instance.
///
/// The holder is an owned value handed to the presentation layer; login and
/// logout take `&mut self`, so exactly one caller can change the session at
/// a time.
#[derive(Debug)]
pub struct SessionHolder {
    /// Credential verification strategy.
    verifier: Box<dyn CredentialVerifier>,
    /// The active session, if any.
    current: Option<Session>,
}

impl SessionHolder {
    /// Creates an unauthenticated holder using the given verifier.
    pub fn new(verifier: Box<dyn CredentialVerifier>) -> Self {
        Self {
            verifier,
            current: None,
        }
    }

    /// Creates an unauthenticated holder that accepts any non-empty login.
    pub fn demo() -> Self {
        Self::new(Box::new(DemoVerifier))
    }

    /// Creates an unauthenticated holder with the verifier selected by configuration.
    pub fn from_config(config: &AuthConfig) -> AppResult<Self> {
        Ok(Self::new(build_verifier(config)?))
    }

    /// Opens a session for the submitted credentials.
    ///
    /// Empty email or password fails with a validation error and rejected
    /// credentials with an authentication error; in both cases the current
    /// session is left untouched. A successful login replaces any active
    /// session.
    pub fn login(&mut self, request: &LoginRequest) -> AppResult<&Session> {
        request.check()?;

        let identity = self.verifier.verify(request).inspect_err(|e| {
            warn!(email = %request.email, error = %e, "Login rejected");
        })?;

        if let Some(previous) = self.current.take() {
            info!(
                session_id = %previous.id,
                role = %previous.role,
                "Replacing active session"
            );
        }

        let session = Session::new(identity.user_id, identity.name, identity.email, identity.role);
        info!(
            session_id = %session.id,
            user_id = %session.user_id,
            role = %session.role,
            mode = %self.verifier.mode(),
            "Login successful"
        );

        Ok(&*self.current.insert(session))
    }

    /// Clears the session. Calling it while unauthenticated is a no-op.
    pub fn logout(&mut self) {
        if let Some(session) = self.current.take() {
            info!(session_id = %session.id, role = %session.role, "Logged out");
        }
    }

    /// The active session, if any.
    pub fn current_session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// The authorization state derived from the current session.
    pub fn state(&self) -> AuthState {
        AuthState::from(self.current.as_ref())
    }

    /// Returns `true` if a session is active.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

impl Default for SessionHolder {
    fn default() -> Self {
        Self::demo()
    }
}
