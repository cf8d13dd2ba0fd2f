//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campus_core::types::SessionId;

use crate::user::UserRole;

/// The logged-in actor.
///
/// Created on login and dropped on logout. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: SessionId,
    /// Opaque identifier of the authenticated user.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Login email, as typed.
    pub email: String,
    /// Role driving navigation access.
    pub role: UserRole,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session for a freshly authenticated user.
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: SessionId::new(),
            user_id: user_id.into(),
            name: name.into(),
            email: email.into(),
            role,
            created_at: Utc::now(),
        }
    }
}

/// Derives a display name from an email: everything before the first `@`.
///
/// An email without `@` is returned whole.
pub fn display_name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

/// Authorization state of the application instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "role", rename_all = "snake_case")]
pub enum AuthState {
    /// No session; only the login screen is reachable.
    Unauthenticated,
    /// A session exists for the given role.
    Authenticated(UserRole),
}

impl AuthState {
    /// Returns the role if authenticated.
    pub fn role(&self) -> Option<UserRole> {
        match self {
            Self::Unauthenticated => None,
            Self::Authenticated(role) => Some(*role),
        }
    }
}

impl From<Option<&Session>> for AuthState {
    fn from(session: Option<&Session>) -> Self {
        session.map_or(Self::Unauthenticated, |s| Self::Authenticated(s.role))
    }
}
