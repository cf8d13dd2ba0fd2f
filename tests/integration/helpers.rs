//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use campus_auth::{AccessEnforcer, LoginRequest, Navigation, NavigationGate, SessionHolder};
use campus_core::config::AppConfig;
use campus_entity::user::UserRole;

/// Test application context: one session holder and one gate, wired the
/// way the shell wires them.
pub struct TestApp {
    /// The session holder
    pub sessions: SessionHolder,
    /// The navigation gate
    pub gate: NavigationGate,
}

impl TestApp {
    /// Create a demo-mode application with the built-in policy
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    /// Create an application from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let enforcer =
            AccessEnforcer::from_config(&config.policy).expect("Failed to build access policy");
        let sessions = SessionHolder::from_config(&config.auth).expect("Failed to build verifier");

        Self {
            sessions,
            gate: NavigationGate::new(Arc::new(enforcer)),
        }
    }

    /// Log in with demo credentials for the given role
    pub fn login_as(&mut self, role: UserRole) {
        let email = format!("{}@school.test", role.as_str());
        self.sessions
            .login(&LoginRequest::new(email, "password", role))
            .expect("Demo login should succeed");
    }

    /// Resolve a path with the current session
    pub fn visit(&self, path: &str) -> Navigation {
        self.gate.resolve(self.sessions.current_session(), path)
    }

    /// The enforcer behind the gate
    pub fn enforcer(&self) -> &AccessEnforcer {
        self.gate.enforcer()
    }
}
