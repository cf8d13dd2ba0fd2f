//! # campus-auth
//!
//! Session lifecycle and role-based navigation authorization for Campus.
//!
//! ## Modules
//!
//! - `credentials`: login request validation, credential verifiers, Argon2id hashing
//! - `session`: the session holder (login, logout, current session)
//! - `rbac`: the route access policy table and its enforcer
//! - `navigation`: the gate every navigation attempt goes through

pub mod credentials;
pub mod navigation;
pub mod rbac;
pub mod session;

pub use credentials::{
    CredentialVerifier, DemoVerifier, DirectoryVerifier, LoginRequest, PasswordHasher,
    VerifiedIdentity,
};
pub use navigation::{Location, Navigation, NavigationGate, RedirectReason};
pub use rbac::{AccessEnforcer, MenuEntry, RoutePolicies, Shortcut};
pub use session::SessionHolder;
