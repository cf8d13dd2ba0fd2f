//! Role-based access control over application routes.

pub mod enforcer;
pub mod policies;

pub use enforcer::AccessEnforcer;
pub use policies::{MenuEntry, RoutePolicies, Shortcut};
