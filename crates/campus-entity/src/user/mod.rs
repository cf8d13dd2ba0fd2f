//! User domain values.

pub mod role;

pub use role::UserRole;
