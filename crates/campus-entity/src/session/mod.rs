//! Session domain values.

pub mod model;

pub use model::{AuthState, Session, display_name_from_email};
