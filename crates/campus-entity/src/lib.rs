//! # campus-entity
//!
//! Domain value types for Campus. Nothing here holds mutable state or
//! makes access decisions; those live in `campus-auth`.

pub mod route;
pub mod session;
pub mod user;
