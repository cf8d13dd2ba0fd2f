//! Session lifecycle: login, logout, and the current session.

pub mod holder;

pub use holder::SessionHolder;
