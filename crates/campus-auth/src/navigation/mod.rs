//! The uniform gate every navigation attempt goes through.

pub mod gate;

pub use gate::{Location, Navigation, NavigationGate, RedirectReason};
