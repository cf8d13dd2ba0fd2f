//! Shared value types used across Campus crates.

pub mod id;

pub use id::SessionId;
