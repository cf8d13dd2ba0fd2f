//! Login credentials: request validation, verification, and password hashing.

pub mod hasher;
pub mod request;
pub mod verifier;

pub use hasher::PasswordHasher;
pub use request::LoginRequest;
pub use verifier::{
    CredentialVerifier, DemoVerifier, DirectoryVerifier, VerifiedIdentity, build_verifier,
};
