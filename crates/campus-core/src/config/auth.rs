//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// How login credentials are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialMode {
    /// Any non-empty email/password pair is accepted and the role is the
    /// one picked on the login form. Demo use only.
    #[default]
    Demo,
    /// Credentials are verified against [`AuthConfig::accounts`]; the role
    /// comes from the matching account.
    Directory,
}

impl std::fmt::Display for CredentialMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialMode::Demo => write!(f, "demo"),
            CredentialMode::Directory => write!(f, "directory"),
        }
    }
}

/// Authentication and credential configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Credential verification mode.
    #[serde(default)]
    pub mode: CredentialMode,
    /// Account directory used in [`CredentialMode::Directory`].
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

/// One entry of the account directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Opaque user identifier. Defaults to the email when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Login email, compared case-insensitively.
    pub email: String,
    /// Argon2id PHC string (see `campus-cli hash-password`).
    pub password_hash: String,
    /// Role name assigned to this account.
    pub role: String,
    /// Display name. Defaults to the email's local part.
    #[serde(default)]
    pub display_name: Option<String>,
}
