//! Credential verification strategies.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use campus_core::config::{AuthConfig, CredentialMode};
use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_entity::session::display_name_from_email;
use campus_entity::user::UserRole;

use super::hasher::PasswordHasher;
use super::request::LoginRequest;

/// Identity established by a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    /// Opaque user identifier.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Role the session will carry.
    pub role: UserRole,
}

/// Decides whether a login request is authentic and who it belongs to.
///
/// Called only with requests that already passed [`LoginRequest::check`].
pub trait CredentialVerifier: Send + Sync + std::fmt::Debug {
    /// Verifies the request and returns the identity to open a session for.
    fn verify(&self, request: &LoginRequest) -> AppResult<VerifiedIdentity>;

    /// The mode this verifier implements.
    fn mode(&self) -> CredentialMode;
}

/// Accepts any non-empty credentials with the role picked on the form.
///
/// This is demo behaviour and not a security boundary.
#[derive(Debug, Clone, Default)]
pub struct DemoVerifier;

impl CredentialVerifier for DemoVerifier {
    fn verify(&self, request: &LoginRequest) -> AppResult<VerifiedIdentity> {
        Ok(VerifiedIdentity {
            user_id: "1".to_string(),
            name: display_name_from_email(&request.email),
            email: request.email.clone(),
            role: request.role,
        })
    }

    fn mode(&self) -> CredentialMode {
        CredentialMode::Demo
    }
}

/// A parsed account directory entry.
#[derive(Debug, Clone)]
struct DirectoryAccount {
    user_id: String,
    name: String,
    email: String,
    password_hash: String,
    role: UserRole,
}

/// Verifies passwords against a configured account directory.
///
/// The role comes from the directory entry; the role on the request is
/// ignored.
#[derive(Debug, Clone)]
pub struct DirectoryVerifier {
    /// Lowercased email → account.
    accounts: HashMap<String, DirectoryAccount>,
    hasher: PasswordHasher,
}

impl DirectoryVerifier {
    /// Builds the directory from configuration.
    ///
    /// Fails on unknown role names, malformed hashes, or duplicate emails.
    pub fn from_config(config: &AuthConfig) -> AppResult<Self> {
        let hasher = PasswordHasher::new();
        let mut accounts = HashMap::with_capacity(config.accounts.len());

        for entry in &config.accounts {
            let key = entry.email.trim().to_lowercase();
            if key.is_empty() {
                return Err(AppError::configuration("Account with empty email"));
            }

            let role: UserRole = entry.role.parse().map_err(|e: AppError| {
                AppError::configuration(format!("Account '{}': {}", entry.email, e.message))
            })?;
            hasher.check_hash_format(&entry.password_hash).map_err(|e| {
                AppError::configuration(format!("Account '{}': {}", entry.email, e.message))
            })?;

            let account = DirectoryAccount {
                user_id: entry.id.clone().unwrap_or_else(|| key.clone()),
                name: entry
                    .display_name
                    .clone()
                    .unwrap_or_else(|| display_name_from_email(&entry.email)),
                email: entry.email.clone(),
                password_hash: entry.password_hash.clone(),
                role,
            };

            if accounts.insert(key, account).is_some() {
                return Err(AppError::configuration(format!(
                    "Duplicate account email '{}'",
                    entry.email
                )));
            }
        }

        if accounts.is_empty() {
            warn!("Directory credential mode configured with no accounts; every login will fail");
        }

        Ok(Self { accounts, hasher })
    }

    /// Number of accounts in the directory.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns `true` if the directory has no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl CredentialVerifier for DirectoryVerifier {
    fn verify(&self, request: &LoginRequest) -> AppResult<VerifiedIdentity> {
        let key = request.email.trim().to_lowercase();
        let account = self
            .accounts
            .get(&key)
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        if !self
            .hasher
            .verify_password(&request.password, &account.password_hash)?
        {
            return Err(AppError::authentication("Invalid email or password"));
        }

        if request.role != account.role {
            debug!(
                requested = %request.role,
                assigned = %account.role,
                "Ignoring role picked on the login form"
            );
        }

        Ok(VerifiedIdentity {
            user_id: account.user_id.clone(),
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role,
        })
    }

    fn mode(&self) -> CredentialMode {
        CredentialMode::Directory
    }
}

/// Builds the verifier selected by `config.mode`.
pub fn build_verifier(config: &AuthConfig) -> AppResult<Box<dyn CredentialVerifier>> {
    match config.mode {
        CredentialMode::Demo => {
            warn!("Demo credential mode: any non-empty login is accepted");
            Ok(Box::new(DemoVerifier))
        }
        CredentialMode::Directory => {
            let verifier = DirectoryVerifier::from_config(config)?;
            info!(accounts = verifier.len(), "Loaded account directory");
            Ok(Box::new(verifier))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::config::AccountConfig;
    use campus_core::error::ErrorKind;

    fn directory_config(role: &str) -> AuthConfig {
        let hash = PasswordHasher::new().hash_password("correct horse").unwrap();
        AuthConfig {
            mode: CredentialMode::Directory,
            accounts: vec![AccountConfig {
                id: Some("u-17".to_string()),
                email: "Clerk@School.test".to_string(),
                password_hash: hash,
                role: role.to_string(),
                display_name: None,
            }],
        }
    }

    #[test]
    fn test_demo_uses_form_role_and_email_local_part() {
        let identity = DemoVerifier
            .verify(&LoginRequest::new("a@b.com", "x", UserRole::Student))
            .unwrap();
        assert_eq!(identity.role, UserRole::Student);
        assert_eq!(identity.name, "a");
        assert_eq!(identity.user_id, "1");
    }

    #[test]
    fn test_directory_assigns_role_from_account() {
        let verifier = DirectoryVerifier::from_config(&directory_config("accounting")).unwrap();
        let identity = verifier
            .verify(&LoginRequest::new(
                "clerk@school.test",
                "correct horse",
                UserRole::Admin,
            ))
            .unwrap();
        assert_eq!(identity.role, UserRole::Accounting);
        assert_eq!(identity.user_id, "u-17");
        assert_eq!(identity.name, "Clerk");
    }

    #[test]
    fn test_directory_rejects_bad_credentials() {
        let verifier = DirectoryVerifier::from_config(&directory_config("teacher")).unwrap();

        let err = verifier
            .verify(&LoginRequest::new("clerk@school.test", "wrong", UserRole::Teacher))
            .unwrap_err();
        assert!(err.is(ErrorKind::Authentication));

        let err = verifier
            .verify(&LoginRequest::new("nobody@school.test", "x", UserRole::Teacher))
            .unwrap_err();
        assert!(err.is(ErrorKind::Authentication));
    }

    #[test]
    fn test_directory_config_errors() {
        let err = DirectoryVerifier::from_config(&directory_config("janitor")).unwrap_err();
        assert!(err.is(ErrorKind::Configuration));

        let mut config = directory_config("teacher");
        config.accounts[0].password_hash = "plaintext".to_string();
        let err = DirectoryVerifier::from_config(&config).unwrap_err();
        assert!(err.is(ErrorKind::Configuration));

        let mut config = directory_config("teacher");
        let duplicate = config.accounts[0].clone();
        config.accounts.push(duplicate);
        let err = DirectoryVerifier::from_config(&config).unwrap_err();
        assert!(err.message.contains("Duplicate"));
    }

    #[test]
    fn test_build_verifier_follows_mode() {
        let verifier = build_verifier(&AuthConfig::default()).unwrap();
        assert_eq!(verifier.mode(), CredentialMode::Demo);

        let verifier = build_verifier(&directory_config("student")).unwrap();
        assert_eq!(verifier.mode(), CredentialMode::Directory);
    }
}
