//! Login form submission.

use serde::{Deserialize, Serialize};
use validator::Validate;

use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_entity::user::UserRole;

/// What the login form submits.
///
/// `role` is the value picked on the form. Only the demo verifier honours
/// it; the directory verifier assigns the role itself.
#[derive(Clone, Validate, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login email. Format is not checked.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Role picked on the login form.
    #[serde(default = "default_role")]
    pub role: UserRole,
}

impl LoginRequest {
    /// Builds a request.
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: UserRole) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
        }
    }

    /// Applies the required-field rules, blocking empty submissions.
    pub fn check(&self) -> AppResult<()> {
        self.validate().map_err(|errors| {
            let mut messages: Vec<String> = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .filter_map(|err| err.message.as_ref().map(|m| m.to_string()))
                .collect();
            messages.sort();
            AppError::validation(messages.join("; "))
        })
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

fn default_role() -> UserRole {
    UserRole::Student
}
