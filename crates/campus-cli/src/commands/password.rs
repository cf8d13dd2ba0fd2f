//! Password hashing command for account directory entries.

use clap::Args;
use tracing::info;

use crate::output;
use campus_auth::PasswordHasher;
use campus_core::error::AppError;

/// Arguments for the hash-password command
#[derive(Debug, Args)]
pub struct HashPasswordArgs {
    /// Read the password from this argument instead of prompting
    #[arg(long)]
    pub password: Option<String>,
}

/// Execute the hash-password command
pub fn execute(args: &HashPasswordArgs) -> Result<(), AppError> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
    };

    if password.is_empty() {
        return Err(AppError::validation("Password is required"));
    }

    let hash = PasswordHasher::new().hash_password(&password)?;
    info!(prompted = args.password.is_none(), "Generated Argon2id password hash");
    println!("{}", hash);
    output::print_success("Add this value as `password_hash` of an [[auth.accounts]] entry");
    Ok(())
}
