//! Configuration management commands.

use clap::{Args, Subcommand};
use tracing::info;

use crate::output::{self, OutputFormat};
use campus_auth::{AccessEnforcer, SessionHolder};
use campus_core::error::AppError;
use campus_entity::user::UserRole;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Build the credential verifier and access policy, reporting any error
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(&config),
            OutputFormat::Table => {
                println!("Authentication:");
                output::print_kv("Mode", &config.auth.mode.to_string());
                output::print_kv("Accounts", &config.auth.accounts.len().to_string());
                println!("Policy overrides:");
                if config.policy.is_empty() {
                    output::print_kv("(none)", "built-in table");
                }
                for (route, roles) in &config.policy.grants {
                    output::print_kv(route, &roles.join(", "));
                }
                for (role, route) in &config.policy.default_views {
                    output::print_kv(&format!("{role} lands on"), route);
                }
                println!("Logging:");
                output::print_kv("Level", &config.logging.level);
                output::print_kv("Format", &config.logging.format);
            }
        },
        ConfigCommand::Validate => {
            SessionHolder::from_config(&config.auth)?;
            let enforcer = AccessEnforcer::from_config(&config.policy)?;
            info!(
                mode = %config.auth.mode,
                accounts = config.auth.accounts.len(),
                admin_routes = enforcer.permitted_routes(&UserRole::Admin).len(),
                "Configuration validated"
            );
            output::print_success("Configuration is valid");
        }
    }

    Ok(())
}
