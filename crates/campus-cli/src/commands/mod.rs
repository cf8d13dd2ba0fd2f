//! CLI command definitions and dispatch.

pub mod access;
pub mod config;
pub mod navigate;
pub mod password;
pub mod policy;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use campus_auth::AccessEnforcer;
use campus_core::config::AppConfig;
use campus_core::error::AppError;

/// Campus: role-based navigation policy tooling
#[derive(Debug, Parser)]
#[command(name = "campus-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults to config/default.toml if present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show which roles may view each route
    Policy(policy::PolicyArgs),
    /// Show the navigation menu of a role
    Menu(access::RoleArgs),
    /// Show the dashboard shortcuts of a role
    Shortcuts(access::RoleArgs),
    /// Check whether a role may view a route
    Check(access::CheckArgs),
    /// Resolve a path through the navigation gate
    Resolve(navigate::ResolveArgs),
    /// Hash a password for the account directory
    HashPassword(password::HashPasswordArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<(), AppError> {
        let config_path = self.config.as_deref();
        match &self.command {
            Commands::Policy(args) => policy::execute(args, config_path, self.format),
            Commands::Menu(args) => access::execute_menu(args, config_path, self.format),
            Commands::Shortcuts(args) => access::execute_shortcuts(args, config_path, self.format),
            Commands::Check(args) => access::execute_check(args, config_path, self.format),
            Commands::Resolve(args) => navigate::execute(args, config_path, self.format),
            Commands::HashPassword(args) => password::execute(args),
            Commands::Config(args) => config::execute(args, config_path, self.format),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: build the access enforcer with configured overrides
pub fn load_enforcer(config_path: Option<&str>) -> Result<AccessEnforcer, AppError> {
    let config = load_config(config_path)?;
    AccessEnforcer::from_config(&config.policy)
}

/// Helper: render a role set as a comma-separated list
pub fn join_roles<'a, I>(roles: I) -> String
where
    I: IntoIterator<Item = &'a campus_entity::user::UserRole>,
{
    roles
        .into_iter()
        .map(|role| role.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
