//! Campus: interactive application shell
//!
//! Wires configuration, logging, the session holder and the navigation gate
//! together, then runs the shell's event loop.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use campus_auth::{AccessEnforcer, NavigationGate, SessionHolder};
use campus_core::config::AppConfig;
use campus_core::error::AppError;

mod shell;

use shell::Shell;

fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config) {
        tracing::error!("Shell error: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path = std::env::var("CAMPUS_CONFIG").ok();
    AppConfig::load(config_path.as_deref())
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Build the authorization components and run the shell until the user quits
fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Campus v{}", env!("CARGO_PKG_VERSION"));

    let enforcer = Arc::new(AccessEnforcer::from_config(&config.policy)?);
    let sessions = SessionHolder::from_config(&config.auth)?;
    let gate = NavigationGate::new(enforcer);

    Shell::new(sessions, gate).run()
}
