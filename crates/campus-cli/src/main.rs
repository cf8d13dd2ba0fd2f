//! Campus CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use campus_core::config::LoggingConfig;

mod commands;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    init_logging(&logging_config(cli.config.as_deref()));

    if let Err(e) = cli.execute() {
        tracing::debug!(kind = ?e.kind, "Command failed");
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Logging settings of the selected config file.
///
/// A broken file falls back to the defaults; the command itself reports it.
fn logging_config(config_path: Option<&str>) -> LoggingConfig {
    commands::load_config(config_path)
        .map(|config| config.logging)
        .unwrap_or_default()
}

/// Initialize tracing on stderr so command output stays clean
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        _ => fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_falls_back_on_missing_file() {
        let logging = logging_config(Some("does/not/exist"));
        assert_eq!(logging.level, "warn");
        assert_eq!(logging.format, "pretty");
    }

    #[test]
    fn test_logging_config_reads_file() {
        let path = std::env::temp_dir().join("campus-cli-logging-test.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\nformat = \"json\"\n").unwrap();

        let logging = logging_config(path.to_str());
        std::fs::remove_file(&path).unwrap();

        assert_eq!(logging.level, "debug");
        assert_eq!(logging.format, "json");
    }
}
