//! Navigation gate command.

use std::sync::Arc;

use clap::Args;

use crate::output::{self, OutputFormat};
use campus_auth::{Navigation, NavigationGate};
use campus_core::error::AppError;
use campus_entity::session::Session;
use campus_entity::user::UserRole;

/// Arguments for the resolve command
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Role of the signed-in user
    #[arg(short, long, required_unless_present = "anonymous", conflicts_with = "anonymous")]
    pub role: Option<UserRole>,
    /// Resolve without a session
    #[arg(long)]
    pub anonymous: bool,
    /// Follow a redirect to the screen finally shown
    #[arg(long)]
    pub follow: bool,
    /// Requested path, e.g. `/courses/42`
    pub path: String,
}

/// Execute the resolve command
pub fn execute(
    args: &ResolveArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let gate = NavigationGate::new(Arc::new(super::load_enforcer(config_path)?));
    let session = match (args.anonymous, args.role) {
        (false, Some(role)) => Some(Session::new("cli", "cli", "cli@localhost", role)),
        _ => None,
    };

    let outcome = if args.follow {
        gate.land(session.as_ref(), &args.path)
    } else {
        gate.resolve(session.as_ref(), &args.path)
    };

    match format {
        OutputFormat::Json => output::print_json(&outcome),
        OutputFormat::Table => match &outcome {
            Navigation::Render {
                location,
                screen,
                rest,
            } => {
                output::print_kv("Outcome", "render");
                output::print_kv("Location", &location.path());
                output::print_kv("Screen", &screen.to_string());
                if let Some(rest) = rest {
                    output::print_kv("Sub-path", rest);
                }
            }
            Navigation::Redirect { to, reason } => {
                output::print_kv("Outcome", "redirect");
                output::print_kv("To", &to.path());
                output::print_kv("Reason", &format!("{reason:?}"));
            }
        },
    }

    Ok(())
}
