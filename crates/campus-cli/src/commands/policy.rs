//! Route policy table command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::output::{self, OutputFormat};
use campus_auth::AccessEnforcer;
use campus_core::error::AppError;
use campus_entity::route::Route;
use campus_entity::user::UserRole;

/// Arguments for the policy command
#[derive(Debug, Args)]
pub struct PolicyArgs {
    /// Only list routes this role may view
    #[arg(short, long)]
    pub role: Option<UserRole>,
}

/// Policy display row
#[derive(Debug, Serialize, Tabled)]
struct PolicyRow {
    /// Route identifier
    route: String,
    /// Whether sub-paths belong to the route
    nested: bool,
    /// Permitted roles
    roles: String,
    /// Roles permitted below the route
    subpath_roles: String,
}

/// Execute the policy command
pub fn execute(
    args: &PolicyArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let enforcer = super::load_enforcer(config_path)?;
    let rows = policy_rows(&enforcer, args.role.as_ref());

    output::print_list(&rows, format);
    Ok(())
}

/// Builds one row per route, limited to the role's routes when given
fn policy_rows(enforcer: &AccessEnforcer, role: Option<&UserRole>) -> Vec<PolicyRow> {
    let routes = match role {
        Some(role) => enforcer.permitted_routes(role),
        None => Route::ALL.to_vec(),
    };
    debug!(role = ?role, routes = routes.len(), "Listing route policy");

    routes
        .into_iter()
        .map(|route| PolicyRow {
            route: route.id().to_string(),
            nested: route.is_nested(),
            roles: super::join_roles(&enforcer.permitted_roles(&route)),
            subpath_roles: super::join_roles(&enforcer.permitted_subpath_roles(&route)),
        })
        .collect()
}
