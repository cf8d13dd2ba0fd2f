//! Per-role access commands: menu, shortcuts, and single checks.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use campus_core::error::AppError;
use campus_entity::route::Route;
use campus_entity::user::UserRole;

/// Arguments naming a role
#[derive(Debug, Args)]
pub struct RoleArgs {
    /// Role to inspect
    #[arg(short, long)]
    pub role: UserRole,
}

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Role to check
    #[arg(short, long)]
    pub role: UserRole,
    /// Route identifier, e.g. `academic/structure`
    #[arg(long)]
    pub route: String,
}

/// Menu display row
#[derive(Debug, Serialize, Tabled)]
struct MenuRow {
    /// Link text
    label: String,
    /// Target path
    path: String,
}

/// Shortcut display row
#[derive(Debug, Serialize, Tabled)]
struct ShortcutRow {
    /// Card title
    title: String,
    /// Card description
    description: String,
    /// Target path
    path: String,
}

/// Result of a single access check
#[derive(Debug, Serialize)]
struct CheckResult {
    role: UserRole,
    route: String,
    allowed: bool,
    default_view: String,
}

/// Execute the menu command
pub fn execute_menu(
    args: &RoleArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let enforcer = super::load_enforcer(config_path)?;

    let rows: Vec<MenuRow> = enforcer
        .menu_for(&args.role)
        .into_iter()
        .map(|entry| MenuRow {
            label: entry.label.clone(),
            path: entry.route.path(),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}

/// Execute the shortcuts command
pub fn execute_shortcuts(
    args: &RoleArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let enforcer = super::load_enforcer(config_path)?;

    let rows: Vec<ShortcutRow> = enforcer
        .dashboard_shortcuts(&args.role)
        .into_iter()
        .map(|shortcut| ShortcutRow {
            title: shortcut.title.clone(),
            description: shortcut.description.clone(),
            path: shortcut.route.path(),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}

/// Execute the check command
///
/// Unknown routes are reported as an error here, unlike at runtime where
/// they simply redirect.
pub fn execute_check(
    args: &CheckArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let enforcer = super::load_enforcer(config_path)?;

    let route = args
        .route
        .parse::<Route>()
        .map_err(|e: AppError| AppError::not_found(e.message))?;

    let result = CheckResult {
        role: args.role,
        route: args.route.clone(),
        allowed: enforcer.is_allowed(&args.role, &route),
        default_view: enforcer.default_view_for(&args.role).path(),
    };

    match format {
        OutputFormat::Json => output::print_json(&result),
        OutputFormat::Table => {
            output::print_kv("Role", result.role.as_str());
            output::print_kv("Route", &route.path());
            output::print_kv("Allowed", if result.allowed { "yes" } else { "no" });
            output::print_kv("Default view", &result.default_view);
        }
    }

    Ok(())
}
