//! Access checks over the route policy table.

use std::collections::BTreeSet;

use tracing::{debug, info};

use campus_core::config::PolicyConfig;
use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_entity::route::Route;
use campus_entity::user::UserRole;

use super::policies::{MenuEntry, RoutePolicies, Shortcut};

/// Answers "may this role see this route" and "where does this role land".
///
/// Every check is a pure lookup: no state changes, no errors.
#[derive(Debug, Clone)]
pub struct AccessEnforcer {
    /// The policy configuration.
    policies: RoutePolicies,
}

impl AccessEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: RoutePolicies::new(),
        }
    }

    /// Creates an enforcer with custom policies, rejecting inconsistent ones.
    pub fn with_policies(policies: RoutePolicies) -> AppResult<Self> {
        let enforcer = Self { policies };
        enforcer.validate()?;
        Ok(enforcer)
    }

    /// Builds the default policy set with configured overrides applied.
    ///
    /// Unknown route or role names and overrides that leave a role unable to
    /// reach its landing view fail with a configuration error.
    pub fn from_config(config: &PolicyConfig) -> AppResult<Self> {
        let mut policies = RoutePolicies::new();

        for (route_id, role_names) in &config.grants {
            let route = parse_route(route_id)?;
            let roles = role_names
                .iter()
                .map(|name| parse_role(name))
                .collect::<Result<BTreeSet<_>, _>>()?;
            info!(route = %route, roles = ?roles, "Overriding route grant");
            policies.set_roles(route, roles);
        }

        for (role_name, route_id) in &config.default_views {
            let role = parse_role(role_name)?;
            let route = parse_route(route_id)?;
            info!(role = %role, route = %route, "Overriding default view");
            policies.set_default_view(role, route);
        }

        Self::with_policies(policies)
    }

    /// Checks whether the role may view the route.
    pub fn is_allowed(&self, role: &UserRole, route: &Route) -> bool {
        self.policies.permits(role, route)
    }

    /// Checks whether the role may open a sub-path such as `courses/42`.
    ///
    /// Implies [`is_allowed`](Self::is_allowed); flat routes have no sub-paths.
    pub fn is_allowed_subpath(&self, role: &UserRole, route: &Route) -> bool {
        self.policies.permits_subpath(role, route)
    }

    /// Like [`is_allowed`](Self::is_allowed) for a route identifier.
    ///
    /// Unknown identifiers are never allowed.
    pub fn is_allowed_id(&self, role: &UserRole, route_id: &str) -> bool {
        route_id
            .parse::<Route>()
            .map(|route| self.is_allowed(role, &route))
            .unwrap_or(false)
    }

    /// The route the role lands on after login or a rejected navigation.
    pub fn default_view_for(&self, role: &UserRole) -> Route {
        self.policies.default_view(role).unwrap_or(Route::Dashboard)
    }

    /// Routes for the navigation bar, in display order.
    pub fn accessible_menu_entries(&self, role: &UserRole) -> Vec<Route> {
        self.menu_for(role).into_iter().map(|entry| entry.route).collect()
    }

    /// Navigation bar entries shown to the role, with their labels.
    pub fn menu_for(&self, role: &UserRole) -> Vec<&MenuEntry> {
        self.policies
            .menu()
            .iter()
            .filter(|entry| entry.audience.contains(role) && self.is_allowed(role, &entry.route))
            .collect()
    }

    /// Dashboard action cards for the role, limited to reachable routes.
    pub fn dashboard_shortcuts(&self, role: &UserRole) -> Vec<&Shortcut> {
        self.policies
            .shortcuts(role)
            .iter()
            .filter(|shortcut| self.is_allowed(role, &shortcut.route))
            .collect()
    }

    /// Every route the role may view, in table order.
    pub fn permitted_routes(&self, role: &UserRole) -> Vec<Route> {
        Route::ALL
            .into_iter()
            .filter(|route| self.is_allowed(role, route))
            .collect()
    }

    /// Roles permitted on the route.
    pub fn permitted_roles(&self, route: &Route) -> BTreeSet<UserRole> {
        self.policies.roles_for_route(route)
    }

    /// Roles permitted below a nested route.
    pub fn permitted_subpath_roles(&self, route: &Route) -> BTreeSet<UserRole> {
        self.policies.roles_for_subpath(route)
    }

    /// Checks the table's invariants.
    ///
    /// Every role must reach its landing view. Menu entries and shortcuts
    /// that target a route their audience cannot reach are reported as
    /// well, since they would lead straight into a redirect.
    pub fn validate(&self) -> AppResult<()> {
        let mut problems = Vec::new();

        for role in UserRole::ALL {
            let landing = self.default_view_for(&role);
            if !self.is_allowed(&role, &landing) {
                problems.push(format!(
                    "role '{role}' cannot reach its default view '{landing}'"
                ));
            }

            for shortcut in self.policies.shortcuts(&role) {
                if !self.is_allowed(&role, &shortcut.route) {
                    problems.push(format!(
                        "dashboard shortcut '{}' for role '{role}' targets forbidden route '{}'",
                        shortcut.title, shortcut.route
                    ));
                }
            }
        }

        for entry in self.policies.menu() {
            for role in &entry.audience {
                if !self.is_allowed(role, &entry.route) {
                    problems.push(format!(
                        "menu entry '{}' is shown to role '{role}' \
                         but route '{}' is forbidden to it",
                        entry.label, entry.route
                    ));
                }
            }
        }

        if problems.is_empty() {
            debug!("Access policy validated");
            Ok(())
        } else {
            Err(AppError::configuration(format!(
                "Inconsistent access policy: {}",
                problems.join("; ")
            )))
        }
    }

    /// Returns a reference to the underlying policies.
    pub fn policies(&self) -> &RoutePolicies {
        &self.policies
    }
}

impl Default for AccessEnforcer {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_route(id: &str) -> AppResult<Route> {
    id.parse()
        .map_err(|e: AppError| AppError::configuration(format!("Policy override: {}", e.message)))
}

fn parse_role(name: &str) -> AppResult<UserRole> {
    name.parse()
        .map_err(|e: AppError| AppError::configuration(format!("Policy override: {}", e.message)))
}
