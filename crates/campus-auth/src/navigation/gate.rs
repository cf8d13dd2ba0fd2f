//! Resolves a requested path to the screen to render or the place to go instead.
//!
//! Denied and unknown routes are handled the same way: the caller is sent to
//! its landing view. There is no "forbidden" screen, so the navigation
//! surface never reveals which routes exist for other roles.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use campus_entity::route::path::LOGIN_PATH;
use campus_entity::route::{Route, RouteMatch, Screen};
use campus_entity::session::Session;

use crate::rbac::AccessEnforcer;

/// A place the application can be at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "route", rename_all = "snake_case")]
pub enum Location {
    /// The login screen.
    Login,
    /// A routed screen.
    Route(Route),
}

impl Location {
    /// The absolute path of this location.
    pub fn path(&self) -> String {
        match self {
            Self::Login => format!("/{LOGIN_PATH}"),
            Self::Route(route) => route.path(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Why a navigation was redirected. Used for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectReason {
    /// No session; everything but the login screen leads to login.
    Unauthenticated,
    /// Authenticated at the root or login path; go to the landing view.
    Landing,
    /// No route matches the path.
    UnknownRoute,
    /// The route exists but the role may not view it.
    Forbidden,
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Navigation {
    /// Render a screen.
    Render {
        /// Where the application now is.
        location: Location,
        /// What to render there.
        screen: Screen,
        /// Sub-path below a nested route, e.g. `42/edit` under `courses`.
        rest: Option<String>,
    },
    /// Go somewhere else instead.
    Redirect {
        /// Redirect target.
        to: Location,
        /// Why.
        reason: RedirectReason,
    },
}

impl Navigation {
    /// The location the application ends up at after this outcome.
    pub fn location(&self) -> Location {
        match self {
            Self::Render { location, .. } => *location,
            Self::Redirect { to, .. } => *to,
        }
    }

    /// Returns `true` for a redirect.
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }
}

/// Single authorization gate for all navigation.
#[derive(Debug, Clone)]
pub struct NavigationGate {
    /// Route access checks.
    enforcer: Arc<AccessEnforcer>,
}

impl NavigationGate {
    /// Creates a gate over the given enforcer.
    pub fn new(enforcer: Arc<AccessEnforcer>) -> Self {
        Self { enforcer }
    }

    /// Decides what happens when `path` is requested with `session` active.
    pub fn resolve(&self, session: Option<&Session>, path: &str) -> Navigation {
        let matched = RouteMatch::resolve(path);

        let Some(session) = session else {
            return match matched {
                RouteMatch::Login => Navigation::Render {
                    location: Location::Login,
                    screen: Screen::Login,
                    rest: None,
                },
                _ => self.redirect(Location::Login, RedirectReason::Unauthenticated, path),
            };
        };

        let role = session.role;
        let landing = Location::Route(self.enforcer.default_view_for(&role));

        match matched {
            RouteMatch::Root | RouteMatch::Login => {
                self.redirect(landing, RedirectReason::Landing, path)
            }
            RouteMatch::Unknown(_) => self.redirect(landing, RedirectReason::UnknownRoute, path),
            RouteMatch::Route { route, rest } => {
                let allowed = match rest {
                    Some(_) => self.enforcer.is_allowed_subpath(&role, &route),
                    None => self.enforcer.is_allowed(&role, &route),
                };
                if allowed {
                    Navigation::Render {
                        location: Location::Route(route),
                        screen: Screen::for_route(route, role),
                        rest,
                    }
                } else {
                    self.redirect(landing, RedirectReason::Forbidden, path)
                }
            }
        }
    }

    /// Resolves `path` and follows a redirect to the screen finally shown.
    ///
    /// Redirect targets are the login screen or a landing view the role is
    /// guaranteed to reach, so at most one redirect is followed.
    pub fn land(&self, session: Option<&Session>, path: &str) -> Navigation {
        match self.resolve(session, path) {
            Navigation::Redirect { to, .. } => self.resolve(session, &to.path()),
            rendered => rendered,
        }
    }

    /// The screen shown right after login.
    pub fn landing(&self, session: &Session) -> Navigation {
        let route = self.enforcer.default_view_for(&session.role);
        self.resolve(Some(session), &route.path())
    }

    /// The enforcer used by this gate.
    pub fn enforcer(&self) -> &AccessEnforcer {
        &self.enforcer
    }

    fn redirect(&self, to: Location, reason: RedirectReason, path: &str) -> Navigation {
        debug!(requested = %path, to = %to, reason = ?reason, "Redirecting navigation");
        Navigation::Redirect { to, reason }
    }
}

impl Default for NavigationGate {
    fn default() -> Self {
        Self::new(Arc::new(AccessEnforcer::new()))
    }
}
