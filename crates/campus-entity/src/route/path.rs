//! Route identifiers and path matching.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use campus_core::AppError;

/// Path of the login screen, the only screen reachable without a session.
pub const LOGIN_PATH: &str = "login";

/// A navigable screen of the application, identified by its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Route {
    /// Role-specific landing page.
    #[serde(rename = "dashboard")]
    Dashboard,

    // Admin console
    /// User accounts.
    #[serde(rename = "users")]
    Users,
    /// System settings.
    #[serde(rename = "settings")]
    Settings,
    /// Usage reports.
    #[serde(rename = "reports")]
    Reports,

    // Academic office
    /// Programmes, levels and classes.
    #[serde(rename = "academic/structure")]
    AcademicStructure,
    /// Course-to-teacher assignment.
    #[serde(rename = "academic/teachers")]
    AcademicTeachers,
    /// Term planning.
    #[serde(rename = "academic/planning")]
    AcademicPlanning,
    /// Student enrolment records.
    #[serde(rename = "academic/students")]
    AcademicStudents,

    // Accounting
    /// Tuition payments.
    #[serde(rename = "payments/students")]
    StudentPayments,
    /// Staff salaries.
    #[serde(rename = "payments/salaries")]
    SalaryPayments,
    /// Financial reports.
    #[serde(rename = "payments/reports")]
    FinancialReports,

    // Teaching
    /// Courses; nested paths address individual courses.
    #[serde(rename = "courses")]
    Courses,
    /// Quizzes; nested paths address individual quizzes.
    #[serde(rename = "quizzes")]
    Quizzes,
    /// Per-student progress tracking.
    #[serde(rename = "student-progress")]
    StudentProgress,

    // Communication
    /// Discussion forums; nested paths address threads.
    #[serde(rename = "forums")]
    Forums,
    /// Direct messaging.
    #[serde(rename = "chat")]
    Chat,

    // Student
    /// Grades.
    #[serde(rename = "grades")]
    Grades,
    /// Homework assignments.
    #[serde(rename = "assignments")]
    Assignments,

    /// Timetable.
    #[serde(rename = "planning")]
    Planning,
}

impl Route {
    /// Every route, in table order.
    pub const ALL: [Route; 19] = [
        Self::Dashboard,
        Self::Users,
        Self::Settings,
        Self::Reports,
        Self::AcademicStructure,
        Self::AcademicTeachers,
        Self::AcademicPlanning,
        Self::AcademicStudents,
        Self::StudentPayments,
        Self::SalaryPayments,
        Self::FinancialReports,
        Self::Courses,
        Self::Quizzes,
        Self::StudentProgress,
        Self::Forums,
        Self::Chat,
        Self::Grades,
        Self::Assignments,
        Self::Planning,
    ];

    /// The route identifier: its path without the leading slash.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Users => "users",
            Self::Settings => "settings",
            Self::Reports => "reports",
            Self::AcademicStructure => "academic/structure",
            Self::AcademicTeachers => "academic/teachers",
            Self::AcademicPlanning => "academic/planning",
            Self::AcademicStudents => "academic/students",
            Self::StudentPayments => "payments/students",
            Self::SalaryPayments => "payments/salaries",
            Self::FinancialReports => "payments/reports",
            Self::Courses => "courses",
            Self::Quizzes => "quizzes",
            Self::StudentProgress => "student-progress",
            Self::Forums => "forums",
            Self::Chat => "chat",
            Self::Grades => "grades",
            Self::Assignments => "assignments",
            Self::Planning => "planning",
        }
    }

    /// The absolute path, e.g. `/academic/structure`.
    pub fn path(&self) -> String {
        format!("/{}", self.id())
    }

    /// Whether sub-paths such as `courses/42/edit` belong to this route.
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Courses | Self::Quizzes | Self::Forums)
    }

    /// Finds the route with exactly this identifier.
    pub fn from_id(id: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|route| route.id() == id)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Route {
    type Err = AppError;

    /// Parses a route identifier. Leading/trailing slashes and case are
    /// ignored; nested sub-paths are not accepted here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = normalize_path(s);
        Route::from_id(&id)
            .ok_or_else(|| AppError::validation(format!("Unknown route: '{s}'")))
    }
}

/// Result of matching a requested path against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    /// The empty path (`/`).
    Root,
    /// The login screen.
    Login,
    /// A known route, with the remainder for nested routes.
    Route {
        /// The matched route.
        route: Route,
        /// Sub-path below a nested route, if any.
        rest: Option<String>,
    },
    /// No route matches the normalized path.
    Unknown(String),
}

impl RouteMatch {
    /// Matches a raw path such as `/Courses/42?tab=quiz#top`.
    ///
    /// Matching ignores case, query, fragment, and repeated slashes.
    pub fn resolve(raw: &str) -> Self {
        let normalized = normalize_path(raw);

        if normalized.is_empty() {
            return Self::Root;
        }
        if normalized == LOGIN_PATH {
            return Self::Login;
        }
        if let Some(route) = Route::from_id(&normalized) {
            return Self::Route { route, rest: None };
        }

        Route::ALL
            .into_iter()
            .filter(Route::is_nested)
            .find_map(|route| {
                normalized
                    .strip_prefix(route.id())
                    .and_then(|rest| rest.strip_prefix('/'))
                    .map(|rest| Self::Route {
                        route,
                        rest: Some(rest.to_string()),
                    })
            })
            .unwrap_or(Self::Unknown(normalized))
    }
}

/// Strips query and fragment, lowercases, and joins non-empty segments.
fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    raw[..end]
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_parse_back() {
        for route in Route::ALL {
            assert_eq!(route.id().parse::<Route>().unwrap(), route);
            assert_eq!(Route::from_id(route.id()), Some(route));
        }
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Route::AcademicStructure).unwrap();
        assert_eq!(json, "\"academic/structure\"");
    }

    #[test]
    fn test_from_str_tolerates_slashes_and_case() {
        assert_eq!("/Users/".parse::<Route>().unwrap(), Route::Users);
        assert!("courses/42".parse::<Route>().is_err());
        assert!("nowhere".parse::<Route>().is_err());
    }

    #[test]
    fn test_resolve_root_and_login() {
        assert_eq!(RouteMatch::resolve(""), RouteMatch::Root);
        assert_eq!(RouteMatch::resolve("///"), RouteMatch::Root);
        assert_eq!(RouteMatch::resolve("/login"), RouteMatch::Login);
        assert_eq!(RouteMatch::resolve("/login?next=chat"), RouteMatch::Login);
    }

    #[test]
    fn test_resolve_exact_route() {
        assert_eq!(
            RouteMatch::resolve("/payments/salaries"),
            RouteMatch::Route {
                route: Route::SalaryPayments,
                rest: None
            }
        );
        assert_eq!(
            RouteMatch::resolve("/Student-Progress#top"),
            RouteMatch::Route {
                route: Route::StudentProgress,
                rest: None
            }
        );
    }

    #[test]
    fn test_resolve_nested_route() {
        assert_eq!(
            RouteMatch::resolve("/courses/42/edit"),
            RouteMatch::Route {
                route: Route::Courses,
                rest: Some("42/edit".to_string())
            }
        );
        assert_eq!(
            RouteMatch::resolve("forums//general"),
            RouteMatch::Route {
                route: Route::Forums,
                rest: Some("general".to_string())
            }
        );
    }

    #[test]
    fn test_resolve_unknown() {
        // Only nested routes accept sub-paths.
        assert_eq!(
            RouteMatch::resolve("/chat/room-1"),
            RouteMatch::Unknown("chat/room-1".to_string())
        );
        // The payments family has no index route.
        assert_eq!(
            RouteMatch::resolve("/payments"),
            RouteMatch::Unknown("payments".to_string())
        );
        // A shared prefix is not a sub-path.
        assert_eq!(
            RouteMatch::resolve("/coursesx"),
            RouteMatch::Unknown("coursesx".to_string())
        );
    }
}
