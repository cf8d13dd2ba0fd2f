//! Route-to-role permission table, landing views, and navigation entries.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use campus_entity::route::Route;
use campus_entity::user::UserRole;

use UserRole::{Academic, Accounting, Admin, Student, Teacher};

/// An item of the top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Target route.
    pub route: Route,
    /// Link text.
    pub label: String,
    /// Roles the link is shown to, before the access check.
    pub audience: BTreeSet<UserRole>,
}

impl MenuEntry {
    fn new(route: Route, label: &str, audience: &[UserRole]) -> Self {
        Self {
            route,
            label: label.to_string(),
            audience: audience.iter().copied().collect(),
        }
    }
}

/// An action card on a role's dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    /// Target route.
    pub route: Route,
    /// Card title.
    pub title: String,
    /// One-line description.
    pub description: String,
}

impl Shortcut {
    fn new(route: Route, title: &str, description: &str) -> Self {
        Self {
            route,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Defines which roles reach which routes and where each role lands.
#[derive(Debug, Clone)]
pub struct RoutePolicies {
    /// Route → permitted roles. A route missing here is reachable by nobody.
    permits: HashMap<Route, BTreeSet<UserRole>>,
    /// Nested route → roles allowed below it. Narrows `permits`; a nested
    /// route missing here opens its sub-paths to every permitted role.
    subpath_permits: HashMap<Route, BTreeSet<UserRole>>,
    /// Role → landing route.
    default_views: HashMap<UserRole, Route>,
    /// Navigation bar, in display order.
    menu: Vec<MenuEntry>,
    /// Role → dashboard action cards, in display order.
    shortcuts: HashMap<UserRole, Vec<Shortcut>>,
}

impl RoutePolicies {
    /// Creates the built-in policy set.
    pub fn new() -> Self {
        let mut permits: HashMap<Route, BTreeSet<UserRole>> = HashMap::new();
        let mut grant = |routes: &[Route], roles: &[UserRole]| {
            for route in routes {
                permits.insert(*route, roles.iter().copied().collect());
            }
        };

        grant(&[Route::Dashboard], &UserRole::ALL);

        // Admin console
        grant(&[Route::Users, Route::Settings, Route::Reports], &[Admin]);

        // Academic office
        grant(
            &[
                Route::AcademicStructure,
                Route::AcademicTeachers,
                Route::AcademicPlanning,
                Route::AcademicStudents,
            ],
            &[Academic],
        );

        // Accounting
        grant(
            &[
                Route::StudentPayments,
                Route::SalaryPayments,
                Route::FinancialReports,
            ],
            &[Accounting],
        );

        // Teaching; students reach `courses` through their own course list
        // but only staff open individual courses below it
        grant(&[Route::Courses], &[Teacher, Admin, Student]);
        grant(&[Route::Quizzes, Route::StudentProgress], &[Teacher, Admin]);

        // Communication
        grant(&[Route::Forums, Route::Chat], &[Teacher, Student, Admin]);

        // Student
        grant(&[Route::Grades, Route::Assignments], &[Student]);

        grant(&[Route::Planning], &UserRole::ALL);

        let default_views = UserRole::ALL
            .into_iter()
            .map(|role| (role, Route::Dashboard))
            .collect();

        let subpath_permits = HashMap::from([(Route::Courses, BTreeSet::from([Teacher, Admin]))]);

        Self {
            permits,
            subpath_permits,
            default_views,
            menu: default_menu(),
            shortcuts: default_shortcuts(),
        }
    }

    /// Checks whether the role is in the route's permitted set.
    pub fn permits(&self, role: &UserRole, route: &Route) -> bool {
        self.permits
            .get(route)
            .map(|roles| roles.contains(role))
            .unwrap_or(false)
    }

    /// Checks whether the role may open sub-paths below a nested route.
    pub fn permits_subpath(&self, role: &UserRole, route: &Route) -> bool {
        route.is_nested()
            && self.permits(role, route)
            && self
                .subpath_permits
                .get(route)
                .is_none_or(|roles| roles.contains(role))
    }

    /// Returns the set of roles permitted below a nested route.
    pub fn roles_for_subpath(&self, route: &Route) -> BTreeSet<UserRole> {
        self.roles_for_route(route)
            .into_iter()
            .filter(|role| self.permits_subpath(role, route))
            .collect()
    }

    /// Returns the set of roles permitted on the route.
    pub fn roles_for_route(&self, route: &Route) -> BTreeSet<UserRole> {
        self.permits.get(route).cloned().unwrap_or_default()
    }

    /// Replaces the permitted role set of a route.
    pub fn set_roles(&mut self, route: Route, roles: BTreeSet<UserRole>) {
        self.permits.insert(route, roles);
    }

    /// Returns the landing route configured for the role, if any.
    pub fn default_view(&self, role: &UserRole) -> Option<Route> {
        self.default_views.get(role).copied()
    }

    /// Replaces the landing route of a role.
    pub fn set_default_view(&mut self, role: UserRole, route: Route) {
        self.default_views.insert(role, route);
    }

    /// The navigation bar, unfiltered.
    pub fn menu(&self) -> &[MenuEntry] {
        &self.menu
    }

    /// Dashboard action cards for the role, unfiltered.
    pub fn shortcuts(&self, role: &UserRole) -> &[Shortcut] {
        self.shortcuts.get(role).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for RoutePolicies {
    fn default() -> Self {
        Self::new()
    }
}

fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new(Route::Dashboard, "Dashboard", &UserRole::ALL),
        MenuEntry::new(Route::Users, "Users", &[Admin]),
        MenuEntry::new(Route::AcademicStructure, "Structure", &[Academic]),
        MenuEntry::new(Route::AcademicTeachers, "Teachers", &[Academic]),
        MenuEntry::new(Route::StudentPayments, "Payments", &[Accounting]),
        MenuEntry::new(Route::Courses, "Courses", &[Teacher, Admin]),
        MenuEntry::new(Route::Quizzes, "Quizzes", &[Teacher, Admin]),
        MenuEntry::new(Route::Forums, "Forums", &[Teacher, Student, Admin]),
        MenuEntry::new(Route::Chat, "Chat", &[Teacher, Student, Admin]),
        MenuEntry::new(Route::Grades, "Grades", &[Student]),
    ]
}

fn default_shortcuts() -> HashMap<UserRole, Vec<Shortcut>> {
    let mut shortcuts = HashMap::new();

    shortcuts.insert(
        Student,
        vec![
            Shortcut::new(
                Route::Courses,
                "My courses",
                "Course material and resources",
            ),
            Shortcut::new(
                Route::Assignments,
                "My assignments",
                "View and submit homework",
            ),
            Shortcut::new(Route::Grades, "My grades", "Results and averages"),
            Shortcut::new(
                Route::Forums,
                "Discussion forum",
                "Talk with classmates and teachers",
            ),
        ],
    );
    shortcuts.insert(
        Teacher,
        vec![
            Shortcut::new(
                Route::Courses,
                "Course management",
                "Create and manage your courses",
            ),
            Shortcut::new(
                Route::Quizzes,
                "Assessments",
                "Create quizzes and grade homework",
            ),
            Shortcut::new(
                Route::StudentProgress,
                "Student follow-up",
                "Track your students' progress",
            ),
            Shortcut::new(
                Route::Chat,
                "Communication",
                "Talk with students and parents",
            ),
        ],
    );
    shortcuts.insert(
        Admin,
        vec![
            Shortcut::new(Route::Users, "User management", "Accounts and access"),
            Shortcut::new(Route::Settings, "System settings", "Global configuration"),
            Shortcut::new(Route::Reports, "Reports", "Statistics and analysis"),
        ],
    );
    shortcuts.insert(
        Academic,
        vec![
            Shortcut::new(
                Route::AcademicStructure,
                "Academic structure",
                "Programmes and classes",
            ),
            Shortcut::new(
                Route::AcademicTeachers,
                "Teacher assignment",
                "Assign courses to teachers",
            ),
            Shortcut::new(Route::AcademicPlanning, "Planning", "Timetables"),
        ],
    );
    shortcuts.insert(
        Accounting,
        vec![
            Shortcut::new(
                Route::StudentPayments,
                "Student payments",
                "Tuition follow-up",
            ),
            Shortcut::new(Route::SalaryPayments, "Salaries", "Staff payroll"),
            Shortcut::new(
                Route::FinancialReports,
                "Financial reports",
                "Balance sheets and statistics",
            ),
        ],
    );

    shortcuts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_has_an_entry() {
        let policies = RoutePolicies::new();
        for route in Route::ALL {
            assert!(
                !policies.roles_for_route(&route).is_empty(),
                "route {route} has no permitted roles"
            );
        }
    }

    #[test]
    fn test_admin_is_not_a_superset() {
        let policies = RoutePolicies::new();
        assert!(!policies.permits(&Admin, &Route::AcademicStructure));
        assert!(!policies.permits(&Admin, &Route::StudentPayments));
        assert!(!policies.permits(&Admin, &Route::Grades));
        assert!(policies.permits(&Admin, &Route::Quizzes));
    }

    #[test]
    fn test_set_roles_replaces() {
        let mut policies = RoutePolicies::new();
        policies.set_roles(Route::Planning, [Academic].into_iter().collect());
        assert!(policies.permits(&Academic, &Route::Planning));
        assert!(!policies.permits(&Student, &Route::Planning));
    }

    #[test]
    fn test_every_role_has_shortcuts() {
        let policies = RoutePolicies::new();
        for role in UserRole::ALL {
            assert!(!policies.shortcuts(&role).is_empty());
        }
    }
}
