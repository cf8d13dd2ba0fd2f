//! Concrete screens rendered by the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::user::UserRole;

use super::path::Route;

/// The view the presentation layer renders.
///
/// Most routes have exactly one screen. `dashboard` renders a
/// role-specific dashboard and `courses` renders a read-only course list
/// for students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "screen", content = "role", rename_all = "snake_case")]
pub enum Screen {
    /// Login form.
    Login,
    /// Dashboard for the given role.
    Dashboard(UserRole),
    UserManagement,
    SystemSettings,
    Reports,
    AcademicStructure,
    TeacherAssignment,
    AcademicPlanning,
    StudentManagement,
    StudentPayments,
    SalaryPayments,
    FinancialReports,
    CourseManagement,
    StudentCourses,
    QuizManagement,
    StudentProgress,
    Forums,
    Chat,
    Grades,
    StudentAssignments,
    Timetable,
}

impl Screen {
    /// Screen rendered for `route` when viewed by `role`.
    ///
    /// Does not check access; callers consult the access policy first.
    pub fn for_route(route: Route, role: UserRole) -> Self {
        match route {
            Route::Dashboard => Self::Dashboard(role),
            Route::Users => Self::UserManagement,
            Route::Settings => Self::SystemSettings,
            Route::Reports => Self::Reports,
            Route::AcademicStructure => Self::AcademicStructure,
            Route::AcademicTeachers => Self::TeacherAssignment,
            Route::AcademicPlanning => Self::AcademicPlanning,
            Route::AcademicStudents => Self::StudentManagement,
            Route::StudentPayments => Self::StudentPayments,
            Route::SalaryPayments => Self::SalaryPayments,
            Route::FinancialReports => Self::FinancialReports,
            Route::Courses if role == UserRole::Student => Self::StudentCourses,
            Route::Courses => Self::CourseManagement,
            Route::Quizzes => Self::QuizManagement,
            Route::StudentProgress => Self::StudentProgress,
            Route::Forums => Self::Forums,
            Route::Chat => Self::Chat,
            Route::Grades => Self::Grades,
            Route::Assignments => Self::StudentAssignments,
            Route::Planning => Self::Timetable,
        }
    }

    /// Title shown in the page header.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Dashboard(_) => "Dashboard",
            Self::UserManagement => "User management",
            Self::SystemSettings => "System settings",
            Self::Reports => "Reports",
            Self::AcademicStructure => "Academic structure",
            Self::TeacherAssignment => "Teacher assignment",
            Self::AcademicPlanning => "Academic planning",
            Self::StudentManagement => "Student management",
            Self::StudentPayments => "Student payments",
            Self::SalaryPayments => "Salaries",
            Self::FinancialReports => "Financial reports",
            Self::CourseManagement => "Course management",
            Self::StudentCourses => "My courses",
            Self::QuizManagement => "Quizzes",
            Self::StudentProgress => "Student progress",
            Self::Forums => "Forums",
            Self::Chat => "Chat",
            Self::Grades => "My grades",
            Self::StudentAssignments => "My assignments",
            Self::Timetable => "Timetable",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dashboard(role) => write!(f, "{} ({})", self.title(), role.label()),
            _ => write!(f, "{}", self.title()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_is_role_specific() {
        assert_eq!(
            Screen::for_route(Route::Dashboard, UserRole::Accounting),
            Screen::Dashboard(UserRole::Accounting)
        );
        assert_eq!(
            Screen::Dashboard(UserRole::Teacher).to_string(),
            "Dashboard (Teacher)"
        );
    }

    #[test]
    fn test_courses_screen_depends_on_role() {
        assert_eq!(
            Screen::for_route(Route::Courses, UserRole::Student),
            Screen::StudentCourses
        );
        assert_eq!(
            Screen::for_route(Route::Courses, UserRole::Teacher),
            Screen::CourseManagement
        );
        assert_eq!(
            Screen::for_route(Route::Courses, UserRole::Admin),
            Screen::CourseManagement
        );
    }
}
