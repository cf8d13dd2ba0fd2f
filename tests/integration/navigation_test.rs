//! Integration tests for navigation through the gate.

mod helpers;

use campus_auth::{Location, Navigation, RedirectReason};
use campus_entity::route::{Route, Screen};
use campus_entity::user::UserRole;

#[test]
fn test_unauthenticated_is_sent_to_login() {
    let app = helpers::TestApp::new();

    assert_eq!(
        app.visit("/dashboard"),
        Navigation::Redirect {
            to: Location::Login,
            reason: RedirectReason::Unauthenticated,
        }
    );
    assert_eq!(app.visit("/login").location(), Location::Login);
}

#[test]
fn test_teacher_unknown_path_goes_to_default_view() {
    let mut app = helpers::TestApp::new();
    app.login_as(UserRole::Teacher);

    let default_view = app.enforcer().default_view_for(&UserRole::Teacher);
    let outcome = app.visit("/library/shelves");

    assert_eq!(outcome.location(), Location::Route(default_view));
    assert!(outcome.is_redirect());
}

#[test]
fn test_every_allowed_route_renders_and_every_other_redirects() {
    for role in UserRole::ALL {
        let mut app = helpers::TestApp::new();
        app.login_as(role);

        for route in Route::ALL {
            let outcome = app.visit(&route.path());
            if app.enforcer().is_allowed(&role, &route) {
                assert_eq!(
                    outcome,
                    Navigation::Render {
                        location: Location::Route(route),
                        screen: Screen::for_route(route, role),
                        rest: None,
                    },
                    "{role} should render {route}"
                );
            } else {
                assert_eq!(
                    outcome,
                    Navigation::Redirect {
                        to: Location::Route(app.enforcer().default_view_for(&role)),
                        reason: RedirectReason::Forbidden,
                    },
                    "{role} should be redirected from {route}"
                );
            }
        }
    }
}

#[test]
fn test_menu_entries_are_always_reachable() {
    for role in UserRole::ALL {
        let mut app = helpers::TestApp::new();
        app.login_as(role);

        for route in app.enforcer().accessible_menu_entries(&role) {
            assert!(app.enforcer().is_allowed(&role, &route));
            assert!(!app.visit(&route.path()).is_redirect());
        }
    }
}

#[test]
fn test_access_checks_are_deterministic() {
    let app = helpers::TestApp::new();
    for role in UserRole::ALL {
        for route in Route::ALL {
            let first = app.enforcer().is_allowed(&role, &route);
            let second = app.enforcer().is_allowed(&role, &route);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_student_and_teacher_see_different_course_screens() {
    let mut app = helpers::TestApp::new();

    app.login_as(UserRole::Student);
    assert!(matches!(
        app.visit("/courses"),
        Navigation::Render {
            screen: Screen::StudentCourses,
            ..
        }
    ));

    app.login_as(UserRole::Teacher);
    assert!(matches!(
        app.visit("/courses/algebra"),
        Navigation::Render {
            screen: Screen::CourseManagement,
            ..
        }
    ));
}

#[test]
fn test_student_course_subpath_returns_to_dashboard() {
    let mut app = helpers::TestApp::new();
    app.login_as(UserRole::Student);

    let outcome = app.visit("/courses/42/edit");
    assert!(outcome.is_redirect());
    assert_eq!(
        outcome,
        Navigation::Redirect {
            to: Location::Route(app.enforcer().default_view_for(&UserRole::Student)),
            reason: RedirectReason::Forbidden,
        }
    );

    app.login_as(UserRole::Admin);
    assert_eq!(
        app.visit("/courses/42/edit").location(),
        Location::Route(Route::Courses)
    );
}

#[test]
fn test_logout_revokes_access_immediately() {
    let mut app = helpers::TestApp::new();
    app.login_as(UserRole::Admin);
    assert!(!app.visit("/users").is_redirect());

    app.sessions.logout();

    assert_eq!(app.visit("/users").location(), Location::Login);
}

#[test]
fn test_navigation_outcome_serializes() {
    let mut app = helpers::TestApp::new();
    app.login_as(UserRole::Academic);

    let json = serde_json::to_value(app.visit("/academic/planning")).unwrap();

    assert_eq!(json["outcome"], "render");
    assert_eq!(json["location"]["route"], "academic/planning");
    assert_eq!(json["screen"]["screen"], "academic_planning");
}
