//! Integration tests for policy overrides loaded from configuration.

mod helpers;

use campus_auth::{Location, Navigation, RedirectReason};
use campus_core::config::AppConfig;
use campus_core::error::ErrorKind;
use campus_entity::route::Route;
use campus_entity::user::UserRole;

#[test]
fn test_planning_restricted_by_config() {
    let config = AppConfig::from_toml(
        r#"
        [policy.grants]
        planning = ["admin", "academic", "teacher"]
        "#,
    )
    .unwrap();
    let mut app = helpers::TestApp::from_config(&config);

    app.login_as(UserRole::Student);
    assert_eq!(
        app.visit("/planning"),
        Navigation::Redirect {
            to: Location::Route(Route::Dashboard),
            reason: RedirectReason::Forbidden,
        }
    );

    app.login_as(UserRole::Teacher);
    assert!(!app.visit("/planning").is_redirect());
}

#[test]
fn test_custom_landing_view() {
    let config = AppConfig::from_toml(
        r#"
        [policy.default_views]
        student = "grades"
        "#,
    )
    .unwrap();
    let mut app = helpers::TestApp::from_config(&config);
    app.login_as(UserRole::Student);

    assert_eq!(
        app.visit("/nowhere").location(),
        Location::Route(Route::Grades)
    );
    let session = app.sessions.current_session().unwrap();
    assert_eq!(
        app.gate.landing(session).location(),
        Location::Route(Route::Grades)
    );
}

#[test]
fn test_override_that_strands_a_role_fails_at_startup() {
    let config = AppConfig::from_toml(
        r#"
        [policy.grants]
        dashboard = ["admin"]
        "#,
    )
    .unwrap();

    let err = campus_auth::AccessEnforcer::from_config(&config.policy).unwrap_err();

    assert_eq!(err.kind, ErrorKind::Configuration);
    assert!(err.message.contains("cannot reach its default view"));
}

#[test]
fn test_unknown_role_in_override_fails() {
    let config = AppConfig::from_toml(
        r#"
        [policy.default_views]
        parent = "dashboard"
        "#,
    )
    .unwrap();

    let err = campus_auth::AccessEnforcer::from_config(&config.policy).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
}
