//! Integration tests for the login/logout lifecycle.

mod helpers;

use campus_auth::{LoginRequest, PasswordHasher};
use campus_core::config::{AccountConfig, AppConfig, CredentialMode};
use campus_core::error::ErrorKind;
use campus_entity::session::AuthState;
use campus_entity::user::UserRole;

#[test]
fn test_login_as_student() {
    let mut app = helpers::TestApp::new();

    app.sessions
        .login(&LoginRequest::new("a@b.com", "x", UserRole::Student))
        .unwrap();

    let session = app.sessions.current_session().unwrap();
    assert_eq!(session.role, UserRole::Student);
    assert_eq!(session.name, "a");
}

#[test]
fn test_login_then_logout() {
    let mut app = helpers::TestApp::new();
    app.login_as(UserRole::Accounting);
    assert_eq!(
        app.sessions.state(),
        AuthState::Authenticated(UserRole::Accounting)
    );

    app.sessions.logout();

    assert!(app.sessions.current_session().is_none());
    assert_eq!(app.sessions.state(), AuthState::Unauthenticated);
}

#[test]
fn test_logout_without_session_is_noop() {
    let mut app = helpers::TestApp::new();
    app.sessions.logout();
    app.sessions.logout();
    assert_eq!(app.sessions.state(), AuthState::Unauthenticated);
}

#[test]
fn test_every_role_can_log_in_and_land() {
    for role in UserRole::ALL {
        let mut app = helpers::TestApp::new();
        app.login_as(role);
        let session = app.sessions.current_session().unwrap();
        let landing = app.gate.landing(session);
        assert!(!landing.is_redirect(), "{role} did not land");
    }
}

#[test]
fn test_empty_submission_is_blocked() {
    let mut app = helpers::TestApp::new();

    for (email, password) in [("", "x"), ("a@b.com", ""), ("", "")] {
        let err = app
            .sessions
            .login(&LoginRequest::new(email, password, UserRole::Admin))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(app.sessions.state(), AuthState::Unauthenticated);
    }
}

fn directory_app() -> helpers::TestApp {
    let hash = PasswordHasher::new().hash_password("letmein").unwrap();
    let config = AppConfig {
        auth: campus_core::config::AuthConfig {
            mode: CredentialMode::Directory,
            accounts: vec![AccountConfig {
                id: None,
                email: "bursar@school.test".to_string(),
                password_hash: hash,
                role: "accounting".to_string(),
                display_name: Some("The Bursar".to_string()),
            }],
        },
        ..Default::default()
    };
    helpers::TestApp::from_config(&config)
}

#[test]
fn test_directory_mode_assigns_role_server_side() {
    let mut app = directory_app();

    let session = app
        .sessions
        .login(&LoginRequest::new(
            "Bursar@School.test",
            "letmein",
            UserRole::Admin,
        ))
        .unwrap();

    assert_eq!(session.role, UserRole::Accounting);
    assert_eq!(session.name, "The Bursar");
    assert_eq!(session.user_id, "bursar@school.test");
}

#[test]
fn test_directory_mode_rejects_wrong_password() {
    let mut app = directory_app();

    let err = app
        .sessions
        .login(&LoginRequest::new(
            "bursar@school.test",
            "guess",
            UserRole::Accounting,
        ))
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Authentication);
    assert!(app.sessions.current_session().is_none());
}
