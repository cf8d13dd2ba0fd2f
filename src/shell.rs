//! Line-oriented presentation layer.
//!
//! Unauthenticated, the shell shows the login form. Authenticated, it shows
//! the role's menu and reads commands. Every navigation, including the one
//! right after login, goes through the [`NavigationGate`].

use std::fmt;

use dialoguer::{Input, Password, Select};
use tracing::{debug, info};

use campus_auth::{Location, LoginRequest, Navigation, NavigationGate, SessionHolder};
use campus_core::error::AppError;
use campus_entity::route::Screen;
use campus_entity::user::UserRole;

/// A command typed at the authenticated prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Navigate to a path.
    Go(String),
    /// Show the navigation menu.
    Menu,
    /// Go to the landing view.
    Home,
    /// Show the current session.
    Whoami,
    /// End the session.
    Logout,
    /// List commands.
    Help,
    /// Leave the application.
    Quit,
}

impl Command {
    /// Parses a prompt line. A bare path (starting with `/`) is a `go`.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.starts_with('/') {
            return Ok(Self::Go(line.to_string()));
        }

        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, arg)) => (word, arg.trim()),
            None => (line, ""),
        };

        match (word.to_lowercase().as_str(), arg) {
            ("go" | "open", "") => Err("usage: go <path>".to_string()),
            ("go" | "open", path) => Ok(Self::Go(path.to_string())),
            ("menu", _) => Ok(Self::Menu),
            ("home", _) => Ok(Self::Home),
            ("whoami", _) => Ok(Self::Whoami),
            ("logout", _) => Ok(Self::Logout),
            ("help" | "?", _) => Ok(Self::Help),
            ("quit" | "exit", _) => Ok(Self::Quit),
            ("", _) => Err("type `help` for commands".to_string()),
            (other, _) => Err(format!("unknown command '{other}', type `help` for commands")),
        }
    }
}

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Item of the login form's role picker.
enum LoginChoice {
    Role(UserRole),
    Quit,
}

impl fmt::Display for LoginChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Role(role) => write!(f, "{}", role.label()),
            Self::Quit => write!(f, "Quit"),
        }
    }
}

/// The application shell.
pub struct Shell {
    /// The one session of this application instance.
    sessions: SessionHolder,
    /// Navigation authorization.
    gate: NavigationGate,
    /// Where the user currently is.
    location: Location,
}

impl Shell {
    /// Creates a shell at the login screen.
    pub fn new(sessions: SessionHolder, gate: NavigationGate) -> Self {
        Self {
            sessions,
            gate,
            location: Location::Login,
        }
    }

    /// Runs the event loop until the user quits.
    pub fn run(mut self) -> Result<(), AppError> {
        loop {
            let flow = if self.sessions.is_authenticated() {
                self.prompt_command()?
            } else {
                self.login_screen()?
            };

            if flow == Flow::Exit {
                info!("Shell exiting");
                return Ok(());
            }
        }
    }

    /// Submits a login and moves to the landing view on success.
    pub fn submit_login(&mut self, request: &LoginRequest) -> Result<Navigation, AppError> {
        let session = self.sessions.login(request)?;
        let landing = self.gate.landing(session);
        self.location = landing.location();
        Ok(landing)
    }

    /// Handles one command and reports whether to keep going.
    pub fn dispatch(&mut self, command: Command) -> Flow {
        match command {
            Command::Go(path) => {
                let outcome = self.navigate(&path);
                self.render(&outcome);
            }
            Command::Home => {
                let outcome = self.navigate("/");
                self.render(&outcome);
            }
            Command::Menu => self.print_menu(),
            Command::Whoami => match self.sessions.current_session() {
                Some(session) => {
                    println!("{} <{}> ({})", session.name, session.email, session.role.label());
                    println!("Signed in at {}", session.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
                }
                None => println!("Not signed in."),
            },
            Command::Logout => {
                self.sessions.logout();
                self.location = Location::Login;
                println!("Signed out.");
            }
            Command::Help => print_help(),
            Command::Quit => return Flow::Exit,
        }
        Flow::Continue
    }

    /// Sends a navigation through the gate and records where it ended up.
    pub fn navigate(&mut self, path: &str) -> Navigation {
        let outcome = self.gate.land(self.sessions.current_session(), path);
        debug!(requested = %path, location = %outcome.location(), "Navigated");
        self.location = outcome.location();
        outcome
    }

    /// The current location.
    pub fn location(&self) -> Location {
        self.location
    }

    /// The session holder.
    pub fn sessions(&self) -> &SessionHolder {
        &self.sessions
    }

    fn login_screen(&mut self) -> Result<Flow, AppError> {
        println!();
        println!("== {} ==", Screen::Login.title());

        let mut choices: Vec<LoginChoice> =
            UserRole::ALL.into_iter().map(LoginChoice::Role).collect();
        choices.push(LoginChoice::Quit);

        let picked = Select::new()
            .with_prompt("Role")
            .items(&choices)
            .default(0)
            .interact()
            .map_err(input_error)?;

        let role = match choices[picked] {
            LoginChoice::Role(role) => role,
            LoginChoice::Quit => return Ok(Flow::Exit),
        };

        let email: String = Input::new()
            .with_prompt("Email")
            .allow_empty(true)
            .interact_text()
            .map_err(input_error)?;
        let password = Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()
            .map_err(input_error)?;

        match self.submit_login(&LoginRequest::new(email, password, role)) {
            Ok(landing) => self.render(&landing),
            Err(e) => println!("{}", e.message),
        }

        Ok(Flow::Continue)
    }

    fn prompt_command(&mut self) -> Result<Flow, AppError> {
        let line: String = Input::new()
            .with_prompt(format!("campus {}", self.location))
            .allow_empty(true)
            .interact_text()
            .map_err(input_error)?;

        match Command::parse(&line) {
            Ok(command) => Ok(self.dispatch(command)),
            Err(message) => {
                println!("{}", message);
                Ok(Flow::Continue)
            }
        }
    }

    fn render(&self, outcome: &Navigation) {
        let Navigation::Render { screen, rest, .. } = outcome else {
            // `land` already followed the redirect; nothing left to render.
            return;
        };

        println!();
        match rest {
            Some(rest) => println!("== {} / {} ==", screen, rest),
            None => println!("== {} ==", screen),
        }

        if let Screen::Dashboard(role) = screen {
            for shortcut in self.gate.enforcer().dashboard_shortcuts(role) {
                println!(
                    "  {:<24} {:<20} {}",
                    shortcut.title,
                    shortcut.route.path(),
                    shortcut.description
                );
            }
        }
        self.print_menu();
    }

    fn print_menu(&self) {
        let Some(session) = self.sessions.current_session() else {
            return;
        };

        let entries: Vec<String> = self
            .gate
            .enforcer()
            .menu_for(&session.role)
            .into_iter()
            .map(|entry| {
                let marker = if Location::Route(entry.route) == self.location { "*" } else { "" };
                format!("{}{} ({})", marker, entry.label, entry.route.path())
            })
            .collect();

        println!("[{}]  {}", session.name, entries.join("  "));
    }
}

fn print_help() {
    println!("  go <path> | /<path>   open a screen");
    println!("  home                  back to the dashboard");
    println!("  menu                  show the navigation menu");
    println!("  whoami                show the current session");
    println!("  logout                sign out");
    println!("  quit                  leave the application");
}

fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_entity::route::Route;

    fn shell() -> Shell {
        Shell::new(SessionHolder::demo(), NavigationGate::default())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/courses/1"), Ok(Command::Go("/courses/1".to_string())));
        assert_eq!(Command::parse("go  chat "), Ok(Command::Go("chat".to_string())));
        assert_eq!(Command::parse("LOGOUT"), Ok(Command::Logout));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
        assert!(Command::parse("go").is_err());
        assert!(Command::parse("").is_err());
        assert!(Command::parse("dance").is_err());
    }

    #[test]
    fn test_login_lands_on_dashboard() {
        let mut shell = shell();
        let landing = shell
            .submit_login(&LoginRequest::new("a@b.com", "x", UserRole::Student))
            .unwrap();
        assert_eq!(landing.location(), Location::Route(Route::Dashboard));
        assert_eq!(shell.location(), Location::Route(Route::Dashboard));
    }

    #[test]
    fn test_failed_login_stays_on_login_screen() {
        let mut shell = shell();
        assert!(shell
            .submit_login(&LoginRequest::new("a@b.com", "", UserRole::Student))
            .is_err());
        assert_eq!(shell.location(), Location::Login);
        assert!(!shell.sessions().is_authenticated());
    }

    #[test]
    fn test_forbidden_navigation_returns_to_dashboard() {
        let mut shell = shell();
        shell
            .submit_login(&LoginRequest::new("t@school.test", "x", UserRole::Teacher))
            .unwrap();
        shell.navigate("/quizzes");
        assert_eq!(shell.location(), Location::Route(Route::Quizzes));
        shell.navigate("/payments/salaries");
        assert_eq!(shell.location(), Location::Route(Route::Dashboard));
    }

    #[test]
    fn test_logout_returns_to_login() {
        let mut shell = shell();
        shell
            .submit_login(&LoginRequest::new("a@b.com", "x", UserRole::Admin))
            .unwrap();
        assert_eq!(shell.dispatch(Command::Logout), Flow::Continue);
        assert_eq!(shell.location(), Location::Login);
        assert_eq!(shell.navigate("/users").location(), Location::Login);
        assert_eq!(shell.dispatch(Command::Quit), Flow::Exit);
    }
}
