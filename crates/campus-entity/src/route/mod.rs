//! Navigable routes and the screens rendered for them.

pub mod path;
pub mod screen;

pub use path::{Route, RouteMatch};
pub use screen::Screen;
