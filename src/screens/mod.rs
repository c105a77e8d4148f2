//! Screen controllers for the application.
//!
//! Each route has one screen. The app draws the nav bar and footer around
//! the active screen and routes key events to it.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │ NavBar   Home  Register  Login  My Account │
//! ├────────────────────────────────────────────┤
//! │  match router.current() {                  │
//! │    Home     => home.render(...)            │
//! │    Register => register.render(...)        │
//! │    Login    => login.render(...)           │
//! │    NotFound => not_found.render(...)       │
//! │  }                                         │
//! ├────────────────────────────────────────────┤
//! │ Footer (key hints)                         │
//! └────────────────────────────────────────────┘
//! ```

pub mod auth_form;
pub mod home;
pub mod not_found;
pub mod screen_trait;

pub use auth_form::{AuthFormScreen, LoginScreen, RegisterScreen};
pub use home::HomeScreen;
pub use not_found::NotFoundScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
