//! Screen trait and associated types.
//!
//! Screens own their state, draw themselves inside the shell chrome, and
//! answer input with a [`ScreenAction`] instead of mutating app state.

use crate::auth::PendingSubmit;
use crate::config::Config;
use crate::router::Route;
use crate::session::SessionStore;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Read-only resources available while rendering.
pub struct RenderContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Current session, for auth-aware pages.
    pub session: &'a SessionStore,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, session: &'a SessionStore) -> Self {
        Self { config, session }
    }
}

/// Read-only resources available while handling events.
pub struct ScreenContext<'a> {
    /// Application configuration (keymap included).
    pub config: &'a Config,
    pub session: &'a SessionStore,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, session: &'a SessionStore) -> Self {
        Self { config, session }
    }
}

/// What a screen wants the app to do after an event.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenAction {
    /// Stay on the current screen.
    #[default]
    None,
    /// Change the current route.
    Navigate(Route),
    /// Send a form submission to the API.
    Submit(PendingSubmit),
    /// Clear the stored session.
    Logout,
    /// Leave the application.
    Quit,
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// struct MyScreen;
///
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::Navigate(Route::Home))
///     }
/// }
/// ```
pub trait Screen {
    /// Render the page body into `area` (chrome is drawn by the app).
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event the app did not consume as a global key.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    ///
    /// When true, single-letter global bindings are disabled so users can type freely.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Key hints for the footer.
    fn footer_text(&self, ctx: &RenderContext) -> String {
        ctx.config.keymap.footer_navigation()
    }

    /// Called when the screen is entered (navigated to).
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Called when the screen is exited (navigated away from).
    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
