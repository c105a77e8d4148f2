//! Login and registration screens.
//!
//! Both are one generic screen around [`AuthFormController`]; the flow type
//! decides the fields, endpoint and messages.

use crate::api::{ApiError, ApiResponse};
use crate::auth::{AuthFlow, AuthFormController, LoginFlow, RegisterFlow, SubmitOutcome};
use crate::components::error_banner::BANNER_HEIGHT;
use crate::components::input_field::INPUT_HEIGHT;
use crate::components::{ErrorBanner, InputField};
use crate::keymap::Action;
use crate::router::Route;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::session::SessionStore;
use crate::styles::theme;
use crate::utils::{center_rect, TextInput};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

const CARD_WIDTH: u16 = 64;
const BUTTON_HEIGHT: u16 = 3;

pub type LoginScreen = AuthFormScreen<LoginFlow>;
pub type RegisterScreen = AuthFormScreen<RegisterFlow>;

/// Form screen for one account flow
#[derive(Debug)]
pub struct AuthFormScreen<F: AuthFlow> {
    form: AuthFormController<F>,
    focus: usize,
}

impl<F: AuthFlow> Default for AuthFormScreen<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: AuthFlow> AuthFormScreen<F> {
    pub fn new() -> Self {
        Self {
            form: AuthFormController::new(),
            focus: 0,
        }
    }

    pub fn form(&self) -> &AuthFormController<F> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AuthFormController<F> {
        &mut self.form
    }

    /// Index of the focused field
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Hand the API result of the pending submission to the form
    pub fn finish(
        &mut self,
        result: Result<ApiResponse, ApiError>,
        session: &mut SessionStore,
    ) -> SubmitOutcome {
        let outcome = self.form.finish(result, session);
        if matches!(outcome, SubmitOutcome::Succeeded { .. }) {
            self.focus = 0;
        }
        outcome
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.focus = 0;
    }

    fn focused_name(&self) -> &'static str {
        F::fields()[self.focus].name
    }

    fn move_focus(&mut self, forward: bool) {
        let count = F::fields().len();
        self.focus = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
    }

    fn card_height() -> u16 {
        // borders + padding + one row per input + banner + button
        4 + F::fields().len() as u16 * INPUT_HEIGHT + BANNER_HEIGHT + BUTTON_HEIGHT
    }
}

impl<F: AuthFlow> Screen for AuthFormScreen<F> {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let view = self.form.view();

        let card_area = center_rect(area, CARD_WIDTH, Self::card_height());
        let card = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", view.title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::new(2, 2, 1, 1));
        let inner = card.inner(card_area);
        frame.render_widget(card, card_area);

        let mut constraints = Vec::new();
        if view.banner.is_some() {
            constraints.push(Constraint::Length(BANNER_HEIGHT));
        }
        constraints.extend(view.fields.iter().map(|_| Constraint::Length(INPUT_HEIGHT)));
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);
        let mut slots = chunks.iter().copied();

        if let Some(banner) = view.banner {
            if let Some(slot) = slots.next() {
                ErrorBanner::render(frame, slot, banner)?;
            }
        }

        for (index, field) in view.fields.iter().enumerate() {
            if let Some(slot) = slots.next() {
                InputField::render(frame, slot, field, index == self.focus, false)?;
            }
        }

        if let Some(slot) = slots.next() {
            let (label, style) = if view.submit_enabled {
                (format!("[ {} ]", view.submit_label), t.title_style())
            } else {
                ("[ Submitting... ]".to_string(), t.disabled_style())
            };
            let button = Paragraph::new(label)
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(t.border_style()));
            frame.render_widget(button, slot);
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        let action = ctx
            .config
            .keymap
            .get_action(key.code, key.modifiers)
            .filter(TextInput::is_action_allowed_when_focused);

        match action {
            Some(Action::NextField) => self.move_focus(true),
            Some(Action::PrevField) => self.move_focus(false),
            Some(Action::Confirm) => {
                if let Some(pending) = self.form.submit() {
                    return Ok(ScreenAction::Submit(pending));
                }
            }
            Some(Action::Cancel) => return Ok(ScreenAction::Navigate(Route::Home)),
            Some(act) => {
                let name = self.focused_name();
                self.form.edit_field(name, |input| input.handle_action(act));
            }
            None => {
                if let KeyCode::Char(c) = key.code {
                    if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                        let name = self.focused_name();
                        self.form.edit_field(name, |input| {
                            input.insert_char(c);
                            true
                        });
                    }
                }
            }
        }

        Ok(ScreenAction::None)
    }

    fn is_input_focused(&self) -> bool {
        true
    }

    fn footer_text(&self, ctx: &RenderContext) -> String {
        ctx.config.keymap.footer_form()
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.reset();
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.reset();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::FormSubmissionState;
    use crate::config::Config;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text<F: AuthFlow>(screen: &mut AuthFormScreen<F>, ctx: &ScreenContext, text: &str) {
        for c in text.chars() {
            screen.handle_event(key(KeyCode::Char(c)), ctx).unwrap();
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let config = Config::default();
        let session = SessionStore::in_memory();
        let ctx = ScreenContext::new(&config, &session);
        let mut screen = LoginScreen::new();

        type_text(&mut screen, &ctx, "a@b.com");
        screen.handle_event(key(KeyCode::Tab), &ctx).unwrap();
        type_text(&mut screen, &ctx, "xq");
        screen.handle_event(key(KeyCode::Backspace), &ctx).unwrap();

        assert_eq!(screen.form().field("email"), Some("a@b.com"));
        assert_eq!(screen.form().field("password"), Some("x"));
    }

    #[test]
    fn test_quit_letter_types_into_field() {
        let config = Config::default();
        let session = SessionStore::in_memory();
        let ctx = ScreenContext::new(&config, &session);
        let mut screen = RegisterScreen::new();

        let action = screen.handle_event(key(KeyCode::Char('q')), &ctx).unwrap();
        assert_eq!(action, ScreenAction::None);
        assert_eq!(screen.form().field("username"), Some("q"));
    }

    #[test]
    fn test_focus_wraps() {
        let config = Config::default();
        let session = SessionStore::in_memory();
        let ctx = ScreenContext::new(&config, &session);
        let mut screen = LoginScreen::new();

        screen
            .handle_event(Event::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)), &ctx)
            .unwrap();
        assert_eq!(screen.focus(), 1);
        screen.handle_event(key(KeyCode::Tab), &ctx).unwrap();
        assert_eq!(screen.focus(), 0);
    }

    #[test]
    fn test_enter_submits_once() {
        let config = Config::default();
        let session = SessionStore::in_memory();
        let ctx = ScreenContext::new(&config, &session);
        let mut screen = LoginScreen::new();
        type_text(&mut screen, &ctx, "a@b.com");

        let first = screen.handle_event(key(KeyCode::Enter), &ctx).unwrap();
        let ScreenAction::Submit(pending) = first else {
            panic!("expected a submit action, got {:?}", first);
        };
        assert_eq!(pending.path, "/login/");
        assert_eq!(pending.body["email"], "a@b.com");

        let second = screen.handle_event(key(KeyCode::Enter), &ctx).unwrap();
        assert_eq!(second, ScreenAction::None);
        assert_eq!(screen.form().status(), &FormSubmissionState::Submitting);
    }

    #[test]
    fn test_leaving_resets_form() {
        let config = Config::default();
        let session = SessionStore::in_memory();
        let ctx = ScreenContext::new(&config, &session);
        let mut screen = LoginScreen::new();
        type_text(&mut screen, &ctx, "a@b.com");
        screen.handle_event(key(KeyCode::Enter), &ctx).unwrap();

        screen.on_exit(&ctx).unwrap();
        assert_eq!(screen.form().status(), &FormSubmissionState::Idle);
        assert_eq!(screen.form().field("email"), Some(""));
    }

    #[test]
    fn test_escape_goes_home() {
        let config = Config::default();
        let session = SessionStore::in_memory();
        let ctx = ScreenContext::new(&config, &session);
        let mut screen = RegisterScreen::new();

        let action = screen.handle_event(key(KeyCode::Esc), &ctx).unwrap();
        assert_eq!(action, ScreenAction::Navigate(Route::Home));
    }
}
