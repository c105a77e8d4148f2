use crate::keymap::Action;
use crate::router::Route;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::center_rect;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

/// Landing page showing whether a session is stored
#[derive(Debug, Default)]
pub struct HomeScreen;

impl HomeScreen {
    pub fn new() -> Self {
        Self
    }

    fn lines(ctx: &RenderContext) -> Vec<Line<'static>> {
        let t = theme();
        let keymap = &ctx.config.keymap;

        let mut lines = vec![
            Line::styled(format!("Welcome to {}", ctx.config.brand), t.title_style()),
            Line::raw(""),
        ];

        if ctx.session.is_authenticated() {
            let since = ctx
                .session
                .saved_at()
                .map(|at| format!(" since {}", at.format("%Y-%m-%d %H:%M UTC")))
                .unwrap_or_default();
            lines.push(Line::styled(format!("You are signed in{}.", since), t.success_style()));
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                format!("Press {} to log out.", keymap.key_display(Action::Logout)),
                t.muted_style(),
            ));
        } else {
            lines.push(Line::styled("You are not signed in.", t.text_style()));
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                format!(
                    "Press {} to log in or {} to create an account.",
                    keymap.key_display(Action::GoLogin),
                    keymap.key_display(Action::GoRegister),
                ),
                t.muted_style(),
            ));
        }

        lines
    }
}

impl Screen for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let card_area = center_rect(area, 60, 9);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style())
            .title(" Home ")
            .title_alignment(Alignment::Center)
            .padding(Padding::new(2, 2, 1, 1));

        let paragraph = Paragraph::new(Self::lines(ctx))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, card_area);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                let action = ctx.config.keymap.get_action(key.code, key.modifiers);
                if action == Some(Action::Confirm) && !ctx.session.is_authenticated() {
                    return Ok(ScreenAction::Navigate(Route::Login));
                }
            }
        }
        Ok(ScreenAction::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::session::{Session, SessionStore};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn text(lines: &[Line]) -> String {
        lines.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_lines_follow_session() {
        let config = Config::default();
        let mut session = SessionStore::in_memory();
        assert!(text(&HomeScreen::lines(&RenderContext::new(&config, &session)))
            .contains("not signed in"));

        session
            .store(&Session {
                access_token: "AT1".into(),
                refresh_token: "RT1".into(),
            })
            .unwrap();
        let signed_in = text(&HomeScreen::lines(&RenderContext::new(&config, &session)));
        assert!(signed_in.contains("You are signed in since"));
        assert!(signed_in.contains("Alt+O"));
    }

    #[test]
    fn test_enter_opens_login_when_signed_out() {
        let config = Config::default();
        let session = SessionStore::in_memory();
        let ctx = ScreenContext::new(&config, &session);
        let action = HomeScreen::new()
            .handle_event(Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)), &ctx)
            .unwrap();
        assert_eq!(action, ScreenAction::Navigate(Route::Login));
    }
}
