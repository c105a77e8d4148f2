use crate::keymap::Action;
use crate::router::Route;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::center_rect;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use indoc::indoc;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const BANNER: &str = indoc! {"
    ╦ ╦╔═╗╦ ╦
    ╚═╣║ ║╚═╣
      ╩╚═╝  ╩
"};

/// Shown for any path without a page
#[derive(Debug, Default)]
pub struct NotFoundScreen {
    path: String,
}

impl NotFoundScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Screen for NotFoundScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let mut lines: Vec<Line> = BANNER
            .lines()
            .map(|l| Line::styled(format!("{:<9}", l), t.error_style()))
            .collect();
        lines.extend([
            Line::raw(""),
            Line::styled(format!("No page at {}", self.path), t.text_style()),
            Line::styled(
                format!(
                    "Press {} to go home.",
                    ctx.config.keymap.key_display(Action::GoHome)
                ),
                t.muted_style(),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style())
            .title(" Not Found ")
            .title_alignment(Alignment::Center);
        frame.render_widget(
            Paragraph::new(lines).block(block).alignment(Alignment::Center),
            center_rect(area, 50, 8),
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                let action = ctx.config.keymap.get_action(key.code, key.modifiers);
                if matches!(action, Some(Action::Confirm | Action::Cancel)) {
                    return Ok(ScreenAction::Navigate(Route::Home));
                }
            }
        }
        Ok(ScreenAction::None)
    }
}
