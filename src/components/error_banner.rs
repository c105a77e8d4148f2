use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Height the banner needs: borders plus one line of text
pub const BANNER_HEIGHT: u16 = 3;

/// Red-bordered box showing a form's failure message
pub struct ErrorBanner;

impl ErrorBanner {
    pub fn render(frame: &mut Frame, area: Rect, message: &str) -> Result<()> {
        let t = theme();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Error ")
            .title_alignment(Alignment::Left)
            .border_style(t.error_style())
            .padding(ratatui::widgets::Padding::new(1, 1, 0, 0));

        let paragraph = Paragraph::new(message)
            .style(t.error_style())
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(paragraph, area);
        Ok(())
    }
}
