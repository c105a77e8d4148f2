use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer component
pub struct Footer;

impl Footer {
    /// Render key hints such as `"Tab: Next field | Enter: Submit"`.
    ///
    /// Each `|`-separated part is split on `": "` so the key and its label
    /// can be styled separately.
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }

            if let Some((key, label)) = part.split_once(": ") {
                spans.push(Span::styled(
                    format!("{}: ", key),
                    t.title_style(),
                ));
                spans.push(Span::styled(label, t.text_style()));
            } else {
                spans.push(Span::styled(part, t.text_style()));
            }
        }

        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_style())
            .border_type(BorderType::Rounded)
            .style(t.background_style());

        let footer_inner = footer_block.inner(area);
        let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

        frame.render_widget(footer_block, area);
        frame.render_widget(footer, footer_inner);

        Ok(2) // 1 for border, 1 for text
    }
}
