use crate::auth::FieldView;
use crate::styles::theme;
use crate::utils::text_input::MASK_CHAR;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Height of one input: borders plus a single text row
pub const INPUT_HEIGHT: u16 = 3;

/// Labelled single-line text input
pub struct InputField;

impl InputField {
    /// Render a form field with cursor positioning
    ///
    /// # Arguments
    /// * `frame` - The frame to render to
    /// * `area` - The area to render the input in
    /// * `field` - Label, value and error hint of the field
    /// * `focused` - Whether the input is focused (draws the cursor)
    /// * `disabled` - Whether the form is busy submitting
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        field: &FieldView,
        focused: bool,
        disabled: bool,
    ) -> Result<()> {
        let t = theme();

        let display_text = if field.value.is_empty() {
            field.placeholder.to_string()
        } else if field.secret {
            std::iter::repeat(MASK_CHAR)
                .take(field.value.chars().count())
                .collect()
        } else {
            field.value.clone()
        };

        let border_style = if field.error.is_some() {
            t.error_style()
        } else if disabled {
            t.disabled_style()
        } else if focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };

        let text_style = if disabled {
            t.disabled_style()
        } else if field.value.is_empty() {
            t.muted_style()
        } else {
            t.text_style()
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", field.label))
            .title_alignment(Alignment::Left)
            .border_style(border_style);
        if let Some(error) = &field.error {
            block = block.title_bottom(Line::styled(format!(" {} ", error), t.error_style()));
        }

        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(display_text).block(block).style(text_style), area);

        if focused && !disabled {
            let cursor = field.cursor.min(field.value.chars().count());
            let x = inner.x + cursor.min(inner.width.saturating_sub(1) as usize) as u16;
            frame.set_cursor_position((x, inner.y));
        }

        Ok(())
    }
}
