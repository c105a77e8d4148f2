use crate::router::Route;
use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top navigation bar shared by every screen
pub struct NavBar;

impl NavBar {
    /// Render the brand, the route links and the account menu.
    ///
    /// `current` gets the active style. The account menu always lists
    /// Profile and Logout and tells whether a session is stored.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        brand: &str,
        current: &Route,
        signed_in: bool,
    ) -> Result<u16> {
        let t = theme();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style())
            .title(format!(" {} ", brand))
            .title_style(t.title_style())
            .padding(ratatui::widgets::Padding::new(1, 1, 0, 0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut links = Vec::new();
        for (i, route) in Route::nav_links().iter().enumerate() {
            if i > 0 {
                links.push(Span::raw("  "));
            }
            let style = if route == current {
                t.nav_active_style()
            } else {
                t.text_style()
            };
            links.push(Span::styled(route.title(), style));
        }

        let status = if signed_in {
            Span::styled("\u{25CF} signed in", t.success_style())
        } else {
            Span::styled("\u{25CB} signed out", t.muted_style())
        };
        let account = Line::from(vec![
            Span::styled("My Account: ", t.muted_style()),
            Span::styled("Profile", t.text_style()),
            Span::styled(" \u{00B7} ", t.muted_style()),
            Span::styled("Logout", t.text_style()),
            Span::raw("  "),
            status,
        ]);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(account.width() as u16),
            ])
            .split(inner);

        frame.render_widget(Paragraph::new(Line::from(links)), chunks[0]);
        frame.render_widget(
            Paragraph::new(account).alignment(Alignment::Right),
            chunks[1],
        );

        Ok(area.height)
    }
}
