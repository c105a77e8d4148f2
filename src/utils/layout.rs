use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the nav bar (borders + one row of links)
pub const NAV_HEIGHT: u16 = 3;
/// Height of the footer (top border + one row of hints)
pub const FOOTER_HEIGHT: u16 = 2;

/// Split the screen into nav bar, page body and footer
pub fn create_shell_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// A `width` x `height` rect centered in `area`, clamped to fit
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_layout_heights() {
        let (nav, body, footer) = create_shell_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(nav.height, NAV_HEIGHT);
        assert_eq!(footer.height, FOOTER_HEIGHT);
        assert_eq!(body.height, 24 - NAV_HEIGHT - FOOTER_HEIGHT);
        assert_eq!(body.y, NAV_HEIGHT);
    }

    #[test]
    fn test_center_rect_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(center_rect(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(center_rect(area, 100, 100), area);
    }
}
