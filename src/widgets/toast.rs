//! Toast notification widget.
//!
//! A non-blocking notification that appears in the bottom-right corner of the
//! screen and closes by itself. Used for the one-shot confirmation after a
//! successful login or registration.

use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};
use std::time::{Duration, Instant};

/// How long a toast stays up unless told otherwise
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Error,
}

impl ToastVariant {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "\u{2714}", // ✔
            ToastVariant::Info => "\u{2139}",    // ℹ
            ToastVariant::Error => "\u{2718}",   // ✘
        }
    }

    fn border_style(&self) -> Style {
        let t = theme();
        match self {
            ToastVariant::Success => t.success_style(),
            ToastVariant::Info => t.border_focused_style(),
            ToastVariant::Error => t.error_style(),
        }
    }
}

/// Toast notification data
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            message: message.into(),
            variant,
            created_at: Instant::now(),
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Renders one toast in the bottom-right corner of the given area
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn calculate_area(&self, area: Rect) -> Rect {
        let width = 40u16.min(area.width.saturating_sub(4));
        let height = 3u16.min(area.height);

        // Keep clear of the footer
        let x = area.x + area.width.saturating_sub(width + 2);
        let y = area.y + area.height.saturating_sub(height + 3);

        Rect::new(x, y, width, height)
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = self.calculate_area(area);
        if toast_area.width < 3 || toast_area.height < 3 {
            return;
        }
        let t = theme();

        Widget::render(Clear, toast_area, buf);

        let message = format!(" {} {} ", self.toast.variant.icon(), self.toast.message);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.toast.variant.border_style())
            .style(t.background_style());

        let paragraph = Paragraph::new(message)
            .block(block)
            .style(t.text_style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });

        Widget::render(paragraph, toast_area, buf);
    }
}

/// Holds at most one toast at a time
#[derive(Debug, Default)]
pub struct ToastManager {
    current: Option<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Show a toast, replacing any existing one
    pub fn push(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Toast::success(message));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::info(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Toast::error(message));
    }

    /// Drop an expired toast; returns whether one is still showing
    pub fn tick(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Toast::is_expired) {
            self.current = None;
        }
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast), area);
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_toast_replaces_old() {
        let mut toasts = ToastManager::new();
        toasts.info("first");
        toasts.success("User created successfully");

        let current = toasts.current().unwrap();
        assert_eq!(current.message, "User created successfully");
        assert_eq!(current.variant, ToastVariant::Success);
        assert!(toasts.tick());
    }

    #[test]
    fn test_expired_toast_is_dropped() {
        let mut toasts = ToastManager::new();
        toasts.push(Toast::error("gone").with_duration(Duration::ZERO));
        assert!(!toasts.tick());
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_render_in_tiny_area_does_not_panic() {
        let toast = Toast::success("User logged in successfully");
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        ToastWidget::new(&toast).render(area, &mut buf);
    }
}
