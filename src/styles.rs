//! Theme palette and style helpers
//!
//! One global theme, chosen from config at startup. Style helpers return
//! modifier-only styles in no-color mode so nothing emits color codes.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};

static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Install the global theme (call once at startup)
pub fn init_theme(theme_type: ThemeType) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Theme type selector, as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (also forced by `NO_COLOR`)
    #[serde(alias = "nocolor", alias = "no-color")]
    NoColor,
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,
    /// Brand, titles, focused borders, active nav link
    pub primary: Color,
    pub success: Color,
    pub error: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub background: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            background: Color::Reset,
        }
    }

    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            border: Color::Gray,
            background: Color::Reset,
        }
    }

    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            success: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            border: Color::Reset,
            background: Color::Reset,
        }
    }

    fn plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    pub fn title_style(&self) -> Style {
        if self.plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        if self.plain() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        if self.plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn success_style(&self) -> Style {
        if self.plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.success)
    }

    pub fn error_style(&self) -> Style {
        if self.plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.error)
    }

    pub fn border_focused_style(&self) -> Style {
        if self.plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.primary)
    }

    pub fn border_style(&self) -> Style {
        if self.plain() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Active link in the nav bar
    pub fn nav_active_style(&self) -> Style {
        if self.plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Submit button while a request is in flight
    pub fn disabled_style(&self) -> Style {
        if self.plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn background_style(&self) -> Style {
        if self.plain() {
            return Style::default();
        }
        Style::default().bg(self.background)
    }
}
