//! Key bindings: parse strings like `"alt+l"`, `"shift+tab"` or `"enter"`
//! into crossterm key codes and match them against key events.

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "enter", "alt+l", "shift+tab")
    pub key: String,

    /// The action this key triggers
    pub action: Action,
}

/// Error returned for key strings that cannot be parsed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

/// Parsed key representation for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl ParsedKey {
    /// Terminals report Shift+Tab as `BackTab` and shifted letters as the
    /// uppercase char; drop SHIFT in both cases so bindings compare equal.
    fn normalized(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::BackTab | KeyCode::Char(_) => Self {
                code,
                modifiers: modifiers.difference(KeyModifiers::SHIFT),
            },
            _ => Self { code, modifiers },
        }
    }
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
        }
    }

    /// Check if this binding matches the given key event
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.parse()
            .is_ok_and(|parsed| parsed == ParsedKey::normalized(code, modifiers))
    }

    pub fn parse(&self) -> Result<ParsedKey, KeyParseError> {
        parse_key_string(&self.key)
    }

    /// Display string for footers and help (e.g. "Alt+L")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }
}

/// Parse a key string like "ctrl+shift+n" into a normalized [`ParsedKey`]
pub fn parse_key_string(key: &str) -> Result<ParsedKey, KeyParseError> {
    let key = key.trim().to_lowercase();
    let (mods, key_part) = match key.rsplit_once('+') {
        // "+" on its own, or "ctrl++"
        Some((rest, "")) => (rest.trim_end_matches('+'), "+"),
        Some((mods, key_part)) => (mods, key_part),
        None => ("", key.as_str()),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in mods.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        modifiers |= match part {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" => KeyModifiers::SUPER,
            other => return Err(KeyParseError::UnknownModifier(other.to_string())),
        };
    }

    let mut code = parse_key_code(key_part.trim())?;
    if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
        code = KeyCode::BackTab;
    }
    Ok(ParsedKey::normalized(code, modifiers))
}

fn parse_key_code(key: &str) -> Result<KeyCode, KeyParseError> {
    let code = match key {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        f if f.len() > 1 && f.starts_with('f') => f[1..]
            .parse::<u8>()
            .map(KeyCode::F)
            .map_err(|_| KeyParseError::UnknownKey(key.to_string()))?,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(KeyParseError::UnknownKey(key.to_string())),
            }
        }
    };
    Ok(code)
}

/// Format a key string for display (e.g., "alt+l" -> "Alt+L")
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| match part.trim().to_lowercase().as_str() {
            "ctrl" | "control" => "Ctrl".to_string(),
            "alt" | "option" => "Alt".to_string(),
            "shift" => "Shift".to_string(),
            "super" | "meta" | "cmd" => "Cmd".to_string(),
            "left" => "←".to_string(),
            "right" => "→".to_string(),
            "enter" | "return" => "Enter".to_string(),
            "esc" | "escape" => "Esc".to_string(),
            "tab" => "Tab".to_string(),
            "backspace" | "bs" => "Backspace".to_string(),
            "delete" | "del" => "Del".to_string(),
            "home" => "Home".to_string(),
            "end" => "End".to_string(),
            other => other.to_uppercase(),
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alt_key() {
        let parsed = parse_key_string("alt+l").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('l'));
        assert_eq!(parsed.modifiers, KeyModifiers::ALT);
    }

    #[test]
    fn test_shift_tab_becomes_backtab() {
        let parsed = parse_key_string("shift+tab").unwrap();
        assert_eq!(parsed.code, KeyCode::BackTab);
        assert_eq!(parsed.modifiers, KeyModifiers::NONE);

        let binding = KeyBinding::new("shift+tab", Action::PrevField);
        assert!(binding.matches(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::BackTab, KeyModifiers::NONE));
    }

    #[test]
    fn test_function_and_special_keys() {
        assert_eq!(parse_key_string("f5").unwrap().code, KeyCode::F(5));
        assert_eq!(parse_key_string("enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string("?").unwrap().code, KeyCode::Char('?'));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_key_string("hyper+x"),
            Err(KeyParseError::UnknownModifier("hyper".to_string()))
        );
        assert_eq!(
            parse_key_string("banana"),
            Err(KeyParseError::UnknownKey("banana".to_string()))
        );
    }

    #[test]
    fn test_matches_respects_modifiers() {
        let binding = KeyBinding::new("ctrl+c", Action::ForceQuit);
        assert!(binding.matches(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!binding.matches(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!binding.matches(KeyCode::Char('x'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key_display("alt+l"), "Alt+L");
        assert_eq!(format_key_display("ctrl+c"), "Ctrl+C");
        assert_eq!(format_key_display("shift+tab"), "Shift+Tab");
        assert_eq!(format_key_display("enter"), "Enter");
    }
}
