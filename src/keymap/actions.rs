//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Cursor movement ============
    /// Move the cursor left
    MoveLeft,
    /// Move the cursor right
    MoveRight,
    /// Jump to start of input
    Home,
    /// Jump to end of input
    End,

    // ============ Form ============
    /// Submit the form (Enter)
    Confirm,
    /// Cancel / go back (Esc)
    Cancel,
    /// Focus the next field
    NextField,
    /// Focus the previous field
    PrevField,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,

    // ============ Navigation shell ============
    /// Go to the home page
    GoHome,
    /// Go to the registration form
    GoRegister,
    /// Go to the login form
    GoLogin,
    /// Clear the stored session
    Logout,

    // ============ Global ============
    /// Quit (suppressed while typing)
    Quit,
    /// Quit even while an input has focus
    ForceQuit,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveLeft => "Cursor left",
            Action::MoveRight => "Cursor right",
            Action::Home => "Start of field",
            Action::End => "End of field",
            Action::Confirm => "Submit",
            Action::Cancel => "Back",
            Action::NextField => "Next field",
            Action::PrevField => "Previous field",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::GoHome => "Home",
            Action::GoRegister => "Register",
            Action::GoLogin => "Login",
            Action::Logout => "Logout",
            Action::Quit => "Quit",
            Action::ForceQuit => "Quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            action: Action,
        }
        let parsed: Wrapper = toml::from_str("action = \"go_register\"").unwrap();
        assert_eq!(parsed.action, Action::GoRegister);
    }

    #[test]
    fn test_descriptions_are_not_empty() {
        for action in [Action::Confirm, Action::NextField, Action::Logout] {
            assert!(!action.description().is_empty());
        }
    }
}
