//! Preset keymaps: Standard and Emacs
//!
//! Each preset binds every action; the navigation shell keys are shared.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Tab, Enter, Esc
    #[default]
    Standard,
    /// Readline-style editing (Ctrl+A/E/B/F/D, Ctrl+N/P between fields)
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        };
        bindings.extend(shell_bindings());
        bindings
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

fn shell_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("alt+h", Action::GoHome),
        KeyBinding::new("alt+r", Action::GoRegister),
        KeyBinding::new("alt+l", Action::GoLogin),
        KeyBinding::new("alt+o", Action::Logout),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::ForceQuit),
    ]
}

fn standard_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("tab", Action::NextField),
        KeyBinding::new("down", Action::NextField),
        KeyBinding::new("shift+tab", Action::PrevField),
        KeyBinding::new("up", Action::PrevField),
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
    ]
}

fn emacs_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("ctrl+a", Action::Home),
        KeyBinding::new("ctrl+e", Action::End),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("ctrl+m", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("ctrl+g", Action::Cancel),
        KeyBinding::new("ctrl+n", Action::NextField),
        KeyBinding::new("tab", Action::NextField),
        KeyBinding::new("ctrl+p", Action::PrevField),
        KeyBinding::new("shift+tab", Action::PrevField),
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("ctrl+h", Action::Backspace),
        KeyBinding::new("ctrl+d", Action::DeleteChar),
        KeyBinding::new("delete", Action::DeleteChar),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_binding_parses() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Emacs] {
            for binding in preset.bindings() {
                assert!(
                    binding.parse().is_ok(),
                    "{} preset has unparsable key {}",
                    preset.name(),
                    binding.key
                );
            }
        }
    }

    #[test]
    fn test_every_preset_binds_submit_and_shell_keys() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Emacs] {
            let bindings = preset.bindings();
            for action in [
                Action::Confirm,
                Action::NextField,
                Action::PrevField,
                Action::GoHome,
                Action::GoLogin,
                Action::GoRegister,
                Action::ForceQuit,
            ] {
                assert!(bindings.iter().any(|b| b.action == action));
            }
        }
    }
}
