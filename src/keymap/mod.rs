//! Keymap configuration module
//!
//! Maps key events to semantic [`Action`]s using a preset plus optional
//! user overrides from the config file.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, KeyParseError, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// All effective bindings. An overridden action loses every preset binding.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|preset| !self.overrides.iter().any(|o| o.action == preset.action)),
        );
        bindings
    }

    /// Display string of the first key bound to `action`
    pub fn key_display(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map_or_else(|| format!("{:?}", action), KeyBinding::display)
    }

    /// Footer hints for the form screens
    pub fn footer_form(&self) -> String {
        format!(
            "{}: Next field | {}: Submit | {}: Home | {}: Quit",
            self.key_display(Action::NextField),
            self.key_display(Action::Confirm),
            self.key_display(Action::GoHome),
            self.key_display(Action::ForceQuit),
        )
    }

    /// Footer hints for the pages without inputs
    pub fn footer_navigation(&self) -> String {
        format!(
            "{}: Register | {}: Login | {}: Logout | {}: Quit",
            self.key_display(Action::GoRegister),
            self.key_display(Action::GoLogin),
            self.key_display(Action::Logout),
            self.key_display(Action::Quit),
        )
    }
}
