//! Portal - a terminal client for account registration and login
//!
//! This library provides the account form state machine, the HTTP client for
//! the account API, the local session store, and the TUI shell around them.

// Core modules
pub mod api;
pub mod app;
pub mod auth;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod router;
pub mod screens;
pub mod session;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use api::{ApiClient, ApiError, ApiResponse};
pub use auth::{AuthFormController, FormSubmissionState, LoginFlow, RegisterFlow, SubmitOutcome};
pub use config::Config;
pub use router::{Route, Router};
pub use session::{Session, SessionKey, SessionStore};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
