//! Command-line interface.
//!
//! Without a subcommand the TUI starts; the subcommands run one account
//! operation and exit.

pub mod account;
mod common;
pub mod completions;

pub use common::*;

use crate::auth::{LoginFlow, RegisterFlow};
use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use tracing::info;

/// Register and sign in to an account service from the terminal
#[derive(Parser, Debug)]
#[command(name = "portal", version, about = "Register and sign in to an account service from the terminal", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the account API (overrides PORTAL_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Page to open the TUI on (/, /register, /login)
    #[arg(long, default_value = "/", value_name = "PATH")]
    pub route: String,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: String,
        /// Defaults to the password
        #[arg(long)]
        password_confirm: Option<String>,
    },
    /// Sign in and store the session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show whether a session is stored
    Status,
    /// Shows logs location
    Logs,
    /// Configuration file location
    Config,
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL if omitted)
        #[arg(value_enum)]
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Execute the CLI command. Returns false when the command failed.
    pub fn execute(self) -> Result<bool> {
        let Some(command) = self.command else {
            // No command: the caller launches the TUI
            return Ok(true);
        };

        match command {
            Commands::Register {
                username,
                email,
                password,
                password_confirm,
            } => {
                info!("CLI: register command executed");
                let mut ctx = CliContext::load(self.api_url)?;
                let confirm = password_confirm.unwrap_or_else(|| password.clone());
                let values = [
                    ("username", username.as_str()),
                    ("email", email.as_str()),
                    ("password", password.as_str()),
                    ("password_confirm", confirm.as_str()),
                ];
                let runtime = tokio::runtime::Runtime::new()?;
                let (outcome, form) =
                    runtime.block_on(account::submit_form::<RegisterFlow>(&mut ctx, &values));
                Ok(account::report(&outcome, &form))
            }
            Commands::Login { email, password } => {
                info!("CLI: login command executed");
                let mut ctx = CliContext::load(self.api_url)?;
                let values = [("email", email.as_str()), ("password", password.as_str())];
                let runtime = tokio::runtime::Runtime::new()?;
                let (outcome, form) =
                    runtime.block_on(account::submit_form::<LoginFlow>(&mut ctx, &values));
                Ok(account::report(&outcome, &form))
            }
            Commands::Logout => {
                let mut ctx = CliContext::load(self.api_url)?;
                account::logout(&mut ctx)?;
                Ok(true)
            }
            Commands::Status => {
                let ctx = CliContext::load(self.api_url)?;
                account::status(&ctx);
                Ok(true)
            }
            Commands::Logs => {
                println!("{}", crate::utils::get_log_path().display());
                Ok(true)
            }
            Commands::Config => {
                println!("{}", crate::utils::get_config_path().display());
                Ok(true)
            }
            Commands::Completions { shell } => {
                completions::generate(shell)?;
                Ok(true)
            }
        }
    }
}
