//! Account commands: register, login, logout, status.
//!
//! Register and login drive the same form controller as the TUI, so the
//! request bodies, success rule and messages are identical.

use super::common::{print_error, print_info, print_success, CliContext};
use crate::auth::{AuthFlow, AuthFormController, FormSubmissionState, SubmitOutcome};
use anyhow::{Context, Result};
use tracing::info;

/// Fill a fresh form with `values`, submit it and wait for the outcome
pub async fn submit_form<F: AuthFlow>(
    ctx: &mut CliContext,
    values: &[(&str, &str)],
) -> (SubmitOutcome, AuthFormController<F>) {
    let mut form = AuthFormController::<F>::new();
    for (name, value) in values {
        form.update_field(name, *value);
    }
    let outcome = form.submit_with(&ctx.api, &mut ctx.session).await;
    (outcome, form)
}

/// Print the result of a submission. Returns true on success.
pub fn report<F: AuthFlow>(outcome: &SubmitOutcome, form: &AuthFormController<F>) -> bool {
    match outcome {
        SubmitOutcome::Succeeded { confirmation, .. } => {
            print_success(confirmation);
            true
        }
        _ => {
            print_error(F::GENERIC_ERROR);
            if let FormSubmissionState::Failed(failure) = form.status() {
                for error in failure.field_errors() {
                    eprintln!("  {}: {}", error.field, error.message);
                }
            }
            false
        }
    }
}

pub fn logout(ctx: &mut CliContext) -> Result<()> {
    let was_signed_in = ctx.session.is_authenticated();
    ctx.session.clear_all().context("Failed to clear session")?;
    info!("CLI: logout (had session: {})", was_signed_in);

    if was_signed_in {
        print_success("Logged out");
    } else {
        print_info("No session to clear");
    }
    Ok(())
}

pub fn status(ctx: &CliContext) {
    if ctx.session.is_authenticated() {
        match ctx.session.saved_at() {
            Some(at) => print_success(&format!(
                "Signed in (session saved {})",
                at.format("%Y-%m-%d %H:%M:%S UTC")
            )),
            None => print_success("Signed in"),
        }
    } else {
        print_info("Not signed in");
    }
    println!("API: {}", ctx.api.base_url());
    if let Some(path) = ctx.session.path() {
        println!("Session file: {}", path.display());
    }
}
