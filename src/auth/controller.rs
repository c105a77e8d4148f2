use crate::api::{ApiClient, ApiError, ApiResponse};
use crate::router::Route;
use crate::session::SessionStore;
use crate::utils::TextInput;
use serde_json::Value;
use std::marker::PhantomData;
use tracing::{debug, info, warn};

use super::error::SubmitFailure;
use super::flow::{AuthFlow, FormFields};
use super::view::{FieldView, FormView};

/// Submission lifecycle of one form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormSubmissionState {
    #[default]
    Idle,
    Submitting,
    Failed(SubmitFailure),
}

/// A request the controller wants sent
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmit {
    pub path: &'static str,
    pub body: Value,
}

impl PendingSubmit {
    pub async fn send(self, api: &ApiClient) -> Result<ApiResponse, ApiError> {
        api.post(self.path, &self.body).await
    }
}

/// Result of handing a response back to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Navigate to `route` and show `confirmation` once
    Succeeded {
        route: Route,
        confirmation: &'static str,
    },
    Failed,
    /// No submission was in flight
    Ignored,
}

/// Form state machine shared by the login and registration screens
#[derive(Debug, Clone)]
pub struct AuthFormController<F: AuthFlow> {
    fields: FormFields,
    status: FormSubmissionState,
    _flow: PhantomData<F>,
}

impl<F: AuthFlow> Default for AuthFormController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: AuthFlow> AuthFormController<F> {
    pub fn new() -> Self {
        Self {
            fields: FormFields::new(F::fields()),
            status: FormSubmissionState::Idle,
            _flow: PhantomData,
        }
    }

    pub fn status(&self) -> &FormSubmissionState {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormSubmissionState::Submitting
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(TextInput::text)
    }

    /// Replace a field's value. Returns false for unknown names.
    ///
    /// Never touches the submission state, so a failure banner stays up
    /// while the user corrects the form.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.get_mut(name) {
            Some(input) => {
                input.set_text(value);
                true
            }
            None => false,
        }
    }

    /// Apply an in-place edit to one field
    pub fn edit_field(&mut self, name: &str, edit: impl FnOnce(&mut TextInput) -> bool) -> bool {
        self.fields.get_mut(name).is_some_and(edit)
    }

    /// Start a submission. Returns `None` while one is already in flight.
    pub fn submit(&mut self) -> Option<PendingSubmit> {
        if self.is_submitting() {
            debug!("{} submit ignored, request in flight", F::PATH);
            return None;
        }

        let body = serde_json::to_value(F::request(&self.fields)).unwrap_or_default();
        self.status = FormSubmissionState::Submitting;
        info!("Submitting {}", F::PATH);

        Some(PendingSubmit { path: F::PATH, body })
    }

    /// Finish the in-flight submission with its result
    pub fn finish(
        &mut self,
        result: Result<ApiResponse, ApiError>,
        session: &mut SessionStore,
    ) -> SubmitOutcome {
        if !self.is_submitting() {
            debug!("{} response ignored, nothing in flight", F::PATH);
            return SubmitOutcome::Ignored;
        }

        let failure = match result {
            Ok(response) if response.status == 201 => match F::on_success(&response, session) {
                Ok(()) => {
                    self.reset();
                    return SubmitOutcome::Succeeded {
                        route: Route::Home,
                        confirmation: F::CONFIRMATION,
                    };
                }
                Err(failure) => failure,
            },
            Ok(response) => SubmitFailure::from_response(&response, F::fields()),
            Err(err) => err.into(),
        };

        warn!("{} failed: {}", F::PATH, failure);
        self.status = FormSubmissionState::Failed(failure);
        SubmitOutcome::Failed
    }

    /// Submit, send and finish in one step
    pub async fn submit_with(&mut self, api: &ApiClient, session: &mut SessionStore) -> SubmitOutcome {
        let Some(pending) = self.submit() else {
            return SubmitOutcome::Ignored;
        };
        let result = pending.send(api).await;
        self.finish(result, session)
    }

    /// Back to a blank, idle form
    pub fn reset(&mut self) {
        self.fields.clear();
        self.status = FormSubmissionState::Idle;
    }

    pub fn view(&self) -> FormView {
        let failure = match &self.status {
            FormSubmissionState::Failed(failure) => Some(failure),
            _ => None,
        };

        FormView {
            title: F::TITLE,
            submit_label: F::SUBMIT_LABEL,
            fields: self
                .fields
                .iter()
                .map(|(spec, input)| FieldView {
                    name: spec.name,
                    label: spec.label,
                    placeholder: spec.placeholder,
                    value: input.text().to_string(),
                    cursor: input.cursor(),
                    secret: spec.secret,
                    error: failure
                        .and_then(|f| f.field_error(spec.name))
                        .map(str::to_string),
                })
                .collect(),
            banner: failure.map(|_| F::GENERIC_ERROR),
            submit_enabled: !self.is_submitting(),
        }
    }
}
