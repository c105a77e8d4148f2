//! The two account flows sharing one form controller.
//!
//! A flow supplies its field layout, request body, messages, and what to do
//! with a successful response. Everything else lives in the controller.

use crate::api::ApiResponse;
use crate::session::{Session, SessionStore};
use crate::utils::TextInput;
use serde::Serialize;
use tracing::info;

use super::error::SubmitFailure;

/// Static description of one form input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the request body and in validation errors
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Rendered masked
    pub secret: bool,
}

impl FieldSpec {
    const fn plain(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder,
            secret: false,
        }
    }

    const fn secret(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder,
            secret: true,
        }
    }
}

/// Ordered field values of one form
#[derive(Debug, Clone)]
pub struct FormFields {
    entries: Vec<(FieldSpec, TextInput)>,
}

impl FormFields {
    pub fn new(specs: &[FieldSpec]) -> Self {
        Self {
            entries: specs.iter().map(|spec| (*spec, TextInput::new())).collect(),
        }
    }

    /// Current text of a field; unknown names read as empty
    pub fn value(&self, name: &str) -> &str {
        self.get(name).map_or("", TextInput::text)
    }

    pub fn get(&self, name: &str) -> Option<&TextInput> {
        self.entries
            .iter()
            .find(|(spec, _)| spec.name == name)
            .map(|(_, input)| input)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TextInput> {
        self.entries
            .iter_mut()
            .find(|(spec, _)| spec.name == name)
            .map(|(_, input)| input)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldSpec, &TextInput)> {
        self.entries.iter().map(|(spec, input)| (spec, input))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        for (_, input) in &mut self.entries {
            input.clear();
        }
    }
}

/// One account flow (login or registration)
pub trait AuthFlow: Send + Sync + 'static {
    /// Endpoint path under the API base URL
    const PATH: &'static str;
    const TITLE: &'static str;
    const SUBMIT_LABEL: &'static str;
    /// Banner text for every failure
    const GENERIC_ERROR: &'static str;
    /// One-shot message shown after success
    const CONFIRMATION: &'static str;

    type Request: Serialize;

    fn fields() -> &'static [FieldSpec];

    fn request(fields: &FormFields) -> Self::Request;

    /// Side effects of a 201 response
    fn on_success(response: &ApiResponse, session: &mut SessionStore) -> Result<(), SubmitFailure>;
}

/// Body of `POST /login/`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /register/`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoginFlow;

#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterFlow;

static LOGIN_FIELDS: [FieldSpec; 2] = [
    FieldSpec::plain("email", "Email address", "Enter email"),
    FieldSpec::secret("password", "Password", "Password"),
];

static REGISTER_FIELDS: [FieldSpec; 4] = [
    FieldSpec::plain("username", "Username", "Enter username"),
    FieldSpec::plain("email", "Email address", "Enter email"),
    FieldSpec::secret("password", "Password", "Password"),
    FieldSpec::secret("password_confirm", "Confirm Password", "Confirm Password"),
];

impl AuthFlow for LoginFlow {
    const PATH: &'static str = "/login/";
    const TITLE: &'static str = "Sign in to your account";
    const SUBMIT_LABEL: &'static str = "Login";
    const GENERIC_ERROR: &'static str = "Error while trying to login. Please try again later.";
    const CONFIRMATION: &'static str = "User logged in successfully";

    type Request = LoginRequest;

    fn fields() -> &'static [FieldSpec] {
        &LOGIN_FIELDS
    }

    fn request(fields: &FormFields) -> LoginRequest {
        LoginRequest {
            email: fields.value("email").to_string(),
            password: fields.value("password").to_string(),
        }
    }

    fn on_success(response: &ApiResponse, session: &mut SessionStore) -> Result<(), SubmitFailure> {
        let tokens: Session = serde_json::from_value(response.data.clone())
            .map_err(|e| SubmitFailure::MalformedResponse(e.to_string()))?;
        session
            .store(&tokens)
            .map_err(|e| SubmitFailure::Storage(format!("{:#}", e)))?;
        info!("Login succeeded, session stored");
        Ok(())
    }
}

impl AuthFlow for RegisterFlow {
    const PATH: &'static str = "/register/";
    const TITLE: &'static str = "Create an account";
    const SUBMIT_LABEL: &'static str = "Register Now";
    const GENERIC_ERROR: &'static str = "Error. Cannot register now. Please try again later.";
    const CONFIRMATION: &'static str = "User created successfully";

    type Request = Credentials;

    fn fields() -> &'static [FieldSpec] {
        &REGISTER_FIELDS
    }

    fn request(fields: &FormFields) -> Credentials {
        Credentials {
            username: fields.value("username").to_string(),
            email: fields.value("email").to_string(),
            password: fields.value("password").to_string(),
            password_confirm: fields.value("password_confirm").to_string(),
        }
    }

    // Tokens in the registration response are ignored; the user logs in separately.
    fn on_success(_response: &ApiResponse, _session: &mut SessionStore) -> Result<(), SubmitFailure> {
        info!("Registration succeeded");
        Ok(())
    }
}
