//! Account forms: login and registration.
//!
//! [`AuthFormController`] owns the field values and submission state of one
//! form. The [`AuthFlow`] implementations supply what differs between the
//! two forms.

mod controller;
mod error;
mod flow;
mod view;

pub use controller::{AuthFormController, FormSubmissionState, PendingSubmit, SubmitOutcome};
pub use error::{parse_field_errors, FieldError, SubmitFailure};
pub use flow::{AuthFlow, Credentials, FieldSpec, FormFields, LoginFlow, LoginRequest, RegisterFlow};
pub use view::{FieldView, FormView};

pub type LoginForm = AuthFormController<LoginFlow>;
pub type RegisterForm = AuthFormController<RegisterFlow>;
