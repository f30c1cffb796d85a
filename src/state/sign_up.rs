//! Form state for the sign-up page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in an `RwSignal` by `SignUpForm`. Field edits and submits mutate it
//! synchronously; the `sign_up` call itself happens outside the signal so no
//! borrow is held across an await point.
//!
//! LIFECYCLE
//! =========
//! `Idle -> Invalid | Delegated` in one synchronous `begin_submit` call, and
//! `Delegated -> Idle` once every dispatched call has finished. A submit is
//! accepted in any phase and repeated valid submits are all dispatched.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use crate::net::auth::{AuthError, AuthService};
use crate::net::types::{SignUpCredentials, SignUpResponse};
use crate::util::sign_up_schema::{FieldErrors, SignUpField, SignUpFormData, field_error, validate_sign_up};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Last submit failed validation; errors are displayed.
    Invalid,
    /// At least one `sign_up` call is outstanding.
    Delegated,
}

/// Transient sign-up form store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpFormState {
    pub values: SignUpFormData,
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
    pub submit_count: u32,
    pub in_flight: u32,
}

/// Result of one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was dispatched.
    Invalid(FieldErrors),
    /// Credentials were handed to the collaborator, which returned this.
    Delegated(Result<SignUpResponse, AuthError>),
}

impl SignUpFormState {
    pub fn value(&self, field: SignUpField) -> &str {
        self.values.value(field)
    }

    pub fn error(&self, field: SignUpField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_submitted(&self) -> bool {
        self.submit_count > 0
    }

    /// Store an edited value.
    ///
    /// Once the form has been submitted, the edited field is re-validated
    /// against the whole object and only its own error is replaced.
    pub fn set_field(&mut self, field: SignUpField, value: String) {
        self.values.set_value(field, value);
        if self.is_submitted() {
            let message = field_error(&self.values, field);
            self.errors.set(field, message);
        }
    }

    /// Validate the current values and, if they pass, hand back the
    /// credentials to dispatch.
    ///
    /// # Errors
    ///
    /// Returns the per-field errors (also stored on the form) when any rule
    /// fails; nothing should be dispatched in that case.
    pub fn begin_submit(&mut self) -> Result<SignUpCredentials, FieldErrors> {
        self.submit_count += 1;
        match validate_sign_up(&self.values) {
            Ok(()) => {
                self.errors.clear();
                self.in_flight += 1;
                self.phase = SubmitPhase::Delegated;
                Ok(SignUpCredentials {
                    email: self.values.email.clone(),
                    password: self.values.password.clone(),
                    password_confirmation: self.values.password_confirmation.clone(),
                })
            }
            Err(errors) => {
                log::debug!("sign-up form invalid: {} field(s)", errors.len());
                self.errors = errors.clone();
                self.phase = if self.in_flight > 0 { SubmitPhase::Delegated } else { SubmitPhase::Invalid };
                Err(errors)
            }
        }
    }

    /// Record that one dispatched call has returned, whatever its result.
    pub fn finish_submit(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight == 0 && self.phase == SubmitPhase::Delegated {
            self.phase = SubmitPhase::Idle;
        }
    }
}

/// Hand validated credentials to the collaborator and await its answer.
///
/// The result is returned untouched; displaying it is the collaborator's job.
///
/// # Errors
///
/// Propagates the collaborator's [`AuthError`].
pub async fn dispatch_sign_up(
    auth: &dyn AuthService,
    credentials: SignUpCredentials,
) -> Result<SignUpResponse, AuthError> {
    log::debug!("dispatching sign-up");
    let result = auth.sign_up(credentials).await;
    if let Err(e) = &result {
        log::debug!("sign-up dispatch returned error: {e}");
    }
    result
}

/// Validate `state` and, when valid, await exactly one `sign_up` call.
pub async fn submit_sign_up(state: &mut SignUpFormState, auth: &dyn AuthService) -> SubmitOutcome {
    let credentials = match state.begin_submit() {
        Ok(credentials) => credentials,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };
    let result = dispatch_sign_up(auth, credentials).await;
    state.finish_submit();
    SubmitOutcome::Delegated(result)
}
