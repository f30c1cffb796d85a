use futures::executor::block_on;

use super::*;
use crate::net::recording_auth::RecordingAuth;
use crate::util::sign_up_schema::{EMAIL_INVALID, EMAIL_REQUIRED, PASSWORD_TOO_SHORT, PASSWORDS_DIFFER};

fn filled(email: &str, password: &str, confirmation: &str) -> SignUpFormState {
    let mut state = SignUpFormState::default();
    state.set_field(SignUpField::Email, email.to_owned());
    state.set_field(SignUpField::Password, password.to_owned());
    state.set_field(SignUpField::PasswordConfirmation, confirmation.to_owned());
    state
}

// =============================================================
// Submission
// =============================================================

#[test]
fn empty_email_blocks_sign_up() {
    let auth = RecordingAuth::default();
    let mut state = filled("", "abc123", "abc123");
    let outcome = block_on(submit_sign_up(&mut state, &auth));
    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert_eq!(state.error(SignUpField::Email), Some(EMAIL_REQUIRED));
    assert_eq!(state.phase, SubmitPhase::Invalid);
    assert!(auth.calls().is_empty());
}

#[test]
fn email_without_at_blocks_sign_up() {
    let auth = RecordingAuth::default();
    let mut state = filled("user.example.com", "abc123", "abc123");
    block_on(submit_sign_up(&mut state, &auth));
    assert_eq!(state.error(SignUpField::Email), Some(EMAIL_INVALID));
    assert!(auth.calls().is_empty());
}

#[test]
fn short_password_blocks_sign_up() {
    let auth = RecordingAuth::default();
    let mut state = filled("user@example.com", "abc", "abc");
    block_on(submit_sign_up(&mut state, &auth));
    assert_eq!(state.error(SignUpField::Password), Some(PASSWORD_TOO_SHORT));
    assert!(auth.calls().is_empty());
}

#[test]
fn mismatched_confirmation_blocks_sign_up() {
    let auth = RecordingAuth::default();
    let mut state = filled("user@example.com", "abc123", "abc124");
    block_on(submit_sign_up(&mut state, &auth));
    assert_eq!(state.error(SignUpField::PasswordConfirmation), Some(PASSWORDS_DIFFER));
    assert!(auth.calls().is_empty());
}

#[test]
fn valid_submit_calls_sign_up_once_with_values() {
    let auth = RecordingAuth::default();
    let mut state = filled("user@example.com", "abc123", "abc123");
    let outcome = block_on(submit_sign_up(&mut state, &auth));
    assert!(matches!(outcome, SubmitOutcome::Delegated(Ok(_))));
    assert!(state.errors.is_empty());
    assert_eq!(
        auth.calls(),
        vec![SignUpCredentials {
            email: "user@example.com".to_owned(),
            password: "abc123".to_owned(),
            password_confirmation: "abc123".to_owned(),
        }]
    );
    assert_eq!(state.phase, SubmitPhase::Idle);
    assert_eq!(state.in_flight, 0);
}

#[test]
fn resubmitting_identical_data_calls_again() {
    let auth = RecordingAuth::default();
    let mut state = filled("user@example.com", "abc123", "abc123");
    block_on(submit_sign_up(&mut state, &auth));
    block_on(submit_sign_up(&mut state, &auth));
    assert_eq!(auth.calls().len(), 2);
    assert_eq!(state.submit_count, 2);
}

#[test]
fn collaborator_error_is_returned_not_shown_on_fields() {
    let auth = RecordingAuth { refuse: true, ..RecordingAuth::default() };
    let mut state = filled("user@example.com", "abc123", "abc123");
    let outcome = block_on(submit_sign_up(&mut state, &auth));
    assert_eq!(
        outcome,
        SubmitOutcome::Delegated(Err(AuthError::Refused { message: "email taken".to_owned() }))
    );
    assert!(state.errors.is_empty());
    assert_eq!(state.phase, SubmitPhase::Idle);
}

#[test]
fn invalid_then_fixed_submit_dispatches() {
    let auth = RecordingAuth::default();
    let mut state = filled("user@example.com", "abc123", "abc124");
    block_on(submit_sign_up(&mut state, &auth));
    state.set_field(SignUpField::PasswordConfirmation, "abc123".to_owned());
    block_on(submit_sign_up(&mut state, &auth));
    assert_eq!(auth.calls().len(), 1);
}

// =============================================================
// In-flight bookkeeping
// =============================================================

#[test]
fn overlapping_submits_stay_delegated_until_all_finish() {
    let mut state = filled("user@example.com", "abc123", "abc123");
    assert!(state.begin_submit().is_ok());
    assert!(state.begin_submit().is_ok());
    assert_eq!(state.in_flight, 2);
    state.finish_submit();
    assert_eq!(state.phase, SubmitPhase::Delegated);
    state.finish_submit();
    assert_eq!(state.phase, SubmitPhase::Idle);
}

#[test]
fn invalid_submit_during_dispatch_keeps_delegated_phase() {
    let mut state = filled("user@example.com", "abc123", "abc123");
    assert!(state.begin_submit().is_ok());
    state.set_field(SignUpField::Email, String::new());
    assert!(state.begin_submit().is_err());
    assert_eq!(state.phase, SubmitPhase::Delegated);
    state.finish_submit();
    assert_eq!(state.phase, SubmitPhase::Idle);
}

#[test]
fn finish_submit_without_dispatch_is_harmless() {
    let mut state = SignUpFormState::default();
    state.finish_submit();
    assert_eq!(state.in_flight, 0);
    assert_eq!(state.phase, SubmitPhase::Idle);
}

// =============================================================
// Editing
// =============================================================

#[test]
fn edits_do_not_validate_before_first_submit() {
    let mut state = SignUpFormState::default();
    state.set_field(SignUpField::Email, "nope".to_owned());
    assert!(state.errors.is_empty());
    assert_eq!(state.value(SignUpField::Email), "nope");
}

#[test]
fn edits_after_submit_revalidate_only_edited_field() {
    let mut state = filled("", "abc123", "abc124");
    assert!(state.begin_submit().is_err());
    assert_eq!(state.error(SignUpField::Email), Some(EMAIL_REQUIRED));

    state.set_field(SignUpField::Email, "user".to_owned());
    assert_eq!(state.error(SignUpField::Email), Some(EMAIL_INVALID));

    state.set_field(SignUpField::Password, "abc124".to_owned());
    assert_eq!(state.error(SignUpField::Password), None);
    // confirmation keeps its stale error until it is edited itself
    assert_eq!(state.error(SignUpField::PasswordConfirmation), Some(PASSWORDS_DIFFER));

    state.set_field(SignUpField::Email, "user@example.com".to_owned());
    assert_eq!(state.error(SignUpField::Email), None);
}
