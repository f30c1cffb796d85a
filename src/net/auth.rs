//! Account-creation capability consumed by the sign-up form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form never talks to the network directly. It receives an
//! [`AuthHandle`] from its parent and hands validated credentials to it, so
//! pages can be rendered against the HTTP backend or a test double.

use std::sync::Arc;

use async_trait::async_trait;

use super::types::{SignUpCredentials, SignUpResponse};

/// Failures reported by an [`AuthService`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never reached the backend.
    #[error("sign-up request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("sign-up failed: {status}")]
    Rejected { status: u16 },

    /// The backend answered `ok: false`.
    #[error("sign-up refused: {message}")]
    Refused { message: String },

    /// The response body could not be decoded.
    #[error("sign-up response parse failed: {0}")]
    Decode(String),

    /// No browser environment (server render or native test build).
    #[error("not available on server")]
    Unavailable,
}

/// External account-creation capability.
///
/// Futures are `?Send` because browser HTTP clients hold `JsValue`s.
#[async_trait(?Send)]
pub trait AuthService: Send + Sync {
    /// Create an account from already validated credentials.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] describing why the account was not created.
    async fn sign_up(&self, credentials: SignUpCredentials) -> Result<SignUpResponse, AuthError>;
}

/// Shared, cloneable handle to the injected auth collaborator.
pub type AuthHandle = Arc<dyn AuthService>;
