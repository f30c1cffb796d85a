//! Wire DTOs for the client/auth-backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON schema (`passwordConfirmation`),
//! while Rust code keeps snake_case names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials handed to the authentication collaborator on a valid submit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpCredentials {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Body returned by `POST /api/auth/signup`.
///
/// The backend contract is not published; this shape is what this client
/// expects and tolerates missing optional fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub ok: bool,
    /// Identifier of the created account, when the backend reports one.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Human-readable refusal reason when `ok` is false.
    #[serde(default)]
    pub message: Option<String>,
}
