//! Networking modules for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` defines the capability the form consumes, `api` implements it over
//! HTTP, and `types` defines the shared wire schema.

pub mod api;
pub mod auth;
pub mod types;

#[cfg(test)]
#[path = "recording_auth_test.rs"]
pub(crate) mod recording_auth;
