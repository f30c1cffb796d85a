//! REST implementation of the auth collaborator.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): returns [`AuthError::Unavailable`] since account
//! creation is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped to an [`AuthError`] and logged here; the sign-up
//! form only learns that the dispatch finished.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::auth::{AuthError, AuthService};
use super::types::{SignUpCredentials, SignUpResponse};
use crate::config::ClientConfig;

#[cfg(any(test, feature = "hydrate"))]
fn classify_response(status: u16, body: Option<SignUpResponse>) -> Result<SignUpResponse, AuthError> {
    if !(200..300).contains(&status) {
        return Err(AuthError::Rejected { status });
    }
    let body = body.ok_or_else(|| AuthError::Decode("empty body".to_owned()))?;
    if !body.ok {
        let message = body.message.clone().unwrap_or_else(|| "sign-up refused".to_owned());
        return Err(AuthError::Refused { message });
    }
    Ok(body)
}

/// Auth collaborator backed by the Timos HTTP API.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    config: ClientConfig,
}

impl HttpAuthService {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[cfg(feature = "hydrate")]
    async fn post_sign_up(&self, credentials: &SignUpCredentials) -> Result<SignUpResponse, AuthError> {
        let resp = gloo_net::http::Request::post(&self.config.sign_up_url())
            .json(credentials)
            .map_err(|e| AuthError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        if !resp.ok() {
            return classify_response(resp.status(), None);
        }
        let body: SignUpResponse = resp.json().await.map_err(|e| AuthError::Decode(e.to_string()))?;
        classify_response(resp.status(), Some(body))
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    async fn sign_up(&self, credentials: SignUpCredentials) -> Result<SignUpResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            match self.post_sign_up(&credentials).await {
                Ok(resp) => {
                    log::info!("account created");
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&self.config.after_sign_up_href);
                    }
                    Ok(resp)
                }
                Err(e) => {
                    log::warn!("sign-up failed: {e}");
                    Err(e)
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::Unavailable)
        }
    }
}
