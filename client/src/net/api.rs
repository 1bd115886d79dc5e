//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `AuthServiceError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A non-OK reply that still carries an `{ error: { message } }` body is a
//! rejection, not a failure, so the user sees the server's wording.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::auth::{AuthService, AuthServiceError};
use super::types::{AuthResponse, Credentials};

pub const SIGN_IN_ENDPOINT: &str = "/api/auth/sign-in";
pub const SIGN_UP_ENDPOINT: &str = "/api/auth/sign-up";

/// Browser implementation of the auth collaborator backed by the server relay.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthService;

impl AuthService for HttpAuthService {
    fn sign_in(&self, email: &str, password: &str) -> impl Future<Output = Result<AuthResponse, AuthServiceError>> {
        post_credentials(SIGN_IN_ENDPOINT, Credentials::new(email, password))
    }

    fn sign_up(&self, email: &str, password: &str) -> impl Future<Output = Result<AuthResponse, AuthServiceError>> {
        post_credentials(SIGN_UP_ENDPOINT, Credentials::new(email, password))
    }
}

/// Decide what a relay reply means from its status and decoded body.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_reply(
    ok: bool,
    status: u16,
    body: Result<AuthResponse, String>,
) -> Result<AuthResponse, AuthServiceError> {
    match body {
        Ok(resp) if ok || resp.is_rejected() => Ok(resp),
        Ok(_) => Err(AuthServiceError::Status(status)),
        Err(_) if !ok => Err(AuthServiceError::Status(status)),
        Err(e) => Err(AuthServiceError::Decode(e)),
    }
}

async fn post_credentials(endpoint: &'static str, credentials: Credentials) -> Result<AuthResponse, AuthServiceError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(&credentials)
            .map_err(|e| AuthServiceError::Other(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthServiceError::Network(e.to_string()))?;
        let body = resp.json::<AuthResponse>().await.map_err(|e| e.to_string());
        interpret_reply(resp.ok(), resp.status(), body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, credentials);
        Err(AuthServiceError::Unavailable)
    }
}
