//! Upstream auth provider: GoTrue-style password sign-in and sign-up.
//!
//! Thin HTTP wrapper over `/auth/v1/token?grant_type=password` and
//! `/auth/v1/signup`. Reply interpretation lives in `interpret_reply` for
//! testability. Tokens returned by the provider are dropped here; only the
//! user's email is passed on.

use std::time::Duration;

use client::net::types::Credentials;

use crate::config::AuthProviderConfig;

const SIGN_IN_PATH: &str = "/auth/v1/token?grant_type=password";
const SIGN_UP_PATH: &str = "/auth/v1/signup";

#[derive(Debug, thiserror::Error)]
pub enum AuthProviderError {
    #[error("HTTP client build failed: {0}")]
    Client(String),
    #[error("auth provider request failed: {0}")]
    Transport(String),
    #[error("auth provider error: status {status}")]
    Upstream { status: u16, body: String },
    #[error("auth provider reply was not JSON (status {status}): {message}")]
    Decode { status: u16, message: String },
}

/// Provider verdict on a credential pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutcome {
    Accepted { email: Option<String> },
    Rejected { message: String },
}

/// Object-safe seam so handlers can run against a stub provider in tests.
#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthProviderError`] when the provider cannot be reached or fails.
    async fn sign_in(&self, credentials: &Credentials) -> Result<ProviderOutcome, AuthProviderError>;

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthProviderError`] when the provider cannot be reached or fails.
    async fn sign_up(&self, credentials: &Credentials) -> Result<ProviderOutcome, AuthProviderError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct GoTrueProvider {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoTrueProvider {
    /// Build a provider client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &AuthProviderConfig) -> Result<Self, AuthProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| AuthProviderError::Client(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), api_key: config.api_key.clone() })
    }

    async fn post(&self, path: &str, credentials: &Credentials) -> Result<ProviderOutcome, AuthProviderError> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthProviderError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AuthProviderError::Transport(e.to_string()))?;

        interpret_reply(status, &text)
    }
}

#[async_trait::async_trait]
impl AuthProvider for GoTrueProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<ProviderOutcome, AuthProviderError> {
        self.post(SIGN_IN_PATH, credentials).await
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<ProviderOutcome, AuthProviderError> {
        self.post(SIGN_UP_PATH, credentials).await
    }
}

// =============================================================================
// REPLY PARSING
// =============================================================================

/// Map a provider status and body to an outcome.
///
/// 2xx is acceptance, 4xx is a user-facing rejection, anything else is an error.
/// A 2xx body must be JSON; an HTML page from a misconfigured host is not an account.
pub(crate) fn interpret_reply(status: u16, body: &str) -> Result<ProviderOutcome, AuthProviderError> {
    match status {
        200..=299 => {
            let json: serde_json::Value = serde_json::from_str(body)
                .map_err(|e| AuthProviderError::Decode { status, message: e.to_string() })?;
            Ok(ProviderOutcome::Accepted { email: extract_email(&json) })
        }
        400..=499 => {
            let json: serde_json::Value = serde_json::from_str(body).unwrap_or(serde_json::Value::Null);
            Ok(ProviderOutcome::Rejected {
                message: extract_error_message(&json).unwrap_or_else(|| format!("request rejected ({status})")),
            })
        }
        _ => Err(AuthProviderError::Upstream { status, body: body.to_owned() }),
    }
}

/// Sign-in replies nest the user under `user`; sign-up with email
/// confirmation returns the user object itself.
fn extract_email(json: &serde_json::Value) -> Option<String> {
    json.pointer("/user/email")
        .or_else(|| json.get("email"))
        .and_then(serde_json::Value::as_str)
        .filter(|e| !e.is_empty())
        .map(str::to_owned)
}

fn extract_error_message(json: &serde_json::Value) -> Option<String> {
    ["msg", "error_description", "message", "error"]
        .iter()
        .filter_map(|key| json.get(*key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
