//! Authentication collaborator interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth screen never talks to the network directly. It is handed an
//! `AuthService` and calls exactly one of its two operations per submission.
//! `api::HttpAuthService` is the browser implementation; tests script their own.

use std::future::Future;

use super::types::AuthResponse;

/// Unexpected failure while talking to the collaborator.
///
/// A rejected credential is not an error at this level: it arrives as
/// `Ok(AuthResponse { error: Some(..), .. })`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthServiceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("auth request failed: {0}")]
    Status(u16),
    #[error("unexpected auth response: {0}")]
    Decode(String),
    #[error("authentication is only available in the browser")]
    Unavailable,
    #[error("{0}")]
    Other(String),
}

/// Capability set `{sign_in, sign_up}` consumed by the auth form.
///
/// Returned futures are driven on the browser's local executor, so they are
/// not required to be `Send`.
pub trait AuthService: Clone + 'static {
    /// Authenticate an existing account.
    fn sign_in(&self, email: &str, password: &str) -> impl Future<Output = Result<AuthResponse, AuthServiceError>>;

    /// Register a new account.
    fn sign_up(&self, email: &str, password: &str) -> impl Future<Output = Result<AuthResponse, AuthServiceError>>;
}
