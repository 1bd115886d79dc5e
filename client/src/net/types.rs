//! Shared wire DTOs for the auth boundary.
//!
//! DESIGN
//! ======
//! The server relay depends on this module too, so both sides serialize the
//! exact same shapes. A reply is a success unless `error` is present.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Email/password pair sent to `sign_in` and `sign_up`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Error payload carried by a rejected auth call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthErrorBody {
    pub message: String,
}

/// Identity of a signed-in user. Held in memory only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
}

/// Reply from the authentication collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Present when the collaborator rejected the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<AuthErrorBody>,
    /// Present on success when the collaborator reports who signed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

impl AuthResponse {
    #[must_use]
    pub fn accepted(user: Option<SessionUser>) -> Self {
        Self { error: None, user }
    }

    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self { error: Some(AuthErrorBody { message: message.into() }), user: None }
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.error.is_some()
    }
}
