//! Auth relay routes: forward sign-in / sign-up to the upstream provider.
//!
//! Every reply body is an `AuthResponse`, so the browser client can show the
//! message whatever the status code.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use client::net::types::{AuthResponse, Credentials, SessionUser};
use client::state::auth_form::validate_credentials;

use crate::services::auth::{AuthProviderError, ProviderOutcome};
use crate::state::AppState;

const PROVIDER_MISSING_MESSAGE: &str = "authentication provider not configured";
const PROVIDER_UNAVAILABLE_MESSAGE: &str = "authentication service unavailable";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthAction {
    SignIn,
    SignUp,
}

impl AuthAction {
    fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "sign-in",
            Self::SignUp => "sign-up",
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/sign-in`: password sign-in.
pub async fn sign_in(State(state): State<AppState>, Json(body): Json<Credentials>) -> Response {
    relay(&state, AuthAction::SignIn, body).await
}

/// `POST /api/auth/sign-up`: account registration.
pub async fn sign_up(State(state): State<AppState>, Json(body): Json<Credentials>) -> Response {
    relay(&state, AuthAction::SignUp, body).await
}

async fn relay(state: &AppState, action: AuthAction, body: Credentials) -> Response {
    let credentials = match validate_credentials(&body.email, &body.password) {
        Ok(c) => c,
        Err(message) => return reply(StatusCode::BAD_REQUEST, AuthResponse::rejected(message)),
    };

    let Some(provider) = &state.auth else {
        tracing::warn!(action = action.as_str(), "auth provider not configured");
        return reply(StatusCode::SERVICE_UNAVAILABLE, AuthResponse::rejected(PROVIDER_MISSING_MESSAGE));
    };

    let result = match action {
        AuthAction::SignIn => provider.sign_in(&credentials).await,
        AuthAction::SignUp => provider.sign_up(&credentials).await,
    };
    outcome_response(action, result)
}

fn outcome_response(action: AuthAction, result: Result<ProviderOutcome, AuthProviderError>) -> Response {
    match result {
        Ok(ProviderOutcome::Accepted { email }) => {
            tracing::info!(action = action.as_str(), "auth accepted");
            reply(StatusCode::OK, AuthResponse::accepted(email.map(|email| SessionUser { email })))
        }
        Ok(ProviderOutcome::Rejected { message }) => {
            tracing::info!(action = action.as_str(), %message, "auth rejected");
            reply(StatusCode::OK, AuthResponse::rejected(message))
        }
        Err(AuthProviderError::Upstream { status, body }) => {
            tracing::error!(action = action.as_str(), status, %body, "auth provider returned an error");
            reply(StatusCode::BAD_GATEWAY, AuthResponse::rejected(PROVIDER_UNAVAILABLE_MESSAGE))
        }
        Err(e) => {
            tracing::error!(action = action.as_str(), error = %e, "auth relay failed");
            reply(StatusCode::BAD_GATEWAY, AuthResponse::rejected(PROVIDER_UNAVAILABLE_MESSAGE))
        }
    }
}

fn reply(status: StatusCode, body: AuthResponse) -> Response {
    (status, Json(body)).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
