//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page bounces signed-out visitors to `/login`, and the login
//! page bounces signed-in users back to `/`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.user.is_none()
}

#[must_use]
pub fn should_redirect_signed_in(state: &AuthState) -> bool {
    state.user.is_some()
}

/// Redirect to `/login` whenever no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Redirect to `/` as soon as a user is present.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_signed_in) {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });
}
