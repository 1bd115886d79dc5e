//! Login / sign-up form state.
//!
//! DESIGN
//! ======
//! All transitions live here as plain methods so the component only wires
//! DOM events to them. A submission is split into `begin_submit` (validate,
//! mark busy, snapshot the input) and `finish_submit` (apply the result),
//! with the collaborator call awaited in between by `submit`.
//!
//! The mode captured at `begin_submit` decides how the result is applied,
//! even if the user flips tabs while the call is pending.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use crate::net::auth::{AuthService, AuthServiceError};
use crate::net::types::{AuthResponse, Credentials, SessionUser};
use crate::util::text;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Which operation the form performs on submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Tab and submit button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => text::LOGIN_LABEL,
            Self::Register => text::SIGN_UP_LABEL,
        }
    }

    /// Footer prompt preceding the switch link.
    #[must_use]
    pub fn switch_prompt(self) -> &'static str {
        match self {
            Self::Login => text::NO_ACCOUNT_PROMPT,
            Self::Register => text::HAVE_ACCOUNT_PROMPT,
        }
    }
}

/// Input captured when a submission starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub mode: AuthMode,
    pub credentials: Credentials,
}

/// How a finished submission was applied to the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Login accepted. Carries the user when the collaborator reported one.
    SignedIn(Option<SessionUser>),
    /// Sign-up accepted; the form switched back to login.
    Registered,
    /// The collaborator answered with an error message.
    Rejected,
    /// The call itself failed.
    Failed,
}

/// Transient state owned by one rendered auth form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl AuthFormState {
    /// Select a tab explicitly.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.clear_messages();
    }

    /// Flip between login and register (footer link).
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// `type` attribute for the password `<input>`.
    #[must_use]
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    /// Accessible label for the visibility toggle button.
    #[must_use]
    pub fn visibility_toggle_label(&self) -> &'static str {
        if self.show_password {
            text::HIDE_PASSWORD_LABEL
        } else {
            text::SHOW_PASSWORD_LABEL
        }
    }

    fn clear_messages(&mut self) {
        self.error = None;
        self.success = None;
    }

    /// Start a submission.
    ///
    /// Returns `None` (and leaves `loading` untouched) when a call is already
    /// in flight or the input is invalid; in the latter case `error` explains why.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.loading {
            return None;
        }
        self.clear_messages();
        let credentials = match validate_credentials(&self.email, &self.password) {
            Ok(credentials) => credentials,
            Err(message) => {
                self.error = Some(message.to_owned());
                return None;
            }
        };
        self.loading = true;
        Some(Submission { mode: self.mode, credentials })
    }

    /// Apply the collaborator's result for a submission started in `mode`.
    pub fn finish_submit(
        &mut self,
        mode: AuthMode,
        result: Result<AuthResponse, AuthServiceError>,
    ) -> SubmitOutcome {
        self.loading = false;
        match result {
            Ok(AuthResponse { error: Some(err), .. }) => {
                self.error = Some(non_empty_or_fallback(err.message));
                SubmitOutcome::Rejected
            }
            Ok(AuthResponse { error: None, user }) => match mode {
                AuthMode::Login => SubmitOutcome::SignedIn(user),
                AuthMode::Register => {
                    self.success = Some(text::SIGN_UP_COMPLETE.to_owned());
                    self.mode = AuthMode::Login;
                    SubmitOutcome::Registered
                }
            },
            Err(err) => {
                self.error = Some(non_empty_or_fallback(err.to_string()));
                SubmitOutcome::Failed
            }
        }
    }
}

fn non_empty_or_fallback(message: String) -> String {
    if message.trim().is_empty() {
        text::FALLBACK_ERROR.to_owned()
    } else {
        message
    }
}

/// Check form input before it reaches the collaborator.
///
/// The email is trimmed; the password is passed through untouched.
///
/// # Errors
///
/// Returns the user-facing message for the first failing field.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if !is_plausible_email(email) {
        return Err(text::EMAIL_REQUIRED);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(text::PASSWORD_TOO_SHORT);
    }
    Ok(Credentials::new(email, password))
}

/// Text on both sides of a single `@`, like the browser's `type=email` check.
fn is_plausible_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'))
}

/// Invoke exactly one collaborator operation for `submission`.
///
/// # Errors
///
/// Propagates the collaborator's unexpected failure unchanged.
pub async fn submit<S: AuthService>(
    service: &S,
    submission: &Submission,
) -> Result<AuthResponse, AuthServiceError> {
    let Credentials { email, password } = &submission.credentials;
    match submission.mode {
        AuthMode::Login => service.sign_in(email, password).await,
        AuthMode::Register => service.sign_up(email, password).await,
    }
}
