//! Login / sign-up screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthScreen` is generic over the auth collaborator so it can be mounted
//! with the HTTP relay client or any other `AuthService`. `LoginPage` is the
//! routed wrapper that wires a successful sign-in into `AuthState`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_tabs::AuthTabs;
use crate::components::brand_header::BrandHeader;
use crate::components::password_input::PasswordInput;
use crate::components::status_banner::{BannerKind, StatusBanner};
use crate::net::api::HttpAuthService;
use crate::net::auth::AuthService;
use crate::net::types::SessionUser;
use crate::state::auth::AuthState;
use crate::state::auth_form::{AuthFormState, SubmitOutcome, submit};
use crate::util::auth::install_signed_in_redirect;
use crate::util::text;

/// Identity to record after a sign-in the collaborator accepted.
fn signed_in_user(reported: Option<SessionUser>, submitted_email: &str) -> SessionUser {
    reported.unwrap_or_else(|| SessionUser { email: submitted_email.to_owned() })
}

#[cfg(feature = "hydrate")]
fn log_outcome(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::SignedIn(_) => log::info!("sign-in accepted"),
        SubmitOutcome::Registered => log::info!("sign-up accepted"),
        SubmitOutcome::Rejected => log::info!("auth request rejected"),
        SubmitOutcome::Failed => log::warn!("auth request failed"),
    }
}

/// Routed login page backed by the server relay.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_signed_in_redirect(auth, use_navigate());

    let on_signed_in = Callback::new(move |user: SessionUser| auth.update(|s| s.sign_in(user)));

    view! { <AuthScreen service=HttpAuthService on_signed_in=on_signed_in/> }
}

/// Email/password form that toggles between login and registration.
#[component]
pub fn AuthScreen<S>(
    service: S,
    #[prop(optional)] on_signed_in: Option<Callback<SessionUser>>,
) -> impl IntoView
where
    S: AuthService + Send + Sync,
{
    let form = RwSignal::new(AuthFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = None;
        form.update(|f| started = f.begin_submit());
        let Some(submission) = started else {
            return;
        };

        let service = service.clone();
        leptos::task::spawn_local(async move {
            let result = submit(&service, &submission).await;
            #[cfg(feature = "hydrate")]
            if let Err(e) = &result {
                log::warn!("auth collaborator error: {e}");
            }
            let mut finished = None;
            form.update(|f| finished = Some(f.finish_submit(submission.mode, result)));
            let Some(outcome) = finished else {
                return;
            };
            #[cfg(feature = "hydrate")]
            log_outcome(&outcome);
            if let (SubmitOutcome::SignedIn(user), Some(callback)) = (outcome, on_signed_in) {
                callback.run(signed_in_user(user, &submission.credentials.email));
            }
        });
    };

    let loading = move || form.with(|f| f.loading);
    let error = Signal::derive(move || form.with(|f| f.error.clone()));
    let success = Signal::derive(move || form.with(|f| f.success.clone()));

    view! {
        <div class="auth-screen">
            <div class="auth-screen__glow auth-screen__glow--top" aria-hidden="true"></div>
            <div class="auth-screen__glow auth-screen__glow--bottom" aria-hidden="true"></div>
            <div class="auth-card">
                <BrandHeader/>
                <AuthTabs form=form/>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-field">
                        <span class="auth-field__icon" aria-hidden="true">"✉"</span>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder=text::EMAIL_PLACEHOLDER
                            autocomplete="email"
                            required=true
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <PasswordInput form=form/>
                    <StatusBanner message=error kind=BannerKind::Error/>
                    <StatusBanner message=success kind=BannerKind::Success/>
                    <button
                        class="auth-submit"
                        type="submit"
                        disabled=loading
                        aria-busy=move || if loading() { "true" } else { "false" }
                    >
                        <Show
                            when=loading
                            fallback=move || {
                                view! {
                                    <span>{move || form.with(|f| f.mode.label())}</span>
                                    <span class="auth-submit__arrow" aria-hidden="true">"→"</span>
                                }
                            }
                        >
                            <span class="auth-spinner" aria-hidden="true"></span>
                        </Show>
                    </button>
                </form>
                <p class="auth-footer">
                    {move || form.with(|f| f.mode.switch_prompt())}
                    <button
                        type="button"
                        class="auth-footer__switch"
                        on:click=move |_| form.update(AuthFormState::toggle_mode)
                    >
                        {move || form.with(|f| f.mode.toggled().label())}
                    </button>
                </p>
            </div>
        </div>
    }
}
