//! Signed-in landing page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::brand_header::BrandHeader;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::text;

/// Shows who is signed in. Redirects to `/login` if nobody is.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let email = move || auth.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <BrandHeader/>
                <p class="home-greeting">
                    {text::SIGNED_IN_AS}
                    <strong>{email}</strong>
                </p>
                <button class="auth-submit" type="button" on:click=move |_| auth.update(AuthState::sign_out)>
                    {text::SIGN_OUT_LABEL}
                </button>
            </div>
        </div>
    }
}
