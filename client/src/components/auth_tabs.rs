//! Login / sign-up tab toggle.

#[cfg(test)]
#[path = "auth_tabs_test.rs"]
mod auth_tabs_test;

use leptos::prelude::*;

use crate::state::auth_form::{AuthFormState, AuthMode};

fn tab_class(active: bool) -> &'static str {
    if active { "auth-tabs__tab auth-tabs__tab--active" } else { "auth-tabs__tab" }
}

/// Two-button toggle; selecting a tab clears any banner message.
#[component]
pub fn AuthTabs(form: RwSignal<AuthFormState>) -> impl IntoView {
    let tab = move |mode: AuthMode| {
        view! {
            <button
                type="button"
                class=move || tab_class(form.with(|f| f.mode == mode))
                on:click=move |_| form.update(|f| f.set_mode(mode))
            >
                {mode.label()}
            </button>
        }
    };

    view! {
        <div class="auth-tabs" role="tablist">
            {tab(AuthMode::Login)}
            {tab(AuthMode::Register)}
        </div>
    }
}
