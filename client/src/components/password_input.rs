//! Password field with a show/hide toggle.

use leptos::prelude::*;

use crate::state::auth_form::{AuthFormState, AuthMode, MIN_PASSWORD_LEN};
use crate::util::text;

/// Visibility only swaps the input `type`; the bound value is the same signal field.
#[component]
pub fn PasswordInput(form: RwSignal<AuthFormState>) -> impl IntoView {
    let visible = move || form.with(|f| f.show_password);

    view! {
        <div class="auth-field">
            <span class="auth-field__icon" aria-hidden="true">"🔒"</span>
            <input
                class="auth-input auth-input--with-toggle"
                type=move || form.with(AuthFormState::password_input_type)
                placeholder=text::PASSWORD_PLACEHOLDER
                autocomplete=move || {
                    if form.with(|f| f.mode == AuthMode::Register) { "new-password" } else { "current-password" }
                }
                required=true
                minlength=MIN_PASSWORD_LEN.to_string()
                prop:value=move || form.with(|f| f.password.clone())
                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
            />
            <button
                type="button"
                class="auth-field__toggle"
                aria-label=move || form.with(AuthFormState::visibility_toggle_label)
                title=move || form.with(AuthFormState::visibility_toggle_label)
                on:click=move |_| form.update(AuthFormState::toggle_password_visibility)
            >
                {move || if visible() { "🙈" } else { "👁" }}
            </button>
        </div>
    }
}
