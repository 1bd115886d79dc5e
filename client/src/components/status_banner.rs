//! Inline error / success message under the form fields.

#[cfg(test)]
#[path = "status_banner_test.rs"]
mod status_banner_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

impl BannerKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "auth-banner auth-banner--error",
            Self::Success => "auth-banner auth-banner--success",
        }
    }

    fn role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            Self::Success => "status",
        }
    }
}

/// Renders nothing while `message` is `None`.
#[component]
pub fn StatusBanner(#[prop(into)] message: Signal<Option<String>>, kind: BannerKind) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class=kind.class() role=kind.role()>
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
