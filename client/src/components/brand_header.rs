//! PixelWalls wordmark shown above the auth card.

use leptos::prelude::*;

use crate::util::text;

#[component]
pub fn BrandHeader() -> impl IntoView {
    view! {
        <div class="brand-header">
            <div class="brand-header__logo" aria-hidden="true">"✦"</div>
            <div class="brand-header__text">
                <span class="brand-header__name">
                    {text::BRAND_PRIMARY}
                    <span class="brand-header__name--dim">{text::BRAND_SECONDARY}</span>
                </span>
                <span class="brand-header__tagline">{text::BRAND_TAGLINE}</span>
            </div>
        </div>
    }
}
