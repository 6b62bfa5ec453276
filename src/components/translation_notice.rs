//! "Translated by AI" notice for translation pages.

use leptos::prelude::*;

/// Notice banner; the caller decides whether the page is a translation.
#[component]
pub fn TranslationNotice(message: &'static str) -> impl IntoView {
    view! {
        <div class="translation-notice">
            <p class="translation-notice__text">
                <span class="translation-notice__icon">"🤖"</span>
                " "
                {message}
            </p>
        </div>
    }
}
