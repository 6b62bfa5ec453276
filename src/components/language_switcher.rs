//! Links between translations of the same page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::text;
use crate::core::translation::LanguageOption;

/// Language list; the current language is shown without a link.
#[component]
pub fn LanguageSwitcher(options: Vec<LanguageOption>) -> impl IntoView {
    let items = options
        .into_iter()
        .map(|option| {
            let link = match option.href {
                Some(href) => view! {
                    <a href=href class="language-switcher__link" hreflang=option.code>
                        {option.label}
                    </a>
                }
                .into_any(),
                None => view! {
                    <span class="language-switcher__link language-switcher__link--current">
                        {option.label}
                    </span>
                }
                .into_any(),
            };
            view! { <li class="language-switcher__item">{link}</li> }
        })
        .collect_view();

    view! {
        <div class="language-switcher">
            <div class="language-switcher__label">
                <Icon icon=ic::GLOBE />
                <span>{text::LANGUAGE_LABEL}</span>
            </div>
            <ul class="language-switcher__list">{items}</ul>
        </div>
    }
}
