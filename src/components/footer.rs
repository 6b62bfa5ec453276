//! Site footer.

use leptos::prelude::*;

use crate::models::{FooterConfig, FooterLink};

fn external_link(link: FooterLink) -> impl IntoView {
    let (target, rel) = if link.same_tab {
        (None, None)
    } else {
        (Some("_blank"), Some("noopener noreferrer"))
    };
    view! {
        <a href=link.url target=target rel=rel>
            {link.label}
        </a>
    }
}

/// Text placed before the `i`-th of `count` credits: "A, B and C".
fn credit_separator(i: usize, count: usize) -> &'static str {
    match i {
        0 => "",
        i if i + 1 == count => " and ",
        _ => ", ",
    }
}

fn credits(links: Vec<FooterLink>) -> impl IntoView {
    let count = links.len();
    links
        .into_iter()
        .enumerate()
        .map(|(i, link)| {
            view! {
                {credit_separator(i, count)}
                {external_link(link)}
            }
        })
        .collect_view()
}

/// Footer with owner, copyright year, credits and the link list.
#[component]
pub fn SiteFooter(config: FooterConfig, year: u32) -> impl IntoView {
    let FooterConfig {
        owner_name,
        owner_url,
        powered_by,
        links,
    } = config;
    let has_credits = !powered_by.is_empty();

    view! {
        <footer class="custom-footer">
            <div class="custom-footer__content">
                <p class="custom-footer__copyright">
                    <a href=owner_url>{owner_name}</a>
                    {format!(" © {}", year)}
                    {has_credits.then_some(", Powered by ")}
                    {credits(powered_by)}
                </p>
                <ul class="custom-footer__links">
                    {links
                        .into_iter()
                        .map(|link| view! { <li>{external_link(link)}</li> })
                        .collect_view()}
                </ul>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_separators() {
        let joined: Vec<_> = (0..3).map(|i| credit_separator(i, 3)).collect();
        assert_eq!(joined, vec!["", ", ", " and "]);
        assert_eq!(credit_separator(0, 1), "");
        assert_eq!(credit_separator(1, 2), " and ");
    }
}
