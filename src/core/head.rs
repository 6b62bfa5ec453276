//! Document head tags for the current page.
//!
//! Title, description, Open Graph / Twitter cards and hreflang alternates
//! for translated pages.

use crate::config::SUPPORTED_LANGUAGES;
use crate::core::translation::{is_original, language_map};
use crate::models::{ContentIndex, PageData, SiteConfig};

/// A `<meta>` element keyed by `name` or `property`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaTag {
    /// `"name"` or `"property"`
    pub attr: &'static str,
    pub key: &'static str,
    pub content: String,
}

impl MetaTag {
    fn name(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: "name",
            key,
            content: content.into(),
        }
    }

    fn property(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: "property",
            key,
            content: content.into(),
        }
    }
}

/// `<link rel="alternate" hreflang=...>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: String,
}

/// Everything the head component writes for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTags {
    pub title: String,
    pub metas: Vec<MetaTag>,
    pub alternates: Vec<AlternateLink>,
}

impl HeadTags {
    /// Content of the first meta tag with `key`.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metas
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.content.as_str())
    }
}

/// Build the head tags for `page`.
pub fn page_head(site: &SiteConfig, page: &PageData, index: &ContentIndex) -> HeadTags {
    let title = format!(
        "{}{}",
        page.title.as_deref().unwrap_or(&site.default_title),
        site.title_suffix
    );
    let description = page
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(&site.default_description)
        .to_string();

    let mut metas = vec![
        MetaTag::name("description", description.clone()),
        MetaTag::name("og:site_name", site.page_title.clone()),
        MetaTag::property("og:title", title.clone()),
        MetaTag::property("og:type", "website"),
        MetaTag::name("twitter:card", "summary_large_image"),
        MetaTag::name("twitter:title", title.clone()),
        MetaTag::name("twitter:description", description.clone()),
        MetaTag::property("og:description", description.clone()),
        MetaTag::property("og:image:alt", description),
    ];

    let mut alternates = Vec::new();

    if let Some(base) = site.base_url.as_deref().filter(|b| !b.is_empty()) {
        let origin = format!("https://{}", base);
        let og_image = format!("{}/static/og-image.png", origin);
        let social_url = if page.slug == "404" {
            format!("{}/", origin)
        } else {
            format!("{}/{}", origin, page.slug)
        };

        metas.extend([
            MetaTag::property("og:image", og_image.clone()),
            MetaTag::property("og:image:url", og_image.clone()),
            MetaTag::name("twitter:image", og_image),
            MetaTag::property("og:image:type", "image/png"),
            MetaTag::property("twitter:domain", base.to_string()),
            MetaTag::property("og:url", social_url.clone()),
            MetaTag::property("twitter:url", social_url),
        ]);

        alternates = hreflang_links(&origin, page, index);
    }

    HeadTags {
        title,
        metas,
        alternates,
    }
}

/// hreflang alternates: `x-default` first, then supported languages in
/// their fixed order, then any other language in first-seen order.
fn hreflang_links(origin: &str, page: &PageData, index: &ContentIndex) -> Vec<AlternateLink> {
    let map = language_map(page, index, false);
    if map.is_empty() {
        return Vec::new();
    }

    let original = map
        .iter()
        .map(|(_, slug)| slug.as_str())
        .find(|slug| is_original(slug))
        .unwrap_or(&page.slug);

    let mut links = vec![AlternateLink {
        hreflang: "x-default".to_string(),
        href: format!("{}/{}", origin, original),
    }];

    let supported = SUPPORTED_LANGUAGES
        .iter()
        .filter_map(|code| map.iter().find(|(lang, _)| lang == code));
    let others = map
        .iter()
        .filter(|(lang, _)| !SUPPORTED_LANGUAGES.contains(&lang.as_str()));

    links.extend(supported.chain(others).map(|(lang, slug)| AlternateLink {
        hreflang: lang.clone(),
        href: format!("{}/{}", origin, slug),
    }));

    links
}
