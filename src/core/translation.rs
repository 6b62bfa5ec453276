//! Translation variants of a page.
//!
//! A page `posts/hello` may have machine-translated siblings such as
//! `posts/hello.en`; all of them share the base slug `posts/hello`. Pages
//! declare their language through the `lang` field of the page index.

use crate::config::SUPPORTED_LANGUAGES;
use crate::core::slug;
use crate::models::{ContentIndex, PageData};

/// Display name of a supported language.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "ko" => Some("한국어"),
        "en" => Some("English"),
        "ja" => Some("日本語"),
        "zh" => Some("中文"),
        _ => None,
    }
}

/// "Translated by AI" message in the page language, English by default.
fn notice_message(lang: Option<&str>) -> &'static str {
    match lang {
        Some("ko") => "이 글은 AI번역되었습니다.",
        Some("ja") => "この記事はAIによって翻訳されました。",
        Some("zh") => "本文由AI翻译。",
        _ => "This article was translated by AI.",
    }
}

/// Notice shown on translated pages; `None` on originals.
pub fn translation_notice(page: &PageData) -> Option<&'static str> {
    slug::is_translation(&page.slug).then(|| notice_message(page.supported_lang()))
}

/// Slug per language for every page sharing the current page's base slug.
///
/// Entries keep first-seen order; a later page with the same language
/// replaces the slug in place. The current page is added when its language
/// is not represented yet.
pub fn language_map(
    page: &PageData,
    index: &ContentIndex,
    supported_only: bool,
) -> Vec<(String, String)> {
    let Some(current_lang) = page.lang.as_deref() else {
        return Vec::new();
    };
    let is_allowed = |lang: &str| !supported_only || SUPPORTED_LANGUAGES.contains(&lang);
    let base = slug::strip_language_suffix(&page.slug);

    let mut map: Vec<(String, String)> = Vec::new();
    let mut set = |lang: &str, page_slug: &str| {
        match map.iter_mut().find(|(code, _)| code == lang) {
            Some(entry) => entry.1 = page_slug.to_string(),
            None => map.push((lang.to_string(), page_slug.to_string())),
        }
    };

    for details in index.values() {
        let Some(lang) = details.lang.as_deref() else {
            continue;
        };
        if details.slug.is_empty() || !is_allowed(lang) {
            continue;
        }
        if slug::strip_language_suffix(&details.slug) == base {
            set(lang, &details.slug);
        }
    }

    if is_allowed(current_lang) && !map.iter().any(|(code, _)| code == current_lang) {
        map.push((current_lang.to_string(), page.slug.clone()));
    }

    map
}

/// Whether `slug` is an original rather than a translation.
pub fn is_original(page_slug: &str) -> bool {
    slug::strip_language_suffix(page_slug) == page_slug
}

/// One language choice in the language switcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: String,
    /// `📝 한국어` for the original, `🌐 English` for translations
    pub label: String,
    /// Relative link, `None` for the page being viewed
    pub href: Option<String>,
}

/// Language switcher options in the fixed supported-language order.
///
/// Empty unless the page has a language and at least two variants exist.
pub fn switcher_options(page: &PageData, index: &ContentIndex) -> Vec<LanguageOption> {
    let map = language_map(page, index, true);
    let current_lang = page.lang.as_deref();

    let options: Vec<LanguageOption> = SUPPORTED_LANGUAGES
        .iter()
        .filter_map(|code| {
            let (_, target) = map.iter().find(|(lang, _)| lang == code)?;
            let name = language_name(code)
                .map(str::to_string)
                .unwrap_or_else(|| code.to_uppercase());
            let marker = if is_original(target) { "📝" } else { "🌐" };

            Some(LanguageOption {
                code: code.to_string(),
                label: format!("{} {}", marker, name),
                href: (current_lang != Some(*code))
                    .then(|| slug::resolve_relative(&page.slug, target)),
            })
        })
        .collect();

    if options.len() <= 1 {
        return Vec::new();
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentDetails, index_from_pages};

    fn index() -> ContentIndex {
        index_from_pages([
            ContentDetails::new("posts/hello", "Hello").with_lang("ko"),
            ContentDetails::new("posts/hello.en", "Hello").with_lang("en"),
            ContentDetails::new("posts/hello.ja", "Hello").with_lang("ja"),
            // suffix and declared language disagree
            ContentDetails::new("posts/hello.zh", "Hello").with_lang("fr"),
            ContentDetails::new("posts/other", "Other").with_lang("ko"),
        ])
    }

    #[test]
    fn test_translation_notice() {
        let index = index();
        let original = PageData::resolve("posts/hello", &index);
        assert_eq!(translation_notice(&original), None);

        let en = PageData::resolve("posts/hello.en", &index);
        assert_eq!(
            translation_notice(&en),
            Some("This article was translated by AI.")
        );

        let ja = PageData::resolve("posts/hello.ja", &index);
        assert_eq!(
            translation_notice(&ja),
            Some("この記事はAIによって翻訳されました。")
        );

        // unknown language falls back to English
        let fr = PageData::resolve("posts/hello.zh", &index);
        assert_eq!(
            translation_notice(&fr),
            Some("This article was translated by AI.")
        );
    }

    #[test]
    fn test_language_map() {
        let index = index();
        let page = PageData::resolve("posts/hello.en", &index);

        let supported = language_map(&page, &index, true);
        let codes: Vec<_> = supported.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(codes, vec!["ko", "en", "ja"]);

        let all = language_map(&page, &index, false);
        assert_eq!(all.len(), 4);
        assert!(all.contains(&("fr".to_string(), "posts/hello.zh".to_string())));
    }

    #[test]
    fn test_language_map_requires_lang() {
        let index = index_from_pages([ContentDetails::new("a", "A")]);
        let page = PageData::resolve("a", &index);
        assert!(language_map(&page, &index, false).is_empty());
    }

    #[test]
    fn test_switcher_options() {
        let index = index();
        let page = PageData::resolve("posts/hello.en", &index);
        let options = switcher_options(&page, &index);

        assert_eq!(
            options,
            vec![
                LanguageOption {
                    code: "ko".to_string(),
                    label: "📝 한국어".to_string(),
                    href: Some("../posts/hello".to_string()),
                },
                LanguageOption {
                    code: "en".to_string(),
                    label: "🌐 English".to_string(),
                    href: None,
                },
                LanguageOption {
                    code: "ja".to_string(),
                    label: "🌐 日本語".to_string(),
                    href: Some("../posts/hello.ja".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_switcher_hidden_for_single_language() {
        let index = index();
        let page = PageData::resolve("posts/other", &index);
        assert!(switcher_options(&page, &index).is_empty());

        let no_lang = index_from_pages([ContentDetails::new("a", "A")]);
        assert!(switcher_options(&PageData::resolve("a", &no_lang), &no_lang).is_empty());
    }

    #[test]
    fn test_current_page_added_when_missing() {
        // index lacks a lang for the current page's own record
        let index = index_from_pages([ContentDetails::new("a.en", "A").with_lang("en")]);
        let page = PageData {
            slug: "a".to_string(),
            title: None,
            lang: Some("ko".to_string()),
            description: None,
        };
        let map = language_map(&page, &index, true);
        assert_eq!(
            map,
            vec![
                ("en".to_string(), "a.en".to_string()),
                ("ko".to_string(), "a".to_string()),
            ]
        );
    }
}
