use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{self, DEFAULT_SLUG};

// =============================================================================
// Page Index Types
// =============================================================================

/// Page index keyed by slug, as emitted to `contentIndex.json` by the host.
pub type ContentIndex = BTreeMap<String, ContentDetails>;

/// One page record from the page index.
///
/// Unknown fields emitted by the host (`content`, `links`, `tags`, ...) are
/// ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ContentDetails {
    /// Unique path identifier (e.g., `posts/hello`, `posts/index`)
    #[serde(default)]
    pub slug: String,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Language tag from frontmatter (e.g., `ko`)
    #[serde(default)]
    pub lang: Option<String>,
    /// Short description for meta tags
    #[serde(default)]
    pub description: Option<String>,
}

impl ContentDetails {
    /// Create a page record with a slug and title.
    #[cfg(test)]
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the language tag.
    #[cfg(test)]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Set the description.
    #[cfg(test)]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Collect page records into an index keyed by their slug.
#[cfg(test)]
pub fn index_from_pages(pages: impl IntoIterator<Item = ContentDetails>) -> ContentIndex {
    pages
        .into_iter()
        .map(|page| (page.slug.clone(), page))
        .collect()
}

// =============================================================================
// Current Page
// =============================================================================

/// The page currently displayed by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct PageData {
    pub slug: String,
    pub title: Option<String>,
    pub lang: Option<String>,
    pub description: Option<String>,
}

impl PageData {
    /// Resolve the current page from the page index.
    ///
    /// Pages missing from the index (e.g. `404`) keep only their slug.
    pub fn resolve(slug: &str, index: &ContentIndex) -> Self {
        let slug = if slug.is_empty() { DEFAULT_SLUG } else { slug };
        match index.get(slug) {
            Some(details) => Self {
                slug: slug.to_string(),
                title: Some(details.title.clone()).filter(|t| !t.is_empty()),
                lang: details.lang.clone(),
                description: details.description.clone(),
            },
            None => Self {
                slug: slug.to_string(),
                title: None,
                lang: None,
                description: None,
            },
        }
    }

    /// Language tag, if it is one of the supported translation languages.
    pub fn supported_lang(&self) -> Option<&str> {
        self.lang
            .as_deref()
            .filter(|lang| config::SUPPORTED_LANGUAGES.contains(lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_host_index() {
        let json = r#"{
            "posts/hello": {
                "slug": "posts/hello",
                "filePath": "posts/hello.md",
                "title": "Hello",
                "links": [],
                "tags": ["intro"],
                "content": "..."
            },
            "posts/hello.en": {
                "slug": "posts/hello.en",
                "title": "Hello (en)",
                "lang": "en"
            }
        }"#;
        let index: ContentIndex = serde_json::from_str(json).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index["posts/hello"].title, "Hello");
        assert_eq!(index["posts/hello"].lang, None);
        assert_eq!(index["posts/hello.en"].lang.as_deref(), Some("en"));
    }

    #[test]
    fn test_page_data_resolve() {
        let index = index_from_pages([ContentDetails::new("posts/a", "A").with_lang("ko")]);

        let page = PageData::resolve("posts/a", &index);
        assert_eq!(page.title.as_deref(), Some("A"));
        assert_eq!(page.supported_lang(), Some("ko"));

        let missing = PageData::resolve("404", &index);
        assert_eq!(missing.title, None);
        assert_eq!(missing.lang, None);

        assert_eq!(PageData::resolve("", &index).slug, "index");
    }

    #[test]
    fn test_unsupported_lang_filtered() {
        let index = index_from_pages([ContentDetails::new("a", "A").with_lang("fr")]);
        let page = PageData::resolve("a", &index);
        assert_eq!(page.lang.as_deref(), Some("fr"));
        assert_eq!(page.supported_lang(), None);
    }
}
