//! Slug helpers.
//!
//! Slugs are `/`-separated page identifiers without leading or trailing
//! slashes (`posts/hello`, `posts/index`, `index`). A translated copy of a
//! page carries a language extension on its last segment (`posts/hello.ko`).

use crate::config::SUPPORTED_LANGUAGES;

/// Last path segment of a slug.
pub fn last_segment(slug: &str) -> &str {
    slug.rsplit('/').next().unwrap_or(slug)
}

/// Check if a slug is an index page (`index` or `.../index`).
pub fn is_index(slug: &str) -> bool {
    slug == "index" || slug.ends_with("/index")
}

/// Check if a slug is a translation variant (its last segment contains `.`).
pub fn is_translation(slug: &str) -> bool {
    last_segment(slug).contains('.')
}

/// Check if a page counts towards folder totals.
pub fn is_countable_page(slug: &str) -> bool {
    !slug.is_empty() && !is_index(slug) && !is_translation(slug)
}

/// Strip a trailing `/index` from a folder slug.
pub fn normalize_folder(slug: &str) -> &str {
    slug.strip_suffix("/index").unwrap_or(slug)
}

/// Strip a supported language suffix (`.ko`, `.en`, `.ja`, `.zh`).
pub fn strip_language_suffix(slug: &str) -> &str {
    SUPPORTED_LANGUAGES
        .iter()
        .find_map(|lang| {
            slug.strip_suffix(*lang)
                .and_then(|rest| rest.strip_suffix('.'))
        })
        .unwrap_or(slug)
}

/// Relative path from a slug's directory back to the site root.
///
/// `posts/a` -> `..`, `index` -> `.`
pub fn path_to_root(slug: &str) -> String {
    let depth = slug
        .split('/')
        .filter(|segment| !segment.is_empty())
        .count()
        .saturating_sub(1);

    if depth == 0 {
        ".".to_string()
    } else {
        vec![".."; depth].join("/")
    }
}

/// Link target for a slug: `index` pages collapse to their folder.
///
/// `posts/index` -> `posts/`, `index` -> `/`
fn simplify(slug: &str) -> String {
    let trimmed = if slug == "index" {
        ""
    } else {
        slug.strip_suffix("index")
            .filter(|rest| rest.ends_with('/'))
            .unwrap_or(slug)
    };
    let trimmed = trimmed.trim_start_matches('/');

    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Join path segments, dropping empty ones and keeping a trailing slash.
fn join_segments(segments: &[&str]) -> String {
    let mut joined = segments
        .iter()
        .filter(|s| !s.is_empty() && **s != "/")
        .map(|s| s.trim_matches('/'))
        .collect::<Vec<_>>()
        .join("/");

    if segments.first().is_some_and(|s| s.starts_with('/')) {
        joined.insert(0, '/');
    }
    if segments.last().is_some_and(|s| s.ends_with('/')) {
        joined.push('/');
    }
    joined
}

/// Relative link from the page at `current` to the page at `target`.
pub fn resolve_relative(current: &str, target: &str) -> String {
    join_segments(&[&path_to_root(current), &simplify(target)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_index() {
        assert!(is_index("index"));
        assert!(is_index("posts/index"));
        assert!(!is_index("posts/reindex"));
        assert!(!is_index("posts/a"));
    }

    #[test]
    fn test_is_translation() {
        assert!(is_translation("posts/hello.ko"));
        assert!(is_translation("index.en"));
        assert!(!is_translation("posts.v2/hello"));
        assert!(!is_translation("posts/hello"));
    }

    #[test]
    fn test_is_countable_page() {
        assert!(is_countable_page("a"));
        assert!(!is_countable_page(""));
        assert!(!is_countable_page("posts/index"));
        assert!(!is_countable_page("posts/a.ja"));
    }

    #[test]
    fn test_normalize_folder() {
        assert_eq!(normalize_folder("posts/index"), "posts");
        assert_eq!(normalize_folder("posts"), "posts");
        assert_eq!(normalize_folder(""), "");
    }

    #[test]
    fn test_strip_language_suffix() {
        assert_eq!(strip_language_suffix("posts/a.ko"), "posts/a");
        assert_eq!(strip_language_suffix("posts/a.zh"), "posts/a");
        assert_eq!(strip_language_suffix("posts/a.fr"), "posts/a.fr");
        assert_eq!(strip_language_suffix("posts/ako"), "posts/ako");
        assert_eq!(strip_language_suffix("posts/a"), "posts/a");
    }

    #[test]
    fn test_path_to_root() {
        assert_eq!(path_to_root("index"), ".");
        assert_eq!(path_to_root("posts/a"), "..");
        assert_eq!(path_to_root("posts/sub/a"), "../..");
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(resolve_relative("posts/a", "posts/b"), "../posts/b");
        assert_eq!(resolve_relative("index", "posts/b"), "./posts/b");
        assert_eq!(resolve_relative("index", "posts/index"), "./posts/");
        assert_eq!(resolve_relative("index", "index"), "./");
        assert_eq!(resolve_relative("posts/sub/c", "a"), "../../a");
    }
}
