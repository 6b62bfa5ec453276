//! Application configuration.
//!
//! Centralizes all configuration constants used by the theme components.
//! Site-specific values are loaded at compile time from `assets/site.toml`
//! using `include_str!`.

use std::sync::OnceLock;

use crate::models::SiteConfig;

// =============================================================================
// Site Configuration (loaded at compile time)
// =============================================================================

/// Raw site configuration.
pub const SITE_TOML: &str = include_str!("../assets/site.toml");

/// Parsed site configuration.
///
/// Falls back to [`SiteConfig::default`] if the bundled TOML is malformed.
pub fn site() -> &'static SiteConfig {
    static SITE: OnceLock<SiteConfig> = OnceLock::new();
    SITE.get_or_init(|| match SiteConfig::from_toml(SITE_TOML) {
        Ok(config) => config,
        Err(_e) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&_e.to_string().into());
            SiteConfig::default()
        }
    })
}

// =============================================================================
// Page Lifecycle
// =============================================================================

/// Slug assumed when the host does not annotate `<body data-slug>`.
pub const DEFAULT_SLUG: &str = "index";

/// Media query separating the mobile layout from the desktop layout.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 768px)";

/// Delay before the nav drawer reopens after the panel back button (mobile).
pub const NAV_REOPEN_DELAY_MS: u32 = 50;

/// Host events the runtime subscribes to.
pub mod events {
    /// Fired once the initial document is parsed.
    pub const DOM_READY: &str = "DOMContentLoaded";
    /// Fired by the host after a client-side navigation completes.
    pub const NAV: &str = "nav";
    /// Fired by the host right before page content is swapped.
    pub const PRENAV: &str = "prenav";
    /// Browser history pop.
    pub const POPSTATE: &str = "popstate";
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Page index location, relative to the site root.
pub const CONTENT_INDEX_PATH: &str = "static/contentIndex.json";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key for the page index.
    pub const CONTENT_INDEX_KEY: &str = "content_index_cache";
}

// =============================================================================
// Languages
// =============================================================================

/// Languages with a dedicated translation suffix (`post.ko`, `post.en`, ...),
/// in display order.
pub const SUPPORTED_LANGUAGES: &[&str] = &["ko", "en", "ja", "zh"];

// =============================================================================
// Explorer DOM Contract
// =============================================================================

/// Class names shared by the folder tree renderer and the explorer runtime.
pub mod explorer {
    pub const ROOT: &str = "custom-explorer";
    pub const TOGGLE: &str = "custom-explorer__toggle";
    pub const TOGGLE_ICON: &str = "custom-explorer__toggle-icon";
    pub const FOLDERS: &str = "custom-explorer__folders";
    pub const NAV_CLOSE: &str = "custom-explorer__nav-close";
    pub const FOLDER_LIST: &str = "custom-explorer__folder-list";
    pub const FOLDER_ITEM: &str = "custom-explorer__folder-item";
    pub const FOLDER: &str = "custom-explorer__folder";
    pub const FOLDER_LABEL: &str = "custom-explorer__folder-label";
    pub const COUNT: &str = "custom-explorer__count";
    pub const FOLDER_CHILDREN: &str = "custom-explorer__folder-children";
    pub const PANEL: &str = "custom-explorer__panel";
    pub const PANEL_HEADER: &str = "custom-explorer__panel-header";
    pub const BACK: &str = "custom-explorer__back";
    pub const PANEL_TITLE: &str = "custom-explorer__panel-title";
    pub const PANEL_LIST: &str = "custom-explorer__panel-list";
    pub const PANEL_ITEM: &str = "custom-explorer__panel-item";
    pub const PANEL_LINK: &str = "custom-explorer__panel-link";
    pub const SUBFOLDER_INFO: &str = "custom-explorer__subfolder-info";
    pub const PANEL_EMPTY: &str = "custom-explorer__panel-empty";
    pub const OVERLAY: &str = "custom-explorer__overlay";

    /// Selected folder button.
    pub const ACTIVE: &str = "is-active";
    /// Root state while the panel is open.
    pub const PANEL_OPEN: &str = "is-panel-open";
    /// Root state while the nav drawer is open (mobile only).
    pub const NAV_OPEN: &str = "is-nav-open";
    /// Toggle is hidden until the runtime attaches.
    pub const HIDE_UNTIL_LOADED: &str = "hide-until-loaded";

    /// Data attribute holding the normalized folder slug.
    pub const SLUG_ATTR: &str = "data-folder-slug";
    /// Data attribute holding the folder display name.
    pub const NAME_ATTR: &str = "data-folder-name";
}

/// Host placeholders that page components are mounted into.
pub mod slots {
    /// Attribute naming the slot, e.g. `<div data-notes-slot="footer">`.
    pub const ATTR: &str = "data-notes-slot";
    pub const EXPLORER: &str = "explorer";
    pub const FOOTER: &str = "footer";
    pub const LANGUAGE_SWITCHER: &str = "language-switcher";
    pub const TRANSLATION_NOTICE: &str = "translation-notice";
}

// =============================================================================
// UI Text
// =============================================================================

/// User-facing strings.
pub mod text {
    /// Label of the pseudo-folder holding pages at the site root.
    pub const ROOT_FOLDER: &str = "루트";
    /// Placeholder shown for a folder without pages.
    pub const EMPTY_PANEL: &str = "글이 없습니다.";
    pub const NAV_LABEL: &str = "Site navigation";
    pub const TOGGLE_LABEL: &str = "카테고리 메뉴 토글";
    pub const NAV_CLOSE_LABEL: &str = "메뉴 닫기";
    pub const BACK_LABEL: &str = "←";
    pub const LANGUAGE_LABEL: &str = "Language";

    /// Summary line for a subfolder shown in the panel.
    pub fn subfolder_summary(name: &str, count: usize) -> String {
        format!("{}: {}개의 글", name, count)
    }
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the components.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_site_config_parses() {
        let config = SiteConfig::from_toml(SITE_TOML).expect("site.toml must parse");
        assert_eq!(config.footer.links.len(), 4);
        assert!(config.base_url.is_some());
    }

    #[test]
    fn test_subfolder_summary_format() {
        assert_eq!(text::subfolder_summary("sub", 1), "sub: 1개의 글");
    }
}
