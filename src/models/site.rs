//! Site configuration types, deserialized from `assets/site.toml`.

use serde::Deserialize;

use crate::core::error::ConfigError;

/// Site-wide settings used by the head tags and footer.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name (used for `og:site_name`).
    pub page_title: String,
    /// Appended to every page title.
    pub title_suffix: String,
    /// Host name without scheme (e.g. `example.com`). Absolute URLs and
    /// hreflang alternates are only emitted when this is set.
    pub base_url: Option<String>,
    /// Locale of the site (e.g. `ko-KR`).
    pub locale: String,
    /// Title used when a page has none.
    pub default_title: String,
    /// Description used when a page has none.
    pub default_description: String,
    pub footer: FooterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_title: "Notes".to_string(),
            title_suffix: String::new(),
            base_url: None,
            locale: "en-US".to_string(),
            default_title: "Untitled".to_string(),
            default_description: "No description provided".to_string(),
            footer: FooterConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse the configuration from TOML.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

/// Footer contents.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Name shown before the copyright mark.
    pub owner_name: String,
    pub owner_url: String,
    /// Tools credited after "Powered by".
    pub powered_by: Vec<FooterLink>,
    /// Link list below the copyright line.
    pub links: Vec<FooterLink>,
}

/// A footer link.
#[derive(Clone, Debug, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
    /// Open in the current tab instead of a new one.
    #[serde(default)]
    pub same_tab: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SiteConfig::from_toml(r#"page_title = "Garden""#).unwrap();
        assert_eq!(config.page_title, "Garden");
        assert_eq!(config.base_url, None);
        assert_eq!(config.default_title, "Untitled");
        assert!(config.footer.links.is_empty());
    }

    #[test]
    fn test_footer_links() {
        let config = SiteConfig::from_toml(
            r#"
            [footer]
            owner_name = "me"
            owner_url = "https://me.dev"

            [[footer.links]]
            label = "Home"
            url = "https://me.dev"
            same_tab = true

            [[footer.links]]
            label = "GitHub"
            url = "https://github.com/me"
            "#,
        )
        .unwrap();

        assert_eq!(config.footer.owner_name, "me");
        assert!(config.footer.links[0].same_tab);
        assert!(!config.footer.links[1].same_tab);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(SiteConfig::from_toml("page_title = ").is_err());
    }
}
