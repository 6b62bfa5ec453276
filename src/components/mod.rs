//! Page components built with Leptos.
//!
//! - [`explorer`] - folder tree and its runtime
//! - [`SiteFooter`] - footer from the site configuration
//! - [`LanguageSwitcher`] - links between translations
//! - [`TranslationNotice`] - notice on machine-translated pages
//! - [`head`] - `<head>` title, meta and hreflang tags
//! - [`icons`] - icon definitions (change theme here)

pub mod explorer;
mod footer;
pub mod head;
pub mod icons;
mod language_switcher;
mod translation_notice;

pub use footer::SiteFooter;
pub use language_switcher::LanguageSwitcher;
pub use translation_notice::TranslationNotice;
