//! Data models and types for the theme components.
//!
//! Contains domain types for:
//! - [`ContentDetails`], [`ContentIndex`], [`PageData`] - Page index and current page
//! - [`FolderTarget`], [`PanelEntry`], [`NavPresentation`] - Explorer state and output
//! - [`SiteConfig`], [`FooterConfig`], [`FooterLink`] - Site configuration

mod content;
mod explorer;
mod site;

pub use content::{ContentDetails, ContentIndex, PageData};
#[cfg(test)]
pub use content::index_from_pages;
pub use explorer::{FolderTarget, NavPresentation, PanelEntry};
pub use site::{FooterConfig, FooterLink, SiteConfig};
