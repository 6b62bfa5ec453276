//! Core logic for the theme components, independent of the browser.
//!
//! This module provides:
//! - [`FileTrie`] folder/file hierarchy with descendant page counts
//! - [`Explorer`] panel / nav / history state machine
//! - [`CachedIndex`] and [`open_panel`] for the lazily loaded page index
//! - [`slug`], [`listing`], [`translation`] and [`head`] helpers

pub mod error;
pub mod explorer;
pub mod head;
pub mod index;
pub mod listing;
pub mod slug;
pub mod translation;
mod trie;

pub use explorer::{BackStack, Explorer, ExplorerView};
pub use index::{CachedIndex, IndexSource, open_panel};
pub use trie::{FileTrie, FolderNode};
