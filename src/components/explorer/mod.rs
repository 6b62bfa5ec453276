//! Folder explorer.
//!
//! - [`ExplorerWithCounts`] - folder tree with page counts (render)
//! - [`ExplorerSession`] - panel, nav drawer and history behavior (runtime)

mod panel;
mod runtime;
mod tree;

pub use runtime::ExplorerSession;
pub use tree::ExplorerWithCounts;
