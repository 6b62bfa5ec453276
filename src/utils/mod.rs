//! Browser-facing helpers.
//!
//! Provides:
//! - [`dom`] - window, document, viewport and history access
//! - [`EventListener`] - DOM listener detached on drop
//! - [`fetch_json_cached`] - JSON fetch with timeout and session cache
//! - [`collate`] - accent-insensitive name ordering

pub mod cache;
pub mod collate;
pub mod dom;
mod fetch;
mod listener;

pub use fetch::fetch_json_cached;
pub use listener::EventListener;
