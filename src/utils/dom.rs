//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MediaQueryList, Storage, Window};

use crate::config::{DEFAULT_SLUG, MOBILE_MEDIA_QUERY};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

// =============================================================================
// Viewport
// =============================================================================

/// Media query list for the mobile breakpoint.
pub fn mobile_query() -> Option<MediaQueryList> {
    window()?.match_media(MOBILE_MEDIA_QUERY).ok()?
}

/// Check if the viewport is at or below the mobile breakpoint.
pub fn is_mobile() -> bool {
    mobile_query().is_some_and(|query| query.matches())
}

// =============================================================================
// Elements
// =============================================================================

/// Find the first descendant of `root` carrying `class`.
pub fn find_by_class(root: &Element, class: &str) -> Option<HtmlElement> {
    root.query_selector(&format!(".{}", class))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Find every descendant of `root` matching `selector`.
pub fn find_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Set a `true`/`false` attribute such as `aria-hidden`.
pub fn set_bool_attr(el: &Element, name: &str, value: bool) {
    let _ = el.set_attribute(name, if value { "true" } else { "false" });
}

/// Add or remove a class.
pub fn toggle_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Slug of the current page from `<body data-slug>`.
pub fn body_slug() -> String {
    document()
        .and_then(|doc| doc.body())
        .and_then(|body| body.dataset().get("slug"))
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| DEFAULT_SLUG.to_string())
}

// =============================================================================
// Browser History
// =============================================================================

/// Push a history entry for the current URL carrying `state`.
pub fn push_history_state(state: &JsValue) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let href = window.location().href().ok();
        let _ = history.push_state_with_url(state, "", href.as_deref());
    }
}

/// Navigate one entry back in the browser history.
pub fn history_back() {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.back();
    }
}
