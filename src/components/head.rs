//! Document head management.
//!
//! Every tag written here carries a marker attribute so the next page can
//! replace exactly the tags the previous one added.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::core::head::HeadTags;
use crate::utils::dom;

const MANAGED_ATTR: &str = "data-notes-head";

/// Replace the managed head tags and the document title.
pub fn apply(document: &Document, tags: &HeadTags) -> Result<(), JsValue> {
    document.set_title(&tags.title);

    let Some(head) = document.head() else {
        return Ok(());
    };

    for stale in dom::find_all(&head, &format!("[{}]", MANAGED_ATTR)) {
        stale.remove();
    }

    for meta in &tags.metas {
        let el = document.create_element("meta")?;
        el.set_attribute(meta.attr, meta.key)?;
        el.set_attribute("content", &meta.content)?;
        el.set_attribute(MANAGED_ATTR, "")?;
        head.append_child(&el)?;
    }

    for link in &tags.alternates {
        let el = document.create_element("link")?;
        el.set_attribute("rel", "alternate")?;
        el.set_attribute("hreflang", &link.hreflang)?;
        el.set_attribute("href", &link.href)?;
        el.set_attribute(MANAGED_ATTR, "")?;
        head.append_child(&el)?;
    }

    Ok(())
}
