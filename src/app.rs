//! Page lifecycle.
//!
//! The host site swaps page content on client-side navigation and announces
//! it with `prenav` / `nav` events. Each displayed page gets its own
//! [`PageSession`]; the previous one is dropped before the next is built, so
//! listeners and mounted views never pile up across navigations. The page
//! index is shared by all sessions for the lifetime of the runtime, and so
//! is the explorer tree, which is only re-rendered once the index loads.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::mount::{UnmountHandle, mount_to};
use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyViewState;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CustomEvent, Document, Event, HtmlElement};

use crate::components::explorer::{ExplorerSession, ExplorerWithCounts};
use crate::components::{LanguageSwitcher, SiteFooter, TranslationNotice, head};
use crate::config::{self, CONTENT_INDEX_PATH, DEFAULT_SLUG, cache, events, slots};
use crate::core::error::{FetchError, SetupError};
use crate::core::head::page_head;
use crate::core::translation::{switcher_options, translation_notice};
use crate::core::{CachedIndex, FileTrie, IndexSource, slug};
use crate::models::{ContentIndex, PageData};
use crate::utils::{EventListener, dom, fetch_json_cached};

// =============================================================================
// Page index
// =============================================================================

/// Page index served by the host next to the pages.
pub struct RemoteIndex;

impl IndexSource for RemoteIndex {
    async fn load(&self) -> Result<ContentIndex, FetchError> {
        let url = format!(
            "{}/{}",
            slug::path_to_root(&dom::body_slug()),
            CONTENT_INDEX_PATH
        );
        fetch_json_cached(&url, cache::CONTENT_INDEX_KEY).await
    }
}

/// Page index shared by every page session.
type SharedIndex = Rc<CachedIndex<RemoteIndex>>;

// =============================================================================
// Page session
// =============================================================================

type Mounted = UnmountHandle<AnyViewState>;

/// Everything attached for the page currently displayed.
struct PageSession {
    // Listeners go first so they detach before the markup is unmounted.
    explorer: Option<ExplorerSession>,
    _views: Vec<Mounted>,
}

impl PageSession {
    fn setup(slug: &str, index: &ContentIndex, shared: &SharedIndex) -> Result<Self, SetupError> {
        let document = dom::document().ok_or(SetupError::NoDocument)?;
        let site = config::site();
        let page = PageData::resolve(slug, index);
        let mut views = Vec::new();

        if let Err(e) = head::apply(&document, &page_head(site, &page, index)) {
            web_sys::console::warn_1(&e);
        }

        let footer = site.footer.clone();
        let year = js_sys::Date::new_0().get_full_year();
        views.extend(mount_slot(&document, slots::FOOTER, move || {
            view! { <SiteFooter config=footer year=year /> }.into_any()
        }));

        let options = switcher_options(&page, index);
        if !options.is_empty() {
            views.extend(mount_slot(&document, slots::LANGUAGE_SWITCHER, move || {
                view! { <LanguageSwitcher options=options /> }.into_any()
            }));
        }

        if let Some(message) = translation_notice(&page) {
            views.extend(mount_slot(&document, slots::TRANSLATION_NOTICE, move || {
                view! { <TranslationNotice message=message /> }.into_any()
            }));
        }

        let explorer = match ExplorerSession::attach(&document, &page.slug, Rc::clone(shared)) {
            Ok(session) => Some(session),
            // No folders on this site, nothing to drive.
            Err(SetupError::MissingRoot(_)) => None,
            Err(e) => {
                web_sys::console::warn_1(&format!("Explorer disabled: {}", e).into());
                None
            }
        };

        Ok(Self {
            explorer,
            _views: views,
        })
    }

    fn before_navigation(&self) {
        if let Some(explorer) = &self.explorer {
            explorer.before_navigation();
        }
    }

    fn history_popped(&self) {
        if let Some(explorer) = &self.explorer {
            explorer.history_popped();
        }
    }
}

/// Explorer tree carried across navigations.
///
/// A fresh tree replaces the previous one only when the page index loaded;
/// otherwise the previous tree stays mounted so its folder buttons can retry.
struct ExplorerMount<M> {
    current: Option<M>,
}

impl<M> ExplorerMount<M> {
    fn new() -> Self {
        Self { current: None }
    }

    /// Drop the previous tree and mount `render`'s, or keep it when `None`.
    fn refresh<F>(&mut self, render: Option<F>)
    where
        F: FnOnce() -> Option<M>,
    {
        if let Some(render) = render {
            self.current = None;
            self.current = render();
        }
    }
}

/// Mount `render` into the host slot `name`, replacing its contents.
fn mount_slot<F>(document: &Document, name: &str, render: F) -> Option<Mounted>
where
    F: FnOnce() -> AnyView + 'static,
{
    let slot = document
        .query_selector(&format!("[{}=\"{}\"]", slots::ATTR, name))
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    slot.set_inner_html("");
    Some(mount_to(slot, render))
}

// =============================================================================
// Runtime
// =============================================================================

/// App-lifetime state: the shared index and the live page session.
struct Runtime {
    index: SharedIndex,
    page: RefCell<Option<PageSession>>,
    explorer: RefCell<ExplorerMount<Mounted>>,
    /// Bumped on every navigation; a setup that finishes loading after a
    /// newer navigation started is discarded.
    generation: Cell<u64>,
}

impl Runtime {
    fn new() -> Self {
        Self {
            index: Rc::new(CachedIndex::new(RemoteIndex)),
            page: RefCell::new(None),
            explorer: RefCell::new(ExplorerMount::new()),
            generation: Cell::new(0),
        }
    }

    /// Tear down the current page and set up `slug`.
    fn navigate(self: &Rc<Self>, slug: String) {
        self.page.replace(None);
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let runtime = Rc::clone(self);
        spawn_local(async move {
            let loaded = runtime.index.get().await;
            if runtime.generation.get() != generation {
                return;
            }
            let index = match loaded {
                Ok(index) => Some(index),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load page index: {}", e).into());
                    None
                }
            };

            if let Some(document) = dom::document() {
                let render = index.as_deref().map(FileTrie::from_index).map(|trie| {
                    move || {
                        mount_slot(&document, slots::EXPLORER, move || {
                            view! { <ExplorerWithCounts trie=trie /> }.into_any()
                        })
                    }
                });
                runtime.explorer.borrow_mut().refresh(render);
            }

            let index = index.unwrap_or_default();
            match PageSession::setup(&slug, &index, &runtime.index) {
                Ok(session) => {
                    runtime.page.replace(Some(session));
                }
                Err(e) => web_sys::console::warn_1(&e.to_string().into()),
            }
        });
    }

    fn before_navigation(&self) {
        if let Some(page) = self.page.borrow().as_ref() {
            page.before_navigation();
        }
    }

    fn history_popped(&self) {
        if let Some(page) = self.page.borrow().as_ref() {
            page.history_popped();
        }
    }
}

/// `detail` of the host's `nav` event.
#[derive(Deserialize)]
struct NavDetail {
    url: String,
}

/// Page slug from a navigation URL such as `/posts/a#top`.
fn slug_from_url(url: &str) -> String {
    let path = url.split(&['?', '#'][..]).next().unwrap_or_default();
    let path = path.trim_matches('/');
    if path.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        path.to_string()
    }
}

fn nav_slug(event: &Event) -> String {
    event
        .dyn_ref::<CustomEvent>()
        .and_then(|event| serde_wasm_bindgen::from_value::<NavDetail>(event.detail()).ok())
        .map(|detail| slug_from_url(&detail.url))
        .unwrap_or_else(dom::body_slug)
}

/// Whether `document.readyState` says the DOM is still being parsed.
fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Subscribe to the host page lifecycle. Listeners live as long as the page.
pub fn install() {
    let (Some(window), Some(document)) = (dom::window(), dom::document()) else {
        return;
    };
    let runtime = Rc::new(Runtime::new());

    if still_loading(&document.ready_state()) {
        let runtime = Rc::clone(&runtime);
        EventListener::new(&document, events::DOM_READY, move |_| {
            runtime.navigate(dom::body_slug());
        })
        .forget();
    } else {
        runtime.navigate(dom::body_slug());
    }

    {
        let runtime = Rc::clone(&runtime);
        EventListener::new(&document, events::NAV, move |event| {
            runtime.navigate(nav_slug(&event));
        })
        .forget();
    }
    {
        let runtime = Rc::clone(&runtime);
        EventListener::new(&document, events::PRENAV, move |_| {
            runtime.before_navigation();
        })
        .forget();
    }
    EventListener::new(&window, events::POPSTATE, move |_| {
        runtime.history_popped();
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records when it is dropped.
    struct Tree {
        name: &'static str,
        dropped: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Drop for Tree {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.name);
        }
    }

    fn tree(name: &'static str, dropped: &Rc<RefCell<Vec<&'static str>>>) -> Tree {
        Tree {
            name,
            dropped: Rc::clone(dropped),
        }
    }

    #[test]
    fn test_explorer_kept_when_index_fails() {
        let dropped = Rc::new(RefCell::new(Vec::new()));
        let mut mount = ExplorerMount::new();
        mount.refresh(Some(|| Some(tree("first", &dropped))));

        // index failed to load: no render closure
        mount.refresh(None::<fn() -> Option<Tree>>);

        assert!(dropped.borrow().is_empty());
        assert_eq!(mount.current.as_ref().map(|t| t.name), Some("first"));
    }

    #[test]
    fn test_explorer_replaced_when_index_loads() {
        let dropped = Rc::new(RefCell::new(Vec::new()));
        let mut mount = ExplorerMount::new();
        mount.refresh(Some(|| Some(tree("first", &dropped))));

        let seen = Rc::clone(&dropped);
        mount.refresh(Some(|| {
            // previous tree is gone before the new one mounts
            assert_eq!(*seen.borrow(), vec!["first"]);
            Some(tree("second", &dropped))
        }));

        assert_eq!(mount.current.as_ref().map(|t| t.name), Some("second"));
    }

    #[test]
    fn test_still_loading() {
        assert!(still_loading("loading"));
        assert!(!still_loading("interactive"));
        assert!(!still_loading("complete"));
    }

    #[test]
    fn test_slug_from_url() {
        assert_eq!(slug_from_url("posts/a"), "posts/a");
        assert_eq!(slug_from_url("/posts/a#intro"), "posts/a");
        assert_eq!(slug_from_url("posts/?q=1"), "posts");
        assert_eq!(slug_from_url(""), "index");
        assert_eq!(slug_from_url("/"), "index");
    }
}
