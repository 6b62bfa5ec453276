//! Explorer runtime: binds the [`Explorer`] state machine to the rendered
//! markup and to `window.history`.
//!
//! An [`ExplorerSession`] lives for exactly one page. It owns the explorer
//! and every listener attached for it; dropping the session detaches them.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::mount::{UnmountHandle, mount_to};
use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyViewState;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, EventTarget, HtmlElement};

use super::panel::PanelItems;
use crate::config::{NAV_REOPEN_DELAY_MS, explorer as cls};
use crate::core::error::SetupError;
use crate::core::{BackStack, CachedIndex, Explorer, ExplorerView, IndexSource, open_panel};
use crate::models::{FolderTarget, NavPresentation, PanelEntry};
use crate::utils::{EventListener, dom};

type WebExplorer = Explorer<DomExplorerView, HistoryBackStack>;

// =============================================================================
// DOM view
// =============================================================================

/// Explorer markup located by class name.
pub struct DomExplorerView {
    root: HtmlElement,
    toggle: Option<HtmlElement>,
    nav_close: Option<HtmlElement>,
    folders: HtmlElement,
    panel: HtmlElement,
    panel_title: HtmlElement,
    panel_list: HtmlElement,
    back: HtmlElement,
    overlay: HtmlElement,
    buttons: Vec<HtmlElement>,
    panel_items: Option<UnmountHandle<AnyViewState>>,
}

impl DomExplorerView {
    /// Locate every region under `root`. Toggle and nav-close are optional.
    fn locate(root: HtmlElement) -> Result<Self, SetupError> {
        let region = |class: &'static str| {
            dom::find_by_class(&root, class).ok_or(SetupError::MissingRegion(class))
        };

        Ok(Self {
            folders: region(cls::FOLDERS)?,
            panel: region(cls::PANEL)?,
            panel_title: region(cls::PANEL_TITLE)?,
            panel_list: region(cls::PANEL_LIST)?,
            back: region(cls::BACK)?,
            overlay: region(cls::OVERLAY)?,
            toggle: dom::find_by_class(&root, cls::TOGGLE),
            nav_close: dom::find_by_class(&root, cls::NAV_CLOSE),
            buttons: dom::find_all(&root, &format!(".{}", cls::FOLDER)),
            panel_items: None,
            root,
        })
    }
}

impl ExplorerView for DomExplorerView {
    fn set_panel_open(&mut self, open: bool) {
        dom::toggle_class(&self.root, cls::PANEL_OPEN, open);
        dom::set_bool_attr(&self.panel, "aria-hidden", !open);
    }

    fn set_nav(&mut self, nav: NavPresentation) {
        dom::toggle_class(&self.root, cls::NAV_OPEN, nav.root_open);
        dom::set_bool_attr(&self.folders, "aria-hidden", nav.folders_hidden);
        if let Some(toggle) = &self.toggle {
            dom::set_bool_attr(toggle, "aria-expanded", nav.toggle_expanded);
        }
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        dom::set_bool_attr(&self.overlay, "aria-hidden", !visible);
        let style = self.overlay.style();
        let _ = style.set_property("opacity", if visible { "1" } else { "0" });
        let _ = style.set_property("pointer-events", if visible { "auto" } else { "none" });
    }

    fn set_active(&mut self, target: Option<&FolderTarget>) {
        for button in &self.buttons {
            let active = target.is_some_and(|target| {
                button.get_attribute(cls::SLUG_ATTR).as_deref() == Some(target.slug.as_str())
            });
            dom::toggle_class(button, cls::ACTIVE, active);
        }
    }

    fn render_panel(&mut self, title: &str, entries: &[PanelEntry]) {
        self.panel_title.set_text_content(Some(title));

        // Unmount the previous listing before clearing leftovers.
        self.panel_items = None;
        self.panel_list.set_inner_html("");

        let entries = entries.to_vec();
        self.panel_items = Some(mount_to(self.panel_list.clone(), move || {
            view! { <PanelItems entries=entries /> }.into_any()
        }));
    }
}

// =============================================================================
// History
// =============================================================================

/// State object of the synthetic history entry.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PanelHistoryState {
    explorer_panel: bool,
}

/// `window.history` as the explorer's back stack.
pub struct HistoryBackStack;

impl BackStack for HistoryBackStack {
    fn push_dismissible(&mut self) {
        let state = PanelHistoryState {
            explorer_panel: true,
        };
        match serde_wasm_bindgen::to_value(&state) {
            Ok(state) => dom::push_history_state(&state),
            Err(e) => web_sys::console::error_1(&e.into()),
        }
    }

    fn go_back(&mut self) {
        dom::history_back();
    }
}

// =============================================================================
// Session
// =============================================================================

/// One page's explorer with its listeners.
pub struct ExplorerSession {
    explorer: Rc<RefCell<WebExplorer>>,
    _listeners: Vec<EventListener>,
}

impl ExplorerSession {
    /// Attach to the explorer markup in `document`.
    ///
    /// Fails without side effects when the markup is absent or incomplete.
    pub fn attach<S>(
        document: &Document,
        slug: &str,
        index: Rc<CachedIndex<S>>,
    ) -> Result<Self, SetupError>
    where
        S: IndexSource + 'static,
    {
        let root = document
            .query_selector(&format!(".{}", cls::ROOT))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(SetupError::MissingRoot(cls::ROOT))?;
        let view = DomExplorerView::locate(root)?;

        let buttons = view.buttons.clone();
        let back = view.back.clone();
        let overlay = view.overlay.clone();
        let toggle = view.toggle.clone();
        let nav_close = view.nav_close.clone();

        let explorer = Rc::new(RefCell::new(Explorer::setup(
            view,
            HistoryBackStack,
            slug,
            dom::is_mobile(),
        )));

        let mut listeners = Vec::with_capacity(buttons.len() + 5);

        for button in &buttons {
            let target = FolderTarget::new(
                button.get_attribute(cls::SLUG_ATTR).unwrap_or_default(),
                button.get_attribute(cls::NAME_ATTR).unwrap_or_default(),
            );
            let weak = Rc::downgrade(&explorer);
            let index = Rc::clone(&index);
            listeners.push(EventListener::new(button, "click", move |_| {
                let weak = weak.clone();
                let index = Rc::clone(&index);
                let target = target.clone();
                spawn_local(async move {
                    if let Err(e) = open_panel(&weak, &*index, &target).await {
                        web_sys::console::error_1(
                            &format!("Failed to load page index: {}", e).into(),
                        );
                    }
                });
            }));
        }

        let weak = Rc::downgrade(&explorer);
        listeners.push(EventListener::new(&back, "click", move |_| {
            let Some(explorer) = weak.upgrade() else {
                return;
            };
            let mobile = {
                let mut explorer = explorer.borrow_mut();
                explorer.back_pressed();
                explorer.is_mobile()
            };
            if mobile {
                let weak = Rc::downgrade(&explorer);
                spawn_local(async move {
                    TimeoutFuture::new(NAV_REOPEN_DELAY_MS).await;
                    if let Some(explorer) = weak.upgrade() {
                        explorer.borrow_mut().reopen_nav_after_back();
                    }
                });
            }
        }));

        listeners.push(on(&overlay, "click", &explorer, WebExplorer::overlay_clicked));
        if let Some(toggle) = &toggle {
            listeners.push(on(toggle, "click", &explorer, WebExplorer::toggle_nav));
            dom::toggle_class(toggle, cls::HIDE_UNTIL_LOADED, false);
        }
        if let Some(nav_close) = &nav_close {
            listeners.push(on(nav_close, "click", &explorer, WebExplorer::close_nav));
        }
        if let Some(query) = dom::mobile_query() {
            let weak = Rc::downgrade(&explorer);
            let watched = query.clone();
            listeners.push(EventListener::new(&query, "change", move |_| {
                if let Some(explorer) = weak.upgrade() {
                    explorer.borrow_mut().viewport_changed(watched.matches());
                }
            }));
        }

        Ok(Self {
            explorer,
            _listeners: listeners,
        })
    }

    /// Host is about to swap page content.
    pub fn before_navigation(&self) {
        self.explorer.borrow_mut().before_navigation();
    }

    /// Browser history pop.
    pub fn history_popped(&self) {
        self.explorer.borrow_mut().history_popped();
    }
}

/// Listener running `action` on the explorer, if it is still alive.
fn on(
    target: &EventTarget,
    event: &'static str,
    explorer: &Rc<RefCell<WebExplorer>>,
    action: fn(&mut WebExplorer),
) -> EventListener {
    let weak = Rc::downgrade(explorer);
    EventListener::new(target, event, move |_| {
        if let Some(explorer) = weak.upgrade() {
            action(&mut explorer.borrow_mut());
        }
    })
}
