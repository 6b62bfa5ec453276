//! Explorer runtime state machine.
//!
//! [`Explorer`] owns the page-scoped UI state of one explorer instance and
//! drives an [`ExplorerView`] (the DOM on the web) and a [`BackStack`] (the
//! browser history on the web). All transitions are synchronous; the only
//! asynchronous step, loading the page index, happens before
//! [`Explorer::show_panel`] is called.
//!
//! ## History integration
//!
//! On mobile, opening the panel pushes one dismissible entry onto the back
//! stack so that the platform's Back action closes the panel instead of
//! leaving the page. At most one such entry exists at a time, and the
//! `history_active` flag is only set while the panel is open.

use crate::core::listing;
use crate::models::{ContentIndex, FolderTarget, NavPresentation, PanelEntry};

// =============================================================================
// Seams
// =============================================================================

/// Presentation surface driven by the explorer.
pub trait ExplorerView {
    /// Show or hide the slide-in panel.
    fn set_panel_open(&mut self, open: bool);

    /// Apply the nav drawer attributes.
    fn set_nav(&mut self, nav: NavPresentation);

    /// Show or hide the dimming overlay.
    fn set_overlay_visible(&mut self, visible: bool);

    /// Highlight the folder button for `target`, or clear the highlight.
    fn set_active(&mut self, target: Option<&FolderTarget>);

    /// Replace the panel title and list.
    fn render_panel(&mut self, title: &str, entries: &[PanelEntry]);
}

/// Platform back-navigation stack holding dismissible overlays.
///
/// On the web this is `window.history`; a native shell would map it onto its
/// own back-stack API.
pub trait BackStack {
    /// Push one entry whose removal should dismiss the overlay.
    fn push_dismissible(&mut self);

    /// Trigger the platform's back navigation. The owner is notified through
    /// [`Explorer::history_popped`] once the entry is gone.
    fn go_back(&mut self);
}

// =============================================================================
// State
// =============================================================================

/// Page-lifetime UI state of one explorer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplorerState {
    pub panel_open: bool,
    pub nav_open: bool,
    /// A dismissible back-stack entry is pushed and not yet popped.
    pub history_active: bool,
    /// Folder whose button is highlighted.
    pub active: Option<FolderTarget>,
    /// Slug of the page currently displayed.
    pub current_slug: String,
    /// Last observed viewport class.
    pub mobile: bool,
}

impl ExplorerState {
    /// Overlay is shown for an open panel, or for the nav drawer on mobile.
    pub fn overlay_visible(&self) -> bool {
        self.panel_open || (self.mobile && self.nav_open)
    }

    /// Nav drawer attributes. Desktop always shows the folder list.
    pub fn nav_presentation(&self) -> NavPresentation {
        NavPresentation {
            root_open: self.nav_open && self.mobile,
            folders_hidden: self.mobile && !self.nav_open,
            toggle_expanded: self.nav_open,
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Explorer controller for one page.
pub struct Explorer<V, B> {
    view: V,
    back_stack: B,
    state: ExplorerState,
}

impl<V: ExplorerView, B: BackStack> Explorer<V, B> {
    /// Attach to a view with every surface closed.
    pub fn setup(view: V, back_stack: B, current_slug: impl Into<String>, mobile: bool) -> Self {
        let mut explorer = Self {
            view,
            back_stack,
            state: ExplorerState {
                current_slug: current_slug.into(),
                mobile,
                ..Default::default()
            },
        };
        explorer.apply_nav();
        explorer.close_panel_now();
        explorer
    }

    #[cfg(test)]
    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    pub fn is_mobile(&self) -> bool {
        self.state.mobile
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[cfg(test)]
    pub fn back_stack(&self) -> &B {
        &self.back_stack
    }

    // -------------------------------------------------------------------------
    // Panel
    // -------------------------------------------------------------------------

    /// Fill and open the panel for `target` from a loaded page index.
    ///
    /// On mobile, pushes a dismissible back-stack entry unless one is
    /// already active.
    pub fn show_panel(&mut self, target: &FolderTarget, index: &ContentIndex) {
        let entries = listing::panel_entries(index, &target.slug, &self.state.current_slug);
        self.view.render_panel(&target.name, &entries);

        self.state.active = Some(target.clone());
        self.view.set_active(Some(target));

        self.state.panel_open = true;
        self.view.set_panel_open(true);

        if self.state.mobile && !self.state.history_active {
            self.back_stack.push_dismissible();
            self.state.history_active = true;
        }

        self.sync_overlay();
    }

    /// Close the panel.
    ///
    /// With `via_history` and an active back-stack entry, this only starts
    /// the platform back navigation; the panel closes in
    /// [`Explorer::history_popped`].
    pub fn close_panel(&mut self, via_history: bool) {
        if via_history && self.state.history_active {
            self.state.history_active = false;
            self.back_stack.go_back();
        } else {
            self.close_panel_now();
        }
    }

    fn close_panel_now(&mut self) {
        self.view.set_panel_open(false);
        self.state.panel_open = false;
        self.state.history_active = false;
        self.state.active = None;
        self.view.set_active(None);
        self.sync_overlay();
    }

    // -------------------------------------------------------------------------
    // Nav drawer
    // -------------------------------------------------------------------------

    pub fn open_nav(&mut self) {
        self.set_nav(true);
    }

    pub fn close_nav(&mut self) {
        self.set_nav(false);
    }

    pub fn toggle_nav(&mut self) {
        self.set_nav(!self.state.nav_open);
    }

    fn set_nav(&mut self, open: bool) {
        self.state.nav_open = open;
        self.apply_nav();
        self.sync_overlay();
    }

    fn apply_nav(&mut self) {
        self.view.set_nav(self.state.nav_presentation());
    }

    /// Recompute derived overlay visibility.
    pub fn sync_overlay(&mut self) {
        self.view.set_overlay_visible(self.state.overlay_visible());
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Panel back button.
    pub fn back_pressed(&mut self) {
        self.close_panel(true);
    }

    /// Reopen the nav drawer after the panel back button (mobile only).
    pub fn reopen_nav_after_back(&mut self) {
        if self.state.mobile && !self.state.nav_open {
            self.open_nav();
        }
    }

    /// Overlay click: dismiss the panel first, then the nav drawer.
    pub fn overlay_clicked(&mut self) {
        if self.state.panel_open {
            self.close_panel(true);
        } else if self.state.nav_open {
            self.close_nav();
        }
    }

    /// Browser history pop.
    ///
    /// Only one dismissible entry can exist, so any pop while the panel is
    /// open is treated as that entry.
    pub fn history_popped(&mut self) {
        if !self.state.panel_open {
            return;
        }
        self.state.history_active = false;
        self.close_panel_now();
    }

    /// Host is about to swap page content.
    pub fn before_navigation(&mut self) {
        if self.state.panel_open {
            self.close_panel_now();
        }
        if self.state.nav_open && self.state.mobile {
            self.close_nav();
        }
    }

    /// Viewport crossed the mobile breakpoint. `nav_open` is kept.
    pub fn viewport_changed(&mut self, mobile: bool) {
        self.state.mobile = mobile;
        self.apply_nav();
        self.sync_overlay();
    }
}
