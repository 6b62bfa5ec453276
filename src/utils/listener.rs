//! Scoped DOM event listeners.
//!
//! An [`EventListener`] stays attached for as long as it is alive and is
//! removed from its target when dropped. Page-scoped handlers are collected
//! in a `Vec<EventListener>` owned by the page session, so tearing down the
//! session detaches all of them before the next page attaches its own.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Event, EventTarget};

/// A DOM event listener removed on drop.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Attach `handler` to `event` on `target`.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }

    /// Keep the listener attached for the lifetime of the app.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
