//! Internal DOM focus, scroll-lock, and overlay-session helpers.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::should_close_on_key;

/// Elements that can receive keyboard focus inside a dialog.
pub(crate) const FOCUSABLE_SELECTOR: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// Focuses the first enabled focusable descendant, if any.
pub(crate) fn focus_first_focusable(container: &web_sys::Element) {
    let nodes = match container.query_selector_all(FOCUSABLE_SELECTOR) {
        Ok(nodes) => nodes,
        Err(err) => {
            logging::warn!("focusable lookup failed: {err:?}");
            return;
        }
    };

    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        if element.has_attribute("disabled") {
            continue;
        }
        if let Err(err) = element.focus() {
            logging::warn!("dialog focus failed: {err:?}");
        }
        return;
    }
}

fn document_body() -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
}

/// Hides document scrolling until dropped, then restores the previous inline value.
pub(crate) struct ScrollLock {
    original_overflow: String,
}

impl ScrollLock {
    pub(crate) fn acquire() -> Option<Self> {
        let body = document_body()?;
        let style = body.style();
        let original_overflow = style.get_property_value("overflow").unwrap_or_default();
        let _ = style.set_property("overflow", "hidden");
        Some(Self { original_overflow })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let Some(body) = document_body() else {
            return;
        };
        let style = body.style();
        if self.original_overflow.is_empty() {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", &self.original_overflow);
        }
    }
}

/// Document-level side effects held while an overlay is open.
///
/// Dropping the session releases the scroll lock and removes the Escape
/// listener regardless of how the overlay was closed.
pub(crate) struct OverlaySession {
    _scroll_lock: Option<ScrollLock>,
    escape_listener: Option<WindowListenerHandle>,
}

impl OverlaySession {
    pub(crate) fn begin(close_on_escape: bool, on_escape: Callback<()>) -> Self {
        let escape_listener = close_on_escape.then(|| {
            window_event_listener(ev::keydown, move |ev| {
                if should_close_on_key(&ev.key(), close_on_escape) {
                    on_escape.call(());
                }
            })
        });

        Self {
            _scroll_lock: ScrollLock::acquire(),
            escape_listener,
        }
    }
}

impl Drop for OverlaySession {
    fn drop(&mut self) {
        if let Some(listener) = self.escape_listener.take() {
            listener.remove();
        }
    }
}

/// Shared slot for the session of one overlay instance.
pub(crate) type OverlaySlot = Rc<RefCell<Option<OverlaySession>>>;
