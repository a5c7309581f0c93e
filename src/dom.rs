//! Browser boundary: scroll geometry reads, smooth in-page navigation, the
//! body scroll lock and the window scroll listener. Every lookup degrades to
//! a silent no-op when the element (or the window itself) is missing.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::state::{Section, SectionBounds};

/// One reading of the viewport scroll geometry.
#[derive(Clone, Copy, Debug)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub viewport: f64,
    pub full_height: f64,
}

pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = window()?;
    let offset = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let full_height = window.document()?.document_element()?.scroll_height() as f64;
    Some(ScrollMetrics { offset, viewport, full_height })
}

/// Measures every section element currently in the DOM, in declaration
/// order. Sections without an element are skipped.
pub fn section_bounds() -> Vec<SectionBounds> {
    let mut bounds = Vec::with_capacity(Section::ALL.len());
    let Some(document) = window().and_then(|w| w.document()) else {
        return bounds;
    };
    for section in Section::ALL {
        let Some(element) = document.get_element_by_id(section.id()) else {
            continue;
        };
        if let Ok(element) = element.dyn_into::<HtmlElement>() {
            bounds.push(SectionBounds {
                section,
                top: element.offset_top() as f64,
                height: element.offset_height() as f64,
            });
        }
    }
    bounds
}

/// Smooth-scrolls the viewport so `section` lands just below the fixed nav.
/// The nav height is measured on every call since it varies with viewport
/// width. Missing section element means nothing happens.
pub fn scroll_to_section(section: Section) {
    let Some(window) = window() else { return };
    let Some(document) = window.document() else { return };
    let Some(element) = document.get_element_by_id(section.id()) else {
        return;
    };
    let nav_height = document
        .query_selector("nav")
        .ok()
        .flatten()
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| nav.offset_height() as f64)
        .unwrap_or(0.0);
    let element_top = element.get_bounding_client_rect().top();
    let page_offset = window.page_y_offset().unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(element_top + page_offset - nav_height);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Where the scroll lock writes to. Split out so the lock pairing rules can
/// be exercised without a document.
pub trait OverflowTarget {
    fn set_hidden(&mut self, hidden: bool);
}

/// The real document body.
#[derive(Default)]
pub struct BodyOverflow;

impl OverflowTarget for BodyOverflow {
    fn set_hidden(&mut self, hidden: bool) {
        let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let value = if hidden { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", value);
    }
}

/// Pairs scroll-lock writes with modal open/close edges. Feeding it the same
/// openness twice (e.g. the modal swapping posts) writes nothing, so the lock
/// engages exactly once per open/close cycle.
pub struct ScrollLock<T = BodyOverflow> {
    target: T,
    engaged: bool,
}

impl<T: OverflowTarget> ScrollLock<T> {
    pub fn new(target: T) -> Self {
        Self { target, engaged: false }
    }

    pub fn sync(&mut self, open: bool) {
        if open != self.engaged {
            self.engaged = open;
            self.target.set_hidden(open);
        }
    }
}

/// Window scroll subscription tied to a value's lifetime: dropping the handle
/// removes the DOM listener, so repeated mount cycles cannot leak handlers.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    /// Registers `handler` for window scroll events, firing it once up front
    /// so state reflects the initial scroll position.
    pub fn attach<F>(mut handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        handler();
        let window = window()?;
        let callback = Closure::<dyn FnMut()>::new(handler);
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every overflow write.
    #[derive(Default)]
    struct Recorder(Vec<bool>);

    impl OverflowTarget for Recorder {
        fn set_hidden(&mut self, hidden: bool) {
            self.0.push(hidden);
        }
    }

    #[test]
    fn open_then_close_restores_the_lock() {
        let mut lock = ScrollLock::new(Recorder::default());
        lock.sync(true);
        lock.sync(false);
        assert_eq!(lock.target.0, vec![true, false]);
    }

    #[test]
    fn replacing_the_open_post_engages_the_lock_once() {
        let mut lock = ScrollLock::new(Recorder::default());
        // Open post p, then open post q without closing in between
        lock.sync(true);
        lock.sync(true);
        assert_eq!(lock.target.0, vec![true]);
    }

    #[test]
    fn closing_while_closed_writes_nothing() {
        let mut lock = ScrollLock::new(Recorder::default());
        lock.sync(false);
        assert!(lock.target.0.is_empty());
    }
}
