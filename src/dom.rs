//! Read/write access to the page structure. Everything here tolerates
//! missing elements: a partial page keeps working with the wiring that
//! still applies.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config;
use crate::section_tracker::Section;

/// Fired on the window whenever in-page navigation happens, from whichever
/// anchor triggered it. The nav collapses its mobile menu on this signal.
pub const NAVIGATED_EVENT: &str = "netpulse:navigated";

/// Measures every `section[id]` on the page. Called before each event
/// dispatch so extents stay correct across reflows (image loads, resizes).
pub fn query_sections(document: &Document) -> Vec<Section> {
    let mut sections = Vec::new();
    if let Ok(nodes) = document.query_selector_all("section[id]") {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                sections.push(Section {
                    id: el.id(),
                    top: el.offset_top() as f64,
                    height: el.offset_height() as f64,
                });
            }
        }
    }
    sections
}

/// Height of the fixed site header, or the configured fallback when the
/// header is absent.
pub fn header_offset(document: &Document) -> f64 {
    document
        .query_selector(".site-header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(config::HEADER_FALLBACK_PX)
}

/// Smooth-scrolls the window to a vertical offset. Fire and forget; the
/// browser animates on its own and nothing waits for it to settle.
pub fn scroll_to_y(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top.max(0.0));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Broadcasts [`NAVIGATED_EVENT`] on the window.
pub fn signal_navigation(window: &Window) {
    if let Ok(event) = Event::new(NAVIGATED_EVENT) {
        let _ = window.dispatch_event(&event);
    }
}
