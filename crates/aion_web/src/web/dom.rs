//! Window and document helpers. Missing targets are silent no-ops.

use aion_core::nav::Anchor;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

pub(super) fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub(super) fn scroll_to_anchor(anchor: Anchor) {
    scroll_to_id(anchor.id());
}

pub(super) fn scroll_to_id(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };

    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub(super) fn scroll_to_top() {
    if let Some(w) = web_sys::window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

pub(super) fn page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

pub(super) fn device_pixel_ratio() -> f64 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
}

/// Millisecond wall clock, used to seed the metric engine per page load.
pub(super) fn now_seed() -> u64 {
    js_sys::Date::now() as u64
}
