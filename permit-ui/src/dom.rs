//! Browser helpers via `web-sys`.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smoothly scroll the element with `element_id` to the top of the viewport.
pub fn scroll_into_view(element_id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document available to scroll to #{}", element_id);
        return;
    };
    let Some(element) = document.get_element_by_id(element_id) else {
        log::warn!("cannot scroll to missing element #{}", element_id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
