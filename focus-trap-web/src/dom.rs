use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// Attribute marking a boundary sentinel. Blur handling ignores elements
/// carrying it so an internal sentinel hop never counts as an escape.
pub const FOCUS_GUARD_ATTR: &str = "data-focus-guard";

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// The document's currently focused element, if it is an element at all.
#[must_use]
pub fn active_element() -> Option<HtmlElement> {
    document()
        .active_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Whether the element is one of the trap's boundary sentinels.
#[must_use]
pub fn is_focus_guard(el: &Element) -> bool {
    el.has_attribute(FOCUS_GUARD_ATTR)
}
