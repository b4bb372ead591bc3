//! Sequential focus-order walker.
//!
//! Finds and focuses the first/last/next/previous focusable descendant of a
//! root element, optionally skipping given elements, wrapping at the ends,
//! and suppressing the scroll a focus call would otherwise cause.

use focus_trap_core::Direction;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Element, FocusOptions, HtmlElement, Node};

use crate::dom;

/// Selector covering natively focusable elements plus explicit tab stops.
const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, textarea, select, [tabindex]:not([tabindex='-1'])";

/// The root has no focusable descendant matching the request.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no focusable candidate found within the container")]
pub struct NoFocusableCandidate;

/// Which focusable descendant to land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    First,
    Last,
    /// First candidate after the anchor in document order.
    Next,
    /// Last candidate before the anchor in document order.
    Previous,
}

impl FocusTarget {
    /// Boundary target when entering the region while travelling `direction`:
    /// a forward wrap lands on the first descendant, a backward one on the last.
    #[must_use]
    pub fn entering(direction: Direction) -> Self {
        match direction {
            Direction::Forwards => Self::First,
            Direction::Backwards => Self::Last,
        }
    }

    /// Step target for continuing to travel in `direction`.
    #[must_use]
    pub fn stepping(direction: Direction) -> Self {
        match direction {
            Direction::Forwards => Self::Next,
            Direction::Backwards => Self::Previous,
        }
    }
}

/// Options for one [`focus_in`] call.
#[derive(Debug, Default, Clone)]
pub struct FocusInOptions {
    /// Elements excluded from the candidate set.
    pub skip: Vec<Element>,
    /// Anchor for `Next`/`Previous`; defaults to the active element.
    pub relative_to: Option<Element>,
    /// Wrap to the opposite end when stepping past a boundary.
    pub wrap_around: bool,
    /// Focus without scrolling the candidate into view.
    pub no_scroll: bool,
}

/// Focus the requested descendant of `root`.
///
/// Returns the element that received focus, or [`NoFocusableCandidate`] when
/// the root holds nothing focusable matching the request.
///
/// # Errors
/// [`NoFocusableCandidate`] when no descendant satisfies `target` and `opts`.
pub fn focus_in(
    root: &Element,
    target: FocusTarget,
    opts: &FocusInOptions,
) -> Result<HtmlElement, NoFocusableCandidate> {
    let pool = candidates(root, &opts.skip);
    let pick = match target {
        FocusTarget::First => pool.first().cloned(),
        FocusTarget::Last => pool.last().cloned(),
        FocusTarget::Next => {
            let anchor = anchor_node(opts);
            match anchor {
                Some(anchor) => pool
                    .iter()
                    .find(|c| follows(&anchor, c.as_ref()))
                    .cloned()
                    .or_else(|| opts.wrap_around.then(|| pool.first().cloned()).flatten()),
                None => pool.first().cloned(),
            }
        }
        FocusTarget::Previous => {
            let anchor = anchor_node(opts);
            match anchor {
                Some(anchor) => pool
                    .iter()
                    .rev()
                    .find(|c| precedes(&anchor, c.as_ref()))
                    .cloned()
                    .or_else(|| opts.wrap_around.then(|| pool.last().cloned()).flatten()),
                None => pool.last().cloned(),
            }
        }
    };

    let el = pick.ok_or(NoFocusableCandidate)?;
    apply_focus(&el, opts.no_scroll);
    Ok(el)
}

/// Focus the element unconditionally. Focusing the already-active element is
/// a platform-level no-op, which is what keeps redirect loops finite.
pub fn focus_element(el: &HtmlElement) {
    let _ = el.focus();
}

/// First focusable descendant of `root`, without moving focus.
#[must_use]
pub fn first_focusable(root: &Element) -> Option<HtmlElement> {
    candidates(root, &[]).first().cloned()
}

/// Last focusable descendant of `root`, without moving focus.
#[must_use]
pub fn last_focusable(root: &Element) -> Option<HtmlElement> {
    candidates(root, &[]).last().cloned()
}

fn anchor_node(opts: &FocusInOptions) -> Option<Node> {
    opts.relative_to
        .clone()
        .map(Node::from)
        .or_else(|| dom::active_element().map(Node::from))
}

fn follows(anchor: &Node, candidate: &Node) -> bool {
    anchor.compare_document_position(candidate) & Node::DOCUMENT_POSITION_FOLLOWING != 0
}

fn precedes(anchor: &Node, candidate: &Node) -> bool {
    anchor.compare_document_position(candidate) & Node::DOCUMENT_POSITION_PRECEDING != 0
}

/// Focusable descendants of `root` in document order, minus sentinels,
/// disabled or hidden elements, and the explicit skip list.
fn candidates(root: &Element, skip: &[Element]) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for idx in 0..list.length() {
        let Some(node) = list.get(idx) else { continue };
        let Ok(el) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        if dom::is_focus_guard(el.as_ref()) || el.has_attribute("disabled") || el.hidden() {
            continue;
        }
        if skip.contains(AsRef::<Element>::as_ref(&el)) {
            continue;
        }
        out.push(el);
    }
    out
}

fn apply_focus(el: &HtmlElement, no_scroll: bool) {
    if no_scroll {
        let opts = FocusOptions::new();
        opts.set_prevent_scroll(true);
        let _ = el.focus_with_options(&opts);
    } else {
        let _ = el.focus();
    }
}
