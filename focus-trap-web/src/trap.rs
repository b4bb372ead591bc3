//! Trap runtime state and the handlers its managers share.
//!
//! One [`TrapState`] lives behind an `Rc<RefCell<..>>` per mounted trap. The
//! handlers here are careful to drop the borrow before any `.focus()` call:
//! focusing dispatches `focusin` synchronously, which re-enters the document
//! listener and would otherwise hit a reborrow. Redirect loops stay finite
//! because focusing the already-active element is a platform-level no-op.

use focus_trap_core::{
    Direction, EscapeAction, Features, FocusTargetKind, InitialFocusAction, LockAction,
    RelatedTargetKind, Watch, escape_decision, initial_focus_decision, lock_decision,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, FocusEvent, HtmlElement, KeyboardEvent};
use yew::NodeRef;

use crate::containers::ExtraContainers;
use crate::dom;
use crate::walker::{self, FocusInOptions, FocusTarget};

/// Runtime state shared by the trap's managers.
pub struct TrapState {
    root: NodeRef,
    containers: ExtraContainers,
    features: Features,
    /// Last element verified to be legitimately focused inside the trap.
    previous_active: Option<HtmlElement>,
    /// Element focused immediately before activation; restored on teardown.
    restore_to: Option<HtmlElement>,
    direction: Direction,
    /// True for one animation frame after a Tab keypress, so a blur can be
    /// attributed to keyboard navigation rather than pointer or script.
    tab_recently_used: bool,
    alive: bool,
    restore_watch: Watch<bool>,
}

/// Shared handle to one mounted trap's state.
pub type SharedTrap = Rc<RefCell<TrapState>>;

impl TrapState {
    #[must_use]
    pub fn new(root: NodeRef, containers: ExtraContainers, features: Features) -> Self {
        Self {
            root,
            containers,
            features,
            previous_active: None,
            restore_to: None,
            direction: Direction::default(),
            tab_recently_used: false,
            alive: true,
            restore_watch: Watch::immediate(),
        }
    }

    /// Whether the element sits inside the effective container set
    /// (extra containers plus the trap root), computed fresh per call.
    fn contains(&self, el: &Element) -> bool {
        let root_holds = self
            .root
            .cast::<Element>()
            .is_some_and(|root| root.contains(Some(el)));
        root_holds
            || self
                .containers
                .elements()
                .iter()
                .any(|c| c.contains(Some(el)))
    }

    fn enabled(&self, flag: Features) -> bool {
        self.alive && self.features.contains(flag)
    }
}

/// Re-sync externally owned inputs after a render.
pub fn configure(trap: &SharedTrap, root: NodeRef, features: Features, containers: ExtraContainers) {
    let mut state = trap.borrow_mut();
    state.root = root;
    state.features = features;
    state.containers = containers;
}

/// Evaluate the RestoreFocus flag edge: capture the active element when the
/// flag turns on (including a flag that starts on), restore when it turns off.
pub fn evaluate_restore_flag(trap: &SharedTrap) {
    let transition = {
        let mut state = trap.borrow_mut();
        let enabled = state.features.contains(Features::RESTORE_FOCUS);
        state.restore_watch.check(enabled)
    };
    let Some(transition) = transition else { return };
    if transition.current {
        let mut state = trap.borrow_mut();
        if state.restore_to.is_none() {
            state.restore_to = dom::active_element();
        }
    } else if transition.previous == Some(true) {
        restore_if_captured(trap);
    }
}

/// Move focus back to the captured pre-trap element, if any, and clear it.
pub fn restore_if_captured(trap: &SharedTrap) {
    let captured = trap.borrow_mut().restore_to.take();
    if let Some(el) = captured {
        walker::focus_element(&el);
    }
}

/// Tear the trap down: further deferred work aborts, and the pre-trap
/// element gets focus back if one was captured.
pub fn destroy(trap: &SharedTrap) {
    trap.borrow_mut().alive = false;
    restore_if_captured(trap);
}

/// Schedule the initial-focus decision one microtask out, so it neither
/// interrupts an in-flight transition nor scrolls an element still being
/// laid out. The deferred body re-checks liveness before acting.
pub fn schedule_initial_focus(trap: &SharedTrap, target: Option<NodeRef>) {
    let trap = trap.clone();
    wasm_bindgen_futures::spawn_local(async move {
        apply_initial_focus(&trap, target.as_ref());
    });
}

/// Initial-Focus Manager body. Moves focus at most once per trigger.
fn apply_initial_focus(trap: &SharedTrap, target: Option<&NodeRef>) {
    let (root, candidate, action) = {
        let state = trap.borrow();
        if !state.enabled(Features::INITIAL_FOCUS) {
            return;
        }
        let Some(root) = state.root.cast::<Element>() else {
            return;
        };
        let active = dom::active_element();
        let candidate = target.and_then(NodeRef::cast::<HtmlElement>);
        let candidate_is_active =
            matches!((&candidate, &active), (Some(c), Some(a)) if c == a);
        let container_holds_active = active
            .as_ref()
            .is_some_and(|a| state.contains(a.as_ref()));
        let action = initial_focus_decision(
            candidate.is_some(),
            candidate_is_active,
            container_holds_active,
        );
        (root, candidate, action)
    };

    match action {
        InitialFocusAction::KeepCurrent => {}
        InitialFocusAction::FocusCandidate => {
            if let Some(el) = &candidate {
                walker::focus_element(el);
            }
        }
        InitialFocusAction::FocusFirstDescendant => {
            let opts = FocusInOptions {
                no_scroll: true,
                ..FocusInOptions::default()
            };
            if walker::focus_in(&root, FocusTarget::First, &opts).is_err() {
                log::warn!(
                    "focus trap activated with no focusable descendant; leaving focus unchanged"
                );
            }
        }
    }

    // Record whatever now holds focus as the previous-active element, as
    // long as it actually lies in the container set or is the candidate.
    let now = dom::active_element();
    let mut state = trap.borrow_mut();
    let legitimate = now.as_ref().is_some_and(|el| {
        candidate.as_ref() == Some(el) || state.contains(el.as_ref())
    });
    if legitimate {
        state.previous_active = now;
    }
}

/// Focus-Lock Manager: document-level capturing `focusin` handler.
pub fn on_document_focusin(trap: &SharedTrap, event: &Event) {
    let (action, target, previous) = {
        let state = trap.borrow();
        if !state.enabled(Features::FOCUS_LOCK) {
            return;
        }
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok());
        let kind = match &target {
            None => FocusTargetKind::NonElement,
            Some(el) if state.contains(el.as_ref()) => FocusTargetKind::Inside,
            Some(_) => FocusTargetKind::Outside,
        };
        let previous = state.previous_active.clone();
        (lock_decision(previous.is_some(), kind), target, previous)
    };

    match action {
        LockAction::Ignore => {}
        LockAction::Accept => {
            if let Some(el) = target {
                trap.borrow_mut().previous_active = Some(el.clone());
                // Idempotent reassertion; a no-op when el is already active.
                walker::focus_element(&el);
            }
        }
        LockAction::Revert => {
            if let Some(prev) = previous {
                walker::focus_element(&prev);
            }
        }
        LockAction::CancelAndRevert => {
            event.prevent_default();
            event.stop_propagation();
            if let Some(prev) = previous {
                walker::focus_element(&prev);
            }
        }
    }
}

/// Track Tab keypresses on the trap root: remember the direction and raise
/// the recently-used-Tab flag until the next animation frame.
pub fn on_root_keydown(trap: &SharedTrap, event: &KeyboardEvent) {
    if event.key() != "Tab" {
        return;
    }
    {
        let mut state = trap.borrow_mut();
        if !state.enabled(Features::TAB_LOCK) {
            return;
        }
        state.direction = Direction::from_tab(event.shift_key());
        state.tab_recently_used = true;
    }
    schedule_tab_flag_reset(trap);
}

fn schedule_tab_flag_reset(trap: &SharedTrap) {
    let trap = trap.clone();
    let reset = Closure::once_into_js(move || {
        trap.borrow_mut().tab_recently_used = false;
    });
    let _ = dom::window().request_animation_frame(reset.unchecked_ref());
}

/// Boundary Guard: a sentinel received focus, so Tab order wrapped at a DOM
/// boundary. Redirect synchronously to the first or last focusable
/// descendant per the tracked direction, skipping the element that just
/// lost focus.
pub fn on_guard_focus(trap: &SharedTrap, event: &FocusEvent) {
    let (root, direction, skip) = {
        let state = trap.borrow();
        if !state.enabled(Features::TAB_LOCK) {
            return;
        }
        let Some(root) = state.root.cast::<Element>() else {
            return;
        };
        let skip = event
            .related_target()
            .and_then(|t| t.dyn_into::<Element>().ok());
        (root, state.direction, skip)
    };

    let opts = FocusInOptions {
        skip: skip.into_iter().collect(),
        wrap_around: true,
        ..FocusInOptions::default()
    };
    if let Ok(el) = walker::focus_in(&root, FocusTarget::entering(direction), &opts) {
        trap.borrow_mut().previous_active = Some(el);
    }
}

/// Blur handler on the trap root: decide whether a focus-out is an internal
/// hop, a legitimate sibling move, or an escape that needs redirecting.
pub fn on_root_focusout(trap: &SharedTrap, event: &FocusEvent) {
    let (action, root, anchor) = {
        let state = trap.borrow();
        if !state.enabled(Features::TAB_LOCK) {
            return;
        }
        let related = event
            .related_target()
            .and_then(|t| t.dyn_into::<Element>().ok());
        let kind = match &related {
            None => RelatedTargetKind::Absent,
            Some(el) if dom::is_focus_guard(el) => RelatedTargetKind::FocusGuard,
            Some(el) if state.contains(el) => RelatedTargetKind::Inside,
            Some(_) => RelatedTargetKind::Outside,
        };
        let action = escape_decision(kind, state.tab_recently_used, state.direction);
        let anchor = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok());
        (action, state.root.cast::<Element>(), anchor)
    };

    match action {
        EscapeAction::Ignore => {}
        EscapeAction::StepFrom(direction) => {
            let (Some(root), Some(anchor)) = (root, anchor) else {
                return;
            };
            let opts = FocusInOptions {
                relative_to: Some(anchor.into()),
                wrap_around: true,
                ..FocusInOptions::default()
            };
            if let Ok(el) = walker::focus_in(&root, FocusTarget::stepping(direction), &opts) {
                trap.borrow_mut().previous_active = Some(el);
            }
        }
        EscapeAction::Reenter => {
            if let Some(el) = anchor {
                trap.borrow_mut().previous_active = Some(el.clone());
                walker::focus_element(&el);
            }
        }
    }
}
