//! Pure accept/redirect decisions shared by the trap's managers.
//!
//! The web layer reduces each DOM event to a handful of facts (containment,
//! target kind, keyboard state) and asks these functions what to do. Keeping
//! the branching here makes every path natively testable without a browser.

use crate::direction::Direction;

/// What the Initial-Focus Manager should do once its deferred tick runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialFocusAction {
    /// Focus is already where it belongs; record it and stop.
    KeepCurrent,
    /// Move focus to the caller-specified target.
    FocusCandidate,
    /// Move focus to the first focusable descendant of the container.
    FocusFirstDescendant,
}

/// Decide the initial-focus move from the observed facts.
///
/// `candidate_is_active` implies `has_candidate`; callers derive both from
/// the same snapshot of the document's active element.
#[must_use]
pub fn initial_focus_decision(
    has_candidate: bool,
    candidate_is_active: bool,
    container_holds_active: bool,
) -> InitialFocusAction {
    if candidate_is_active || (!has_candidate && container_holds_active) {
        InitialFocusAction::KeepCurrent
    } else if has_candidate {
        InitialFocusAction::FocusCandidate
    } else {
        InitialFocusAction::FocusFirstDescendant
    }
}

/// Where a focus-landing event's target sits relative to the trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTargetKind {
    /// Focus landed on nothing element-like.
    NonElement,
    /// Target is inside the effective container set.
    Inside,
    /// Target escaped every container.
    Outside,
}

/// Focus-Lock Manager verdict for one focus-landing event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockAction {
    /// Nothing recorded to lock against yet.
    Ignore,
    /// Target is legitimate; it becomes the new previous-active element.
    Accept,
    /// Focus landed on nothing; pull it back without touching the event.
    Revert,
    /// Target escaped the set; cancel the event and pull focus back.
    CancelAndRevert,
}

#[must_use]
pub fn lock_decision(has_previous: bool, target: FocusTargetKind) -> LockAction {
    if !has_previous {
        return LockAction::Ignore;
    }
    match target {
        FocusTargetKind::NonElement => LockAction::Revert,
        FocusTargetKind::Inside => LockAction::Accept,
        FocusTargetKind::Outside => LockAction::CancelAndRevert,
    }
}

/// Classification of a focus-out event's related target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelatedTargetKind {
    /// No related target on the event.
    Absent,
    /// A boundary sentinel; its own handler owns the redirect.
    FocusGuard,
    /// Focus moved to a legitimate sibling within the container set.
    Inside,
    /// Focus is leaving the trap.
    Outside,
}

/// Blur handler verdict when focus leaves the trap root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeAction {
    Ignore,
    /// Keyboard-driven escape: step from the anchor element, wrapping.
    StepFrom(Direction),
    /// Pointer or programmatic escape: re-enter at the anchor element.
    Reenter,
}

#[must_use]
pub fn escape_decision(
    related: RelatedTargetKind,
    keyboard_driven: bool,
    direction: Direction,
) -> EscapeAction {
    match related {
        RelatedTargetKind::Absent | RelatedTargetKind::FocusGuard | RelatedTargetKind::Inside => {
            EscapeAction::Ignore
        }
        RelatedTargetKind::Outside => {
            if keyboard_driven {
                EscapeAction::StepFrom(direction)
            } else {
                EscapeAction::Reenter
            }
        }
    }
}
