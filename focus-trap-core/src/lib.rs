#![forbid(unsafe_code)]
//! Focus-trap state machine
//!
//! Platform-agnostic logic for confining keyboard focus to a region of an
//! interactive document: the feature bitmask gating the trap's managers, the
//! tab-navigation direction, the pure accept/redirect decisions each manager
//! makes, and the watch/diff cell used to react to flag transitions. No DOM
//! types appear here; the web crate maps events onto these decisions.

pub mod decision;
pub mod direction;
pub mod features;
pub mod watch;

pub use decision::{
    EscapeAction, FocusTargetKind, InitialFocusAction, LockAction, RelatedTargetKind,
    escape_decision, initial_focus_decision, lock_decision,
};
pub use direction::Direction;
pub use features::Features;
pub use watch::{Transition, Watch};
