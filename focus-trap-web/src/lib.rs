#![forbid(unsafe_code)]
//! Keyboard focus confinement for Yew applications.
//!
//! The [`FocusTrap`] component keeps focus inside its rendered region: focus
//! starts inside it, cannot leave it via Tab order or programmatic `.focus()`
//! calls elsewhere in the document, and returns to its pre-trap location when
//! the trap is torn down. Each of those behaviors is gated by one flag of
//! [`Features`] and they all default to enabled.

pub mod containers;
pub mod dom;
pub mod focus_trap;
pub mod trap;
pub mod walker;

pub use containers::ExtraContainers;
pub use focus_trap::{FocusTrap, Props};
pub use focus_trap_core::{Direction, Features};
pub use walker::{FocusInOptions, FocusTarget, NoFocusableCandidate, focus_element, focus_in};
