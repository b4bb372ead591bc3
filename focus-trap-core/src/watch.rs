//! Explicit subscription/diff cell for reacting to input changes.
//!
//! A `Watch` remembers the last value it was fed and reports a `Transition`
//! whenever the value's identity changes. The immediate variant also fires on
//! the very first evaluation, as if transitioning from an unset state, which
//! is how flag-driven managers observe a flag that starts out enabled.

/// One observed change of a watched value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<T> {
    /// Value before the change; `None` on the initial immediate fire.
    pub previous: Option<T>,
    pub current: T,
}

#[derive(Debug)]
pub struct Watch<T> {
    last: Option<T>,
    fire_on_first: bool,
}

impl<T: PartialEq + Clone> Watch<T> {
    /// Watch that stays silent on its first evaluation.
    #[must_use]
    pub fn deferred() -> Self {
        Self {
            last: None,
            fire_on_first: false,
        }
    }

    /// Watch that fires on its first evaluation with `previous: None`.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            last: None,
            fire_on_first: true,
        }
    }

    /// Feed the current value; returns a transition if it changed.
    pub fn check(&mut self, current: T) -> Option<Transition<T>> {
        match self.last.replace(current.clone()) {
            None if self.fire_on_first => Some(Transition {
                previous: None,
                current,
            }),
            None => None,
            Some(previous) if previous != current => Some(Transition {
                previous: Some(previous),
                current,
            }),
            Some(_) => None,
        }
    }
}
