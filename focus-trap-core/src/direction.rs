/// Keyboard navigation direction, inferred from the most recent Tab keypress.
///
/// Consulted when a boundary sentinel or an escaping blur has to decide which
/// end of the trapped region should receive focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Plain Tab.
    #[default]
    Forwards,
    /// Shift+Tab.
    Backwards,
}

impl Direction {
    /// Direction implied by a Tab keypress with the given shift state.
    #[must_use]
    pub fn from_tab(shift_key: bool) -> Self {
        if shift_key {
            Self::Backwards
        } else {
            Self::Forwards
        }
    }
}
