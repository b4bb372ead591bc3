use bitflags::bitflags;

bitflags! {
    /// Feature bitmask gating the trap's managers independently.
    ///
    /// Each flag enables exactly one manager; flags can be combined with the
    /// usual bitwise operators. `ALL` is the bitwise OR of the four flags and
    /// is the default for a newly mounted trap.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Features: u8 {
        /// Move focus into the trap when it activates.
        const INITIAL_FOCUS = 1 << 0;
        /// Bracket the trapped region with sentinels that wrap Tab order.
        const TAB_LOCK = 1 << 1;
        /// Intercept document-level focus changes and pull escapes back.
        const FOCUS_LOCK = 1 << 2;
        /// Capture the pre-trap active element and restore it on teardown.
        const RESTORE_FOCUS = 1 << 3;
    }
}

impl Features {
    /// No managers enabled; the trap renders its content untouched.
    pub const NONE: Self = Self::empty();
    /// Every manager enabled.
    pub const ALL: Self = Self::all();
}

impl Default for Features {
    fn default() -> Self {
        Self::ALL
    }
}
