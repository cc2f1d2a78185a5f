//! Per-field matching toggles.
//!
//! `MatchFlags` hold the four switches the matching engine consults for a
//! destination field. A unit-wide default is refined by `ScopedFlags`
//! overrides that target a field path (and everything nested under it).

use bitflags::bitflags;

use crate::NamePattern;

bitflags! {
    /// Matching switches for one destination field context.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct MatchFlags: u8 {
        /// Names must match with identical letter case.
        const EXACT_CASE = 1 << 0;
        /// Source getters (`Name()`) are candidates for structural matches.
        const GETTER = 1 << 1;
        /// Types with `String() string` may be stringified.
        const STRINGER = 1 << 2;
        /// Convertible but unassignable values may be cast.
        const TYPECAST = 1 << 3;
    }
}

impl Default for MatchFlags {
    fn default() -> Self {
        MatchFlags::EXACT_CASE
    }
}

impl MatchFlags {
    #[inline]
    pub fn exact_case(self) -> bool {
        self.contains(MatchFlags::EXACT_CASE)
    }

    #[inline]
    pub fn getter(self) -> bool {
        self.contains(MatchFlags::GETTER)
    }

    #[inline]
    pub fn stringer(self) -> bool {
        self.contains(MatchFlags::STRINGER)
    }

    #[inline]
    pub fn typecast(self) -> bool {
        self.contains(MatchFlags::TYPECAST)
    }

    /// Return a copy with `flag` switched on or off.
    #[must_use]
    pub fn with(mut self, flag: MatchFlags, on: bool) -> Self {
        self.set(flag, on);
        self
    }
}

/// Flags to force on and off, applied on top of a base set.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FlagOverrides {
    pub enable: MatchFlags,
    pub disable: MatchFlags,
}

impl FlagOverrides {
    pub fn apply(self, base: MatchFlags) -> MatchFlags {
        (base | self.enable) - self.disable
    }

    /// Record an explicit on/off setting for `flag`.
    #[must_use]
    pub fn set(mut self, flag: MatchFlags, on: bool) -> Self {
        if on {
            self.enable |= flag;
            self.disable -= flag;
        } else {
            self.disable |= flag;
            self.enable -= flag;
        }
        self
    }
}

/// Overrides that apply to destination paths matching `pattern`.
#[derive(Clone, Debug)]
pub struct ScopedFlags {
    pub pattern: NamePattern,
    pub overrides: FlagOverrides,
}
