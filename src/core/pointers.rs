//! The six saturating byte-position counters threaded through every step.

/// A single saturating counter, 0 up to and including `MAX`.
///
/// Each of the six pointers named in the data model (`rcip`, `rcop`, `rbip`,
/// `rbop`, `ruip`, `ruop`) is one of these. Saturating at `MAX` (rather than
/// wrapping or panicking) is what lets a write past the end of an encoding
/// report "no further progress possible" without the caller needing to track
/// the limit itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub(crate) struct Pointer<const MAX: u8>(u8);

impl<const MAX: u8> Pointer<MAX> {
    pub(crate) const ZERO: Self = Self(0);

    pub(crate) const fn get(self) -> u8 {
        self.0
    }

    pub(crate) const fn is_saturated(self) -> bool {
        self.0 >= MAX
    }

    /// Advances by one, returning whether the advance actually happened.
    ///
    /// Mirrors the register's own saturation: once a pointer is at `MAX`,
    /// further writes are rejected (the register is left untouched and the
    /// host is expected to notice via `retry`).
    #[must_use]
    pub(crate) fn advance(&mut self) -> bool {
        if self.is_saturated() {
            false
        } else {
            self.0 += 1;
            true
        }
    }

    pub(crate) fn reset(&mut self) {
        self.0 = 0;
    }

    pub(crate) fn set(&mut self, value: u8) {
        debug_assert!(value <= MAX);
        self.0 = value;
    }
}

/// The six pointers: input/output position for each of the three encodings.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Pointers {
    /// UTF-32 bytes written (0..=4).
    pub(crate) rcip: Pointer<4>,
    /// UTF-32 bytes read (0..=4).
    pub(crate) rcop: Pointer<4>,
    /// UTF-8 bytes consumed / encoded length (0..=6).
    pub(crate) rbip: Pointer<6>,
    /// UTF-8 bytes read (0..=6).
    pub(crate) rbop: Pointer<6>,
    /// UTF-16 bytes written / encoded length (0..=4).
    pub(crate) ruip: Pointer<4>,
    /// UTF-16 bytes read (0..=4).
    pub(crate) ruop: Pointer<4>,
}

impl Pointers {
    pub const fn new() -> Self {
        Self {
            rcip: Pointer::ZERO,
            rcop: Pointer::ZERO,
            rbip: Pointer::ZERO,
            rbop: Pointer::ZERO,
            ruip: Pointer::ZERO,
            ruop: Pointer::ZERO,
        }
    }

    /// Zeroes the three input pointers and the three output pointers.
    pub(crate) fn reset_all(&mut self) {
        *self = Self::new();
    }

    /// Zeroes only the three output pointers (`reset_read` request).
    pub(crate) fn reset_read(&mut self) {
        self.rcop.reset();
        self.rbop.reset();
        self.ruop.reset();
    }

    pub const fn rcip(&self) -> u8 {
        self.rcip.get()
    }
    pub const fn rcop(&self) -> u8 {
        self.rcop.get()
    }
    pub const fn rbip(&self) -> u8 {
        self.rbip.get()
    }
    pub const fn rbop(&self) -> u8 {
        self.rbop.get()
    }
    pub const fn ruip(&self) -> u8 {
        self.ruip.get()
    }
    pub const fn ruop(&self) -> u8 {
        self.ruop.get()
    }

    /// `cin_eof`: the UTF-32 input pointer has reached its 4-byte limit.
    pub const fn cin_eof(&self) -> bool {
        self.rcip.is_saturated()
    }
    /// `cout_eof`: the UTF-32 output pointer has reached its 4-byte limit.
    pub const fn cout_eof(&self) -> bool {
        self.rcop.is_saturated()
    }
    /// `bin_eof`: the UTF-8 input pointer has reached its 6-byte limit.
    pub const fn bin_eof(&self) -> bool {
        self.rbip.is_saturated()
    }
    /// `bout_eof`: every encoded UTF-8 byte (per `rbip`) has been read.
    pub const fn bout_eof(&self) -> bool {
        self.rbop.get() >= self.rbip.get()
    }
    /// `uin_eof`: the UTF-16 input pointer has reached its 4-byte limit.
    pub const fn uin_eof(&self) -> bool {
        self.ruip.is_saturated()
    }
    /// `uout_eof`: every encoded UTF-16 byte (per `ruip`) has been read.
    pub const fn uout_eof(&self) -> bool {
        self.ruop.get() >= self.ruip.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_saturates_and_reports_no_progress() {
        let mut p: Pointer<4> = Pointer::ZERO;
        for _ in 0..4 {
            assert!(p.advance());
        }
        assert!(p.is_saturated());
        assert!(!p.advance());
        assert_eq!(p.get(), 4);
    }

    #[test]
    fn reset_read_leaves_input_pointers_alone() {
        let mut ptrs = Pointers::new();
        ptrs.rcip.advance();
        ptrs.rcop.advance();
        ptrs.reset_read();
        assert_eq!(ptrs.rcip(), 1);
        assert_eq!(ptrs.rcop(), 0);
    }

    #[test]
    fn bout_eof_tracks_rbip_not_a_fixed_max() {
        let mut ptrs = Pointers::new();
        ptrs.rbip.set(3);
        assert!(!ptrs.bout_eof());
        ptrs.rbop.set(3);
        assert!(ptrs.bout_eof());
    }
}
