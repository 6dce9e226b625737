//! The status classifier: a pure, combinational mapping from a register value
//! to the region it lives in and the four status flags that follow from it.
//!
//! This is the single function the design notes call for: "an implementation
//! ... should expose a single function `classify(R, chk_range)` returning a
//! tagged variant over the regions ... and route state transitions through
//! it." Every decoder and encoder in this crate treats [`Region`] as the
//! ground truth — none of them track "how did we get here" separately.

use super::register::Register;

/// One of the disjoint, lexicographically contiguous regions the register's
/// 32-bit value space is partitioned into. Variant order matches the table's
/// row order, lowest addresses first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Region {
    /// `0x00000000..=0x0010FFFF`: a valid Unicode code point.
    ValidUnicode,
    /// `0x00110000..=0x7FFFFFFF`: a non-Unicode extended code point.
    NonUnicodeExtended,
    /// `0x80000000..=0xDDD7FFFF`: reserved, unreachable by any decoder.
    ReservedTopHalf,
    /// `0xDDD80000..=0xDDDBFFFF`: parked high surrogate plus one stray byte.
    Utf16PartialHighSurrogateStray,
    /// `0xDDDC0000..=0xDDDDDCFF`: reserved, unreachable.
    ReservedAfterSurrogatePark,
    /// `0xDDDDDD00..=0xDDDDDDFF`: parked single stray UTF-16 byte.
    Utf16PartialStray,
    /// `0xDDDDDE00..=0xEFFFFFFF`: reserved, unreachable.
    ReservedBelowOverlong6,
    /// `0xF0000000..=0xF3FFFFFF`: overlong 6-byte UTF-8.
    Overlong6,
    /// `0xF4000000..=0xF7FFFFFF`: reserved, unreachable.
    ReservedAfterOverlong6,
    /// `0xF8000000..=0xF81FFFFF`: overlong 5-byte UTF-8.
    Overlong5,
    /// `0xF8200000..=0xFBFFFFFF`: 5-byte UTF-8, non-canonical continuation.
    Invalid5Unmasked,
    /// `0xFC000000..=0xFDFFFFFF`: UTF-8 underflow, 5 of 6 bytes consumed.
    Utf8Underflow5Of6,
    /// `0xFE000000..=0xFFBFFFFF`: reserved, unreachable.
    ReservedBelowOverlong4,
    /// `0xFFC00000..=0xFFC0FFFF`: overlong 4-byte UTF-8.
    Overlong4,
    /// `0xFFC10000..=0xFFDFFFFF`: 4-byte UTF-8, non-canonical continuation.
    Invalid4Unmasked,
    /// `0xFFE00000..=0xFFF7FFFF`: UTF-8 underflow, 4 of 5 bytes consumed.
    Utf8Underflow4Of5,
    /// `0xFFF80000..=0xFFFDFFFF`: reserved, unreachable.
    ReservedBelowOverlong3,
    /// `0xFFFE0000..=0xFFFE07FF`: overlong 3-byte UTF-8.
    Overlong3,
    /// `0xFFFE0800..=0xFFFEFFFF`: 3-byte UTF-8, non-canonical continuation.
    Invalid3Unmasked,
    /// `0xFFFF0000..=0xFFFFDFFF`: UTF-8 underflow, 3 of 4 bytes consumed.
    Utf8Underflow3Of4,
    /// `0xFFFFE000..=0xFFFFEFFF`: reserved, unreachable.
    ReservedBelowOverlong2,
    /// `0xFFFFF000..=0xFFFFF07F`: overlong 2-byte UTF-8.
    Overlong2,
    /// `0xFFFFF080..=0xFFFFF7FF`: 2-byte UTF-8, non-canonical continuation.
    Invalid2Unmasked,
    /// `0xFFFFF800..=0xFFFFFF7F`: UTF-8 underflow, 2 of 3 bytes consumed.
    Utf8Underflow2Of3,
    /// `0xFFFFFF80..=0xFFFFFFBF`: a lone UTF-8 continuation byte.
    LoneContinuation,
    /// `0xFFFFFFC0..=0xFFFFFFFD`: a lone UTF-8 leading byte, awaiting continuations.
    LoneLeadingByte,
    /// `0xFFFFFFFE..=0xFFFFFFFF`: a lone invalid UTF-8 byte (`0xFE` or `0xFF`).
    LoneInvalidByte,
}

impl Region {
    /// Classifies a raw register value into its region, ignoring `empty`.
    pub const fn of(raw: u32) -> Self {
        match raw {
            0x0000_0000..=0x0010_FFFF => Region::ValidUnicode,
            0x0011_0000..=0x7FFF_FFFF => Region::NonUnicodeExtended,
            0x8000_0000..=0xDDD7_FFFF => Region::ReservedTopHalf,
            0xDDD8_0000..=0xDDDB_FFFF => Region::Utf16PartialHighSurrogateStray,
            0xDDDC_0000..=0xDDDD_DCFF => Region::ReservedAfterSurrogatePark,
            0xDDDD_DD00..=0xDDDD_DDFF => Region::Utf16PartialStray,
            0xDDDD_DE00..=0xEFFF_FFFF => Region::ReservedBelowOverlong6,
            0xF000_0000..=0xF3FF_FFFF => Region::Overlong6,
            0xF400_0000..=0xF7FF_FFFF => Region::ReservedAfterOverlong6,
            0xF800_0000..=0xF81F_FFFF => Region::Overlong5,
            0xF820_0000..=0xFBFF_FFFF => Region::Invalid5Unmasked,
            0xFC00_0000..=0xFDFF_FFFF => Region::Utf8Underflow5Of6,
            0xFE00_0000..=0xFFBF_FFFF => Region::ReservedBelowOverlong4,
            0xFFC0_0000..=0xFFC0_FFFF => Region::Overlong4,
            0xFFC1_0000..=0xFFDF_FFFF => Region::Invalid4Unmasked,
            0xFFE0_0000..=0xFFF7_FFFF => Region::Utf8Underflow4Of5,
            0xFFF8_0000..=0xFFFD_FFFF => Region::ReservedBelowOverlong3,
            0xFFFE_0000..=0xFFFE_07FF => Region::Overlong3,
            0xFFFE_0800..=0xFFFE_FFFF => Region::Invalid3Unmasked,
            0xFFFF_0000..=0xFFFF_DFFF => Region::Utf8Underflow3Of4,
            0xFFFF_E000..=0xFFFF_EFFF => Region::ReservedBelowOverlong2,
            0xFFFF_F000..=0xFFFF_F07F => Region::Overlong2,
            0xFFFF_F080..=0xFFFF_F7FF => Region::Invalid2Unmasked,
            0xFFFF_F800..=0xFFFF_FF7F => Region::Utf8Underflow2Of3,
            0xFFFF_FF80..=0xFFFF_FFBF => Region::LoneContinuation,
            0xFFFF_FFC0..=0xFFFF_FFFD => Region::LoneLeadingByte,
            0xFFFF_FFFE..=0xFFFF_FFFF => Region::LoneInvalidByte,
        }
    }

    /// Whether this region is one of the seven "more bytes needed" underflow ranges.
    pub const fn is_underflow(self) -> bool {
        matches!(
            self,
            Region::Utf16PartialHighSurrogateStray
                | Region::Utf16PartialStray
                | Region::Utf8Underflow5Of6
                | Region::Utf8Underflow4Of5
                | Region::Utf8Underflow3Of4
                | Region::Utf8Underflow2Of3
                | Region::LoneLeadingByte
        )
    }

    /// Whether this region represents input that cannot correspond to any
    /// legal encoding (reserved ranges, non-canonical continuations, lone
    /// continuation/invalid bytes).
    pub const fn is_invalid(self) -> bool {
        matches!(
            self,
            Region::ReservedTopHalf
                | Region::ReservedAfterSurrogatePark
                | Region::ReservedBelowOverlong6
                | Region::ReservedAfterOverlong6
                | Region::Invalid5Unmasked
                | Region::ReservedBelowOverlong4
                | Region::Invalid4Unmasked
                | Region::ReservedBelowOverlong3
                | Region::Invalid3Unmasked
                | Region::ReservedBelowOverlong2
                | Region::Invalid2Unmasked
                | Region::LoneContinuation
                | Region::LoneInvalidByte
        )
    }

    /// Whether this region is a legal-shape UTF-8 sequence that used more
    /// bytes than the minimum required for its code point.
    pub const fn is_overlong(self) -> bool {
        matches!(
            self,
            Region::Overlong6 | Region::Overlong5 | Region::Overlong4 | Region::Overlong3 | Region::Overlong2
        )
    }

    /// Whether this region's code point is outside `0..=0x10FFFF`.
    pub const fn is_nonuni(self) -> bool {
        matches!(self, Region::NonUnicodeExtended)
    }
}

/// The four derived status flags of the data model.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Status {
    /// The register holds a complete value (not a partial/underflowed input).
    pub ready: bool,
    /// The consumed input cannot correspond to any legal encoding.
    pub invalid: bool,
    /// A legal-shape sequence that encoded its code point non-minimally.
    pub overlong: bool,
    /// A valid encoding whose code point is outside `0..=0x10FFFF`.
    pub nonuni: bool,
}

impl Status {
    /// `error = invalid | overlong | (nonuni & chk_range)`, before folding in `retry`.
    ///
    /// The full `error` observable (`spec.md` §7) also ORs in the host's
    /// sticky `retry` latch; that bit lives on [`crate::core::transcoder::Transcoder`],
    /// not here, since `Status` is a pure function of the register alone.
    pub const fn error_excluding_retry(self, chk_range: bool) -> bool {
        self.invalid || self.overlong || (self.nonuni && chk_range)
    }
}

/// Classifies a register value (plus the private `empty` marker) into its
/// region and status flags. This is the `classify(R, chk_range)` function
/// named in the design notes.
pub const fn classify(register: Register, empty: bool, chk_range: bool) -> (Region, Status) {
    let region = Region::of(register.raw());
    let ready = !empty && !region.is_underflow();
    let status = Status {
        ready,
        invalid: region.is_invalid(),
        overlong: region.is_overlong(),
        nonuni: region.is_nonuni(),
    };
    let _ = chk_range; // chk_range affects `error`, not the flags themselves.
    (region, status)
}
