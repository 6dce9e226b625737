//! The one-action-per-step request type, `spec.md` §4.1.

/// The eight external operations the dispatcher chooses between, plus the
/// fixed priority order used when more than one is requested in the same
/// step (only ever relevant to a host driving several request lines at
/// once, as the register's Verilog origin would).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum StepRequest {
    /// Clear all state: register, pointers, flags.
    ResetAll,
    /// Zero the three output pointers only.
    ResetRead,
    /// Write one UTF-32 byte.
    WriteUtf32(u8),
    /// Write one UTF-8 byte.
    WriteUtf8(u8),
    /// Write one UTF-16 byte.
    WriteUtf16(u8),
    /// Read one UTF-32 byte.
    ReadUtf32,
    /// Read one UTF-8 byte.
    ReadUtf8,
    /// Read one UTF-16 byte.
    ReadUtf16,
}

impl StepRequest {
    /// This request's priority: lower fires first when several are pending.
    /// Matches the fixed order of `spec.md` §4.1.
    const fn priority(self) -> u8 {
        match self {
            StepRequest::ResetAll => 0,
            StepRequest::ResetRead => 1,
            StepRequest::WriteUtf32(_) => 2,
            StepRequest::WriteUtf8(_) => 3,
            StepRequest::WriteUtf16(_) => 4,
            StepRequest::ReadUtf32 => 5,
            StepRequest::ReadUtf8 => 6,
            StepRequest::ReadUtf16 => 7,
        }
    }

    /// Picks the single highest-priority request from a step's pending set.
    /// Mirrors the dispatcher's "exactly one action per step" contract for a
    /// host that models several simultaneous request lines, as
    /// [`crate::core::transcoder::Transcoder::step`] does. A host that only
    /// ever issues one request at a time can call the matching `Transcoder`
    /// method directly instead.
    pub fn dispatch(pending: &[StepRequest]) -> Option<StepRequest> {
        pending.iter().copied().min_by_key(|r| r.priority())
    }
}
