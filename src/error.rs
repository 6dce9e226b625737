//! The error type for the [`crate::convenience`] one-shot helpers.
//!
//! The per-byte register core never fails at that granularity (`spec.md`
//! §7): a rejected write just sets `retry`, and an oddly-shaped register
//! value is still a value, classified rather than rejected. `TranscodeError`
//! exists only at the convenience layer, where "decode this byte slice to
//! one character" needs a `Result` a caller can `?` through. Hand-rolled in
//! `risky::decoding::DecodeError`'s style: manual `Debug`/`Display`, no
//! `thiserror` for a four-variant enum.

use core::fmt;
use std::error::Error;
use std::fmt::Display;

use crate::core::Region;

/// Why a one-shot encode or decode in [`crate::convenience`] failed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscodeError {
    /// The input ran out before the register reached a ready state.
    Truncated,
    /// The consumed bytes cannot correspond to any legal encoding.
    Invalid(Region),
    /// A legal-shape sequence that encoded its code point non-minimally.
    Overlong(Region),
    /// A valid encoding whose code point lies outside `0..=0x10FFFF`, and
    /// the caller's [`crate::core::Config::chk_range`] rejects it.
    OutOfRange(u32),
}

impl fmt::Debug for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscodeError::Truncated => write!(f, "Truncated"),
            TranscodeError::Invalid(region) => write!(f, "Invalid({region:?})"),
            TranscodeError::Overlong(region) => write!(f, "Overlong({region:?})"),
            TranscodeError::OutOfRange(value) => write!(f, "OutOfRange(0x{value:06X})"),
        }
    }
}

impl Display for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscodeError::Truncated => write!(f, "input ended before a character was complete"),
            TranscodeError::Invalid(region) => write!(f, "not a legal encoding ({region:?})"),
            TranscodeError::Overlong(region) => write!(f, "overlong encoding ({region:?})"),
            TranscodeError::OutOfRange(value) => {
                write!(f, "code point 0x{value:06X} is outside 0..=0x10FFFF")
            }
        }
    }
}

impl Error for TranscodeError {}
