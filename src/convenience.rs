//! One-shot `Result`-returning helpers built on [`crate::core::Transcoder`],
//! plus the fixed-capacity output types they hand back.
//!
//! Mirrors `risky`'s `raw` (exact, bit-level, used by `core::*`) versus
//! `strongly_typed` (ergonomic, `Result`-returning) split: everything here
//! just drives a fresh [`Transcoder`] byte by byte and turns its final
//! [`crate::core::Status`] into either a value or a [`TranscodeError`].

use crate::core::{Config, Region, Transcoder};
use crate::error::TranscodeError;

/// The UTF-8 bytes encoding one register value: 1 to 6 bytes, left-aligned.
/// Grounded on the `encode_unicode` crate's `Utf8Char` (a fixed `[u8; 4]`
/// plus a length), widened here to 6 bytes for the FSS-UTF extended range
/// this register supports beyond standard Unicode.
#[derive(Clone, Copy, Debug)]
pub struct Utf8Bytes {
    bytes: [u8; 6],
    len: u8,
}

impl Utf8Bytes {
    /// The encoded bytes, with no trailing padding.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

/// The UTF-16 units encoding one register value: one unit, or a surrogate
/// pair. Grounded on `encode_unicode`'s `Utf16Char` (`(u16, Option<u16>)`),
/// expressed here as a fixed-capacity array plus a length for symmetry with
/// [`Utf8Bytes`].
#[derive(Clone, Copy, Debug)]
pub struct Utf16Units {
    units: [u16; 2],
    len: u8,
}

impl Utf16Units {
    /// The encoded units, with no trailing padding.
    pub fn as_slice(&self) -> &[u16] {
        &self.units[..self.len as usize]
    }
}

/// Reads back whatever `t` currently holds as a plain `u32`, turning its
/// status flags into the matching [`TranscodeError`] variant.
fn finish(t: &Transcoder) -> Result<u32, TranscodeError> {
    let status = t.status();
    if !status.ready {
        return Err(TranscodeError::Truncated);
    }
    if status.invalid {
        return Err(TranscodeError::Invalid(t.region()));
    }
    if status.overlong {
        return Err(TranscodeError::Overlong(t.region()));
    }
    if status.nonuni && t.config().chk_range {
        return Err(TranscodeError::OutOfRange(t.register().raw()));
    }
    Ok(t.register().raw())
}

/// Decodes the leading UTF-8 sequence of `bytes`, returning the decoded
/// value and how many bytes it consumed.
pub fn decode_utf8(bytes: &[u8], config: Config) -> Result<(u32, usize), TranscodeError> {
    let mut t = Transcoder::new(config);
    for (consumed, &byte) in bytes.iter().enumerate() {
        t.write_utf8(byte);
        if t.status().ready {
            return finish(&t).map(|value| (value, consumed + 1));
        }
        if t.retry() {
            return Err(TranscodeError::Invalid(t.region()));
        }
    }
    Err(TranscodeError::Truncated)
}

/// Encodes `value` to its UTF-8 rendition.
pub fn encode_utf8(value: u32, config: Config) -> Result<Utf8Bytes, TranscodeError> {
    let mut t = Transcoder::new(config);
    write_utf32_value(&mut t, value);
    let status = t.status();
    if status.invalid {
        return Err(TranscodeError::Invalid(t.region()));
    }
    if status.nonuni && config.chk_range {
        return Err(TranscodeError::OutOfRange(value));
    }
    let len = t.pointers().rbip();
    if len == 0 {
        return Err(TranscodeError::OutOfRange(value));
    }
    let mut bytes = [0u8; 6];
    for slot in bytes.iter_mut().take(len as usize) {
        *slot = t.read_utf8();
    }
    Ok(Utf8Bytes { bytes, len })
}

/// Decodes the leading UTF-16 sequence of `bytes` (a byte-serial stream in
/// `config.cbe`'s byte order), returning the decoded value and how many
/// bytes it consumed.
pub fn decode_utf16(bytes: &[u8], config: Config) -> Result<(u32, usize), TranscodeError> {
    let mut t = Transcoder::new(config);
    for (consumed, &byte) in bytes.iter().enumerate() {
        t.write_utf16(byte);
        if t.status().ready && !t.retry() {
            return finish(&t).map(|value| (value, consumed + 1));
        }
    }
    Err(TranscodeError::Truncated)
}

/// Encodes `value` to its UTF-16 rendition.
pub fn encode_utf16(value: u32, config: Config) -> Result<Utf16Units, TranscodeError> {
    let mut t = Transcoder::new(config);
    write_utf32_value(&mut t, value);
    let len = t.pointers().ruip();
    if len != 2 && len != 4 {
        return Err(TranscodeError::OutOfRange(value));
    }
    let mut raw_bytes = [0u8; 4];
    for slot in raw_bytes.iter_mut().take(len as usize) {
        *slot = t.read_utf16();
    }
    let units = if len == 2 {
        [unit_from_bytes(raw_bytes[0], raw_bytes[1], config.cbe), 0]
    } else {
        [
            unit_from_bytes(raw_bytes[0], raw_bytes[1], config.cbe),
            unit_from_bytes(raw_bytes[2], raw_bytes[3], config.cbe),
        ]
    };
    Ok(Utf16Units {
        units,
        len: len / 2,
    })
}

fn unit_from_bytes(a: u8, b: u8, cbe: bool) -> u16 {
    if cbe {
        u16::from_be_bytes([a, b])
    } else {
        u16::from_le_bytes([a, b])
    }
}

/// Decodes a 4-byte UTF-32 value in `config.cbe`'s byte order.
pub fn decode_utf32(bytes: [u8; 4], config: Config) -> Result<u32, TranscodeError> {
    let mut t = Transcoder::new(config);
    for byte in bytes {
        t.write_utf32(byte);
    }
    finish(&t)
}

/// Encodes `value` to 4 UTF-32 bytes in `config.cbe`'s byte order.
pub fn encode_utf32(value: u32, config: Config) -> [u8; 4] {
    let mut t = Transcoder::new(config);
    write_utf32_value(&mut t, value);
    let mut bytes = [0u8; 4];
    for slot in &mut bytes {
        *slot = t.read_utf32();
    }
    bytes
}

fn write_utf32_value(t: &mut Transcoder, value: u32) {
    let bytes = if t.config().cbe {
        value.to_be_bytes()
    } else {
        value.to_le_bytes()
    };
    for byte in bytes {
        t.write_utf32(byte);
    }
}
