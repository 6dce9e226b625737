//! A byte-serial transcoder between UTF-32, an FSS-UTF-compatible
//! variable-length encoding, and UTF-16 (with surrogate pairs), built around
//! a single 32-bit character register.
//!
//! [`core::Transcoder`] is the whole story: feed it one byte at a time
//! through [`core::Transcoder::write_utf32`], [`core::Transcoder::write_utf8`]
//! or [`core::Transcoder::write_utf16`], and read the other two renditions
//! back out one byte at a time through the matching `read_*` method. Every
//! method call is one combinational step — no buffering beyond the register
//! itself, no allocation, no panics.
//!
//! ```
//! use uniregister::core::{Config, Transcoder};
//!
//! let mut t = Transcoder::new(Config::default());
//! for byte in [0xF0, 0x9F, 0x8D, 0x8D] {
//!     t.write_utf8(byte);
//! }
//! assert!(t.status().ready);
//! assert_eq!(t.register().raw(), 0x1F34D);
//!
//! let utf16: Vec<u8> = (0..t.pointers().ruip()).map(|_| t.read_utf16()).collect();
//! assert_eq!(utf16, [0x3C, 0xD8, 0x4D, 0xDF]);
//! ```
//!
//! [`convenience`] wraps the same core in one-shot `Result`-returning
//! functions for callers who just want to encode or decode a whole value
//! without driving the register themselves.
#![warn(missing_docs)]

pub mod convenience;
pub mod core;
pub mod error;
