//! The wired-up core: register, pointers and config behind the eight
//! operations of the external interface, `spec.md` §6.

use super::classify::{self, Region, Status};
use super::config::Config;
use super::dispatcher::StepRequest;
use super::pointers::Pointers;
use super::properties::{self, Properties};
use super::register::Register;
use super::{utf16, utf32, utf8};

/// The transcoder core: one 32-bit register, six pointers, the two
/// configuration bits, and the two bits of state a pure function of `R`
/// cannot recover — the sticky `retry` latch and, during an in-progress
/// UTF-16 decode, whether a parked high surrogate is still awaiting its
/// pair (see [`super::utf16`]).
///
/// Single-threaded and cooperative by design (`spec.md` §5): every method
/// here is one dispatched step: no suspension points, no internal locking.
/// Running many independent instances concurrently needs nothing from this
/// type beyond `Send`, which it gets for free since it owns no shared state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Transcoder {
    register: Register,
    pointers: Pointers,
    config: Config,
    empty: bool,
    retry: bool,
    awaiting_low_surrogate: bool,
}

impl Transcoder {
    /// A freshly reset transcoder using `config`.
    pub const fn new(config: Config) -> Self {
        Self {
            register: Register::ZERO,
            pointers: Pointers::new(),
            config,
            empty: true,
            retry: false,
            awaiting_low_surrogate: false,
        }
    }

    /// `reset_all`: clears the register, all six pointers, and `retry`.
    pub fn reset_all(&mut self) {
        *self = Self::new(self.config);
    }

    /// `reset_read`: zeroes the three output pointers only.
    pub fn reset_read(&mut self) {
        self.pointers.reset_read();
    }

    /// Writes one UTF-32 byte (`spec.md` §4.4).
    pub fn write_utf32(&mut self, byte: u8) {
        let ok = utf32::write_byte(&mut self.register, &mut self.pointers.rcip, byte, self.config.cbe);
        self.record_write(ok, self.pointers.rcip.get() == 1);
        self.resync_cross_pointers();
    }

    /// Writes one UTF-8 byte (`spec.md` §4.5).
    pub fn write_utf8(&mut self, byte: u8) {
        let ok = if self.pointers.rbip.get() == 0 {
            utf8::write_entry_byte(&mut self.register, &mut self.pointers.rbip, byte)
        } else {
            let already_ready = self.status().ready;
            utf8::write_continuation_byte(&mut self.register, &mut self.pointers.rbip, byte, already_ready)
        };
        self.record_write(ok, self.pointers.rbip.get() == 1);
        self.resync_cross_pointers();
    }

    /// Writes one UTF-16 byte (`spec.md` §4.7).
    pub fn write_utf16(&mut self, byte: u8) {
        match utf16::write_byte(
            &mut self.register,
            &mut self.pointers.ruip,
            self.awaiting_low_surrogate,
            byte,
            self.config.cbe,
        ) {
            Some(outcome) => {
                self.awaiting_low_surrogate = outcome.awaiting_low_surrogate;
                // `ruip == 1` after the write covers both a genuine first
                // byte and the revert-then-resubmit arm of `utf16::write_byte`
                // (`ruip.reset()` followed by `park_first_byte`), which also
                // starts a fresh word even though `ruip` read 2 beforehand.
                self.record_write(true, self.pointers.ruip.get() == 1);
                if outcome.retry {
                    self.retry = true;
                }
            }
            None => self.record_write(false, false),
        }
        self.resync_cross_pointers();
    }

    /// Reads one UTF-32 byte (`spec.md` §4.4).
    pub fn read_utf32(&mut self) -> u8 {
        utf32::read_byte(&self.register, &mut self.pointers.rcop, self.config.cbe)
    }

    /// Reads one UTF-8 byte (`spec.md` §4.6).
    pub fn read_utf8(&mut self) -> u8 {
        let length = self.pointers.rbip();
        utf8::read_byte(&self.register, &mut self.pointers.rbop, length)
    }

    /// Reads one UTF-16 byte (`spec.md` §4.8).
    pub fn read_utf16(&mut self) -> u8 {
        let length = self.pointers.ruip();
        utf16::read_byte(&self.register, &mut self.pointers.ruop, length, self.config.cbe)
    }

    /// The raw register value.
    pub const fn register(&self) -> Register {
        self.register
    }

    /// The six pointers and their derived end-of-data flags.
    pub const fn pointers(&self) -> &Pointers {
        &self.pointers
    }

    /// The active configuration.
    pub const fn config(&self) -> Config {
        self.config
    }

    /// The region `R` currently occupies.
    pub const fn region(&self) -> Region {
        Region::of(self.register.raw())
    }

    /// The four status flags, with the one correction a pure function of
    /// `R` cannot make: a high surrogate still awaiting its low half reads
    /// as not-ready even though its bit pattern is identical to one
    /// already republished by a UTF-16 revert.
    pub const fn status(&self) -> Status {
        let (_, status) = classify::classify(self.register, self.empty, self.config.chk_range);
        if self.awaiting_low_surrogate {
            Status {
                ready: false,
                ..status
            }
        } else {
            status
        }
    }

    /// The six character-property bits.
    pub const fn properties(&self) -> Properties {
        properties::properties(self.register, self.status(), self.config.chk_range)
    }

    /// The sticky `retry` latch.
    pub const fn retry(&self) -> bool {
        self.retry
    }

    /// `error = retry | invalid | overlong | (nonuni & chk_range)`.
    pub const fn error(&self) -> bool {
        self.retry || self.status().error_excluding_retry(self.config.chk_range)
    }

    /// Bundles every observable named in `spec.md` §6 into one value.
    pub const fn observe(&self) -> Snapshot {
        Snapshot {
            register: self.register,
            pointers: self.pointers,
            status: self.status(),
            properties: self.properties(),
            retry: self.retry,
            error: self.error(),
        }
    }

    /// Picks the single highest-priority request out of `pending` (per
    /// `spec.md` §4.1) and performs it, for a host modelling several request
    /// lines asserted in the same step. Returns the read byte for a read
    /// request; `None` for a write/reset request or an empty `pending` set.
    pub fn step(&mut self, pending: &[StepRequest]) -> Option<u8> {
        self.step_one(StepRequest::dispatch(pending)?)
    }

    /// Performs exactly one request, returning the read byte for a read request.
    fn step_one(&mut self, request: StepRequest) -> Option<u8> {
        match request {
            StepRequest::ResetAll => {
                self.reset_all();
                None
            }
            StepRequest::ResetRead => {
                self.reset_read();
                None
            }
            StepRequest::WriteUtf32(byte) => {
                self.write_utf32(byte);
                None
            }
            StepRequest::WriteUtf8(byte) => {
                self.write_utf8(byte);
                None
            }
            StepRequest::WriteUtf16(byte) => {
                self.write_utf16(byte);
                None
            }
            StepRequest::ReadUtf32 => Some(self.read_utf32()),
            StepRequest::ReadUtf8 => Some(self.read_utf8()),
            StepRequest::ReadUtf16 => Some(self.read_utf16()),
        }
    }

    /// Records a write attempt: `empty` clears on any success; `retry` is
    /// cleared on any successful *first-byte* write (`first_byte` is the
    /// relevant input pointer reading 1 once the write completes) or by a
    /// full reset, and set on any rejected write — matching the universal
    /// property that a successful first-byte write always clears `retry`,
    /// not only the very first write since construction.
    fn record_write(&mut self, success: bool, first_byte: bool) {
        if success {
            self.empty = false;
            if first_byte {
                self.retry = false;
            }
        } else {
            self.retry = true;
        }
    }

    /// After any write, `rbip` and `ruip` are re-derived from the resulting
    /// `R` (`spec.md` §4.5's design note, generalised to both variable-length
    /// encodings) so that a register reached via one encoding is immediately
    /// readable through either of the others.
    fn resync_cross_pointers(&mut self) {
        let rbip = if self.empty { 0 } else { utf8::encoded_length(self.register) };
        let ruip = if self.empty { 0 } else { utf16::encoded_length(self.register) };
        self.pointers.rbip.set(rbip);
        self.pointers.ruip.set(ruip);
    }
}

impl Default for Transcoder {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// A snapshot of every observable named in `spec.md` §6, taken together so a
/// caller need not re-derive `error` or `properties` from a half-updated view.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Snapshot {
    pub register: Register,
    pub pointers: Pointers,
    pub status: Status,
    pub properties: Properties,
    pub retry: bool,
    pub error: bool,
}
