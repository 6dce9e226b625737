//! The property classifier: six more bits, also a pure function of the
//! register value (plus the status flags and `chk_range`).

use super::classify::Status;
use super::register::Register;

/// The six character-property bits of `spec.md` §4.3.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Properties {
    /// A ready, error-free, unremarkable character.
    pub normal: bool,
    /// A C0 or C1 control code.
    pub control: bool,
    /// A UTF-16 surrogate code point (`0xD800..0xE000`).
    pub surrogate: bool,
    /// A surrogate or any code point `>= 0x10000`.
    pub highchar: bool,
    /// A private-use code point.
    pub private: bool,
    /// A noncharacter (`0xFDD0..0xFDF0` or the last two code points of any plane).
    pub nonchar: bool,
}

/// Classifies the six property bits for `register`, given its already-computed
/// [`Status`] and the `chk_range` configuration bit.
pub const fn properties(register: Register, status: Status, chk_range: bool) -> Properties {
    let raw = register.raw();

    if raw >= 0x8000_0000 {
        return Properties {
            normal: false,
            control: false,
            surrogate: false,
            highchar: false,
            private: false,
            nonchar: false,
        };
    }

    let control = raw < 0x20 || (0x7F <= raw && raw < 0xA0);
    let surrogate = 0xD800 <= raw && raw < 0xE000;
    let highchar = (0xD800 <= raw && raw < 0xDC00) || raw >= 0x1_0000;
    let low16 = raw & 0xFFFF;
    let private = (0xDB80 <= raw && raw < 0xDC00)
        || (0xE000 <= raw && raw < 0xF900)
        || (raw >= 0xF_0000 && (!chk_range || raw < 0x11_0000) && low16 < 0xFFFE);
    let nonchar = (0xFDD0 <= raw && raw < 0xFDF0) || low16 >= 0xFFFE;

    let error = status.error_excluding_retry(chk_range);
    let normal = status.ready && !error && !(control || surrogate || private || nonchar);

    Properties {
        normal,
        control,
        surrogate,
        highchar,
        private,
        nonchar,
    }
}
