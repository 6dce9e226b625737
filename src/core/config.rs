//! The two configuration bits a host selects before driving the register.

/// `chk_range` / `cbe`: the two configuration bits from the external interface.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Config {
    /// When set, a non-Unicode extended code point (`nonuni`) contributes to
    /// `error`, and property bits are suppressed for `R >= 0x110000`.
    pub chk_range: bool,
    /// Byte order for UTF-32 and UTF-16 ingress/egress: `true` is big-endian,
    /// `false` is little-endian.
    pub cbe: bool,
}

impl Config {
    /// Strict Unicode range checking, big-endian byte order.
    pub const fn strict_be() -> Self {
        Self {
            chk_range: true,
            cbe: true,
        }
    }

    /// Strict Unicode range checking, little-endian byte order.
    pub const fn strict_le() -> Self {
        Self {
            chk_range: true,
            cbe: false,
        }
    }
}

impl Default for Config {
    /// `chk_range = false`, `cbe = false`: permissive range checking,
    /// little-endian byte order — the most common host environment.
    fn default() -> Self {
        Self {
            chk_range: false,
            cbe: false,
        }
    }
}
